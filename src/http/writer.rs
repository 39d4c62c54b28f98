use bytes::BytesMut;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::Response;

const HTTP_VERSION: &str = "HTTP/1.1";

fn serialize_response(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    // Status line
    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    // Headers
    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    // Header/body separator
    buf.extend_from_slice(b"\r\n");

    // Body
    buf.extend_from_slice(&resp.body);

    buf
}

/// The sink a handler writes its response into.
///
/// Handlers own the complete response: status line, headers, separator and
/// body all go through this buffer, and nothing inspects or rewrites what
/// they produce. The connection handler flushes the buffer to the socket
/// once the handler returns.
pub struct ResponseSink {
    buffer: BytesMut,
}

impl ResponseSink {
    pub fn new() -> Self {
        Self {
            buffer: BytesMut::with_capacity(1024),
        }
    }

    /// Append raw bytes to the pending response.
    pub fn write(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    /// Serialize a [`Response`] into the pending bytes.
    pub fn write_response(&mut self, response: &Response) {
        self.buffer.extend_from_slice(&serialize_response(response));
    }

    /// Bytes queued so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Write the pending bytes to `stream`, handling short writes.
    pub async fn flush_to<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let mut written = 0;

        while written < self.buffer.len() {
            let n = stream.write(&self.buffer[written..]).await?;

            if n == 0 {
                anyhow::bail!("connection closed while writing response");
            }

            written += n;
        }

        stream.flush().await?;
        Ok(())
    }
}

impl Default for ResponseSink {
    fn default() -> Self {
        Self::new()
    }
}
