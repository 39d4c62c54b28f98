use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::files::StaticFiles;
use crate::http::parser::{self, ParseError};
use crate::http::response::Response;
use crate::http::writer::ResponseSink;
use crate::routing::HandlerRegistry;

/// Handles one accepted connection: parse, dispatch, respond, close.
///
/// Generic over the stream so tests can drive it with in-memory duplex
/// pipes instead of real sockets.
pub struct Connection<S> {
    stream: S,
    registry: Arc<HandlerRegistry>,
    statics: Arc<StaticFiles>,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, registry: Arc<HandlerRegistry>, statics: Arc<StaticFiles>) -> Self {
        Self {
            stream,
            registry,
            statics,
        }
    }

    /// Run the single request/response exchange this connection gets.
    ///
    /// Malformed requests answer with the uniform not-found response; only
    /// I/O failures bubble up to the caller. Either way the connection is
    /// done when this returns.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let request = match parser::parse(&mut self.stream).await {
            Ok(request) => request,
            Err(ParseError::Io(e)) => {
                return Err(anyhow::Error::new(e).context("reading request"));
            }
            Err(e) => {
                tracing::debug!(error = %e, "Rejecting unparseable request");
                return self.reject().await;
            }
        };

        tracing::info!(method = %request.method, path = %request.path, "Request");

        let mut sink = ResponseSink::new();

        if let Some(handler) = self.registry.lookup(request.method, &request.path) {
            handler(&request, &mut sink);
        } else if !self.statics.serve(&request.path, &mut sink).await? {
            tracing::debug!(path = %request.path, "No handler and not allow-listed");
            return self.reject().await;
        }

        self.finish(sink).await
    }

    /// The uniform answer for everything that cannot be served.
    async fn reject(&mut self) -> anyhow::Result<()> {
        let mut sink = ResponseSink::new();
        sink.write_response(&Response::not_found());
        self.finish(sink).await
    }

    async fn finish(&mut self, mut sink: ResponseSink) -> anyhow::Result<()> {
        sink.flush_to(&mut self.stream).await?;
        self.stream.shutdown().await?;
        Ok(())
    }
}
