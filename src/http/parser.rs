//! Raw-socket HTTP request parsing.
//!
//! The parser performs a single bounded read into a fixed look-ahead buffer,
//! delimits the request line and header block inside that window with
//! [`scan::find`], and only ever goes back to the stream for body bytes that
//! did not fit the initial read. Requests whose request line or header block
//! exceed the window are rejected; the buffer is never grown.

use std::fmt;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::http::request::{self, Method, Request};
use crate::http::scan;

/// Size of the look-ahead buffer. Request line and headers must fit.
const BUFFER_LIMIT: usize = 4096;

const REQUEST_LINE_DELIMITER: &[u8] = b"\r\n";
const HEADERS_DELIMITER: &[u8] = b"\r\n\r\n";

#[derive(Debug)]
pub enum ParseError {
    /// The stream was at EOF before any request byte arrived.
    EmptyRequest,
    /// No `\r\n` inside the look-ahead window.
    RequestLineTooLong,
    /// The request line did not split into exactly three tokens.
    MalformedRequestLine,
    /// The method is not in the allow-list.
    UnsupportedMethod,
    /// The request target does not start with `/`.
    InvalidPath,
    /// No `\r\n\r\n` inside the look-ahead window.
    HeadersTooLong,
    /// `Content-Length` was present but not a non-negative integer.
    MalformedContentLength,
    /// The underlying stream failed while reading.
    Io(std::io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::EmptyRequest => write!(f, "empty request"),
            ParseError::RequestLineTooLong => {
                write!(f, "request line exceeds {} byte window", BUFFER_LIMIT)
            }
            ParseError::MalformedRequestLine => write!(f, "malformed request line"),
            ParseError::UnsupportedMethod => write!(f, "unsupported method"),
            ParseError::InvalidPath => write!(f, "invalid request path"),
            ParseError::HeadersTooLong => {
                write!(f, "headers exceed {} byte window", BUFFER_LIMIT)
            }
            ParseError::MalformedContentLength => write!(f, "malformed Content-Length"),
            ParseError::Io(e) => write!(f, "i/o error while reading request: {}", e),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

/// Parse one request off `stream`.
///
/// Reads at most once into the look-ahead buffer for the request line and
/// headers; body bytes beyond the buffered window are read exactly to the
/// announced `Content-Length`.
pub async fn parse<S>(stream: &mut S) -> Result<Request, ParseError>
where
    S: AsyncRead + Unpin,
{
    let mut buffer = [0u8; BUFFER_LIMIT];
    let available = stream.read(&mut buffer).await?;

    if available == 0 {
        return Err(ParseError::EmptyRequest);
    }

    let request_line_end = scan::find(&buffer, REQUEST_LINE_DELIMITER, 0, available)
        .ok_or(ParseError::RequestLineTooLong)?;

    let request_line = String::from_utf8_lossy(&buffer[..request_line_end]);
    let mut tokens = request_line.split(' ');

    let (method, target) = match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(method), Some(target), Some(_version), None) => (method, target),
        _ => return Err(ParseError::MalformedRequestLine),
    };

    let method = Method::from_str(method).ok_or(ParseError::UnsupportedMethod)?;

    if !target.starts_with('/') {
        return Err(ParseError::InvalidPath);
    }

    // root redirect to index.html
    let target = if target == "/" { "/index.html" } else { target };

    let headers_start = request_line_end + REQUEST_LINE_DELIMITER.len();
    let headers_end = scan::find(&buffer, HEADERS_DELIMITER, headers_start, available)
        .ok_or(ParseError::HeadersTooLong)?;

    let headers: Vec<String> = String::from_utf8_lossy(&buffer[headers_start..headers_end])
        .split("\r\n")
        .map(str::to_string)
        .collect();

    // GET never carries a body; everything else needs Content-Length to get one
    let mut body = None;
    if method != Method::GET {
        if let Some(value) = request::extract_header(&headers, "Content-Length") {
            let length: usize = value
                .parse()
                .map_err(|_| ParseError::MalformedContentLength)?;

            // the delimiter match guarantees body_start <= available
            let body_start = headers_end + HEADERS_DELIMITER.len();
            body = Some(read_body(stream, &buffer[body_start..available], length).await?);
        }
    }

    Ok(Request::new(method, target, headers, body))
}

/// Assemble exactly `length` body bytes: whatever the look-ahead read already
/// buffered past the header block, then the rest straight off the stream.
async fn read_body<S>(
    stream: &mut S,
    buffered: &[u8],
    length: usize,
) -> Result<Vec<u8>, ParseError>
where
    S: AsyncRead + Unpin,
{
    let mut body = Vec::with_capacity(length);
    body.extend_from_slice(&buffered[..buffered.len().min(length)]);

    if body.len() < length {
        let mut rest = vec![0u8; length - body.len()];
        stream.read_exact(&mut rest).await?;
        body.extend_from_slice(&rest);
    }

    Ok(body)
}
