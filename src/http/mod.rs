//! HTTP protocol implementation.
//!
//! This module implements a close-after-one-exchange HTTP/1.1 server core:
//! a raw-socket request parser and the per-connection dispatch around it.
//!
//! # Architecture
//!
//! - **`scan`**: bounded byte search used to delimit the request on the wire
//! - **`parser`**: turns the incoming byte stream into a [`request::Request`]
//! - **`request`**: parsed request representation and header/query access
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: the buffered sink responses are written and flushed through
//! - **`mime`**: content-type detection based on file extensions
//! - **`connection`**: the per-socket handler tying parse, dispatch and write
//!   together
//!
//! # Request flow
//!
//! ```text
//! socket ──▶ parser ──▶ Request ──▶ registry lookup ──┬─▶ handler
//!                                                     └─▶ static files
//!                                    response bytes ◀─┘
//! ```
//!
//! Every response carries `Connection: close`; there is no keep-alive, no
//! pipelining and no chunked transfer encoding.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod scan;
pub mod writer;
