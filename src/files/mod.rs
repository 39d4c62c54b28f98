//! Static-file fallback.
//!
//! Paths with no registered handler are resolved against a configured
//! allow-list and served from the static root. The allow-list is the only
//! gate: the parser hands paths through verbatim, so anything not listed -
//! including traversal attempts - is declined here.

pub mod resolver;

pub use resolver::StaticFiles;
