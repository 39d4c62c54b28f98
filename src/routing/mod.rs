//! Handler registration and lookup.
//!
//! The registry is populated by the bootstrap before the accept loop starts
//! and shared read-only with every connection afterwards.

pub mod registry;

pub use registry::{Handler, HandlerRegistry};
