use std::collections::HashMap;
use std::sync::Arc;

use crate::http::request::{Method, Request};
use crate::http::writer::ResponseSink;

/// A registered request handler.
///
/// Handlers receive the parsed request and the response sink and are fully
/// responsible for writing a complete response - status line, headers,
/// separator and body. The connection handler never wraps or validates what
/// a handler writes.
pub type Handler = Arc<dyn Fn(&Request, &mut ResponseSink) + Send + Sync>;

/// Exact-match routing table from (method, path) to handler.
///
/// Populate once before serving, then share behind an `Arc`: lookups are
/// read-only and need no locking.
#[derive(Default)]
pub struct HandlerRegistry {
    routes: HashMap<(Method, String), Handler>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Register a handler for a (method, path) pair.
    ///
    /// Registering the same pair twice silently replaces the earlier
    /// handler - the last registration wins.
    pub fn register<F>(&mut self, method: Method, path: impl Into<String>, handler: F)
    where
        F: Fn(&Request, &mut ResponseSink) + Send + Sync + 'static,
    {
        self.routes.insert((method, path.into()), Arc::new(handler));
    }

    /// Exact-match lookup; no patterns, no trailing-slash normalization.
    pub fn lookup(&self, method: Method, path: &str) -> Option<&Handler> {
        self.routes.get(&(method, path.to_string()))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
