use hearth::http::request::{Method, Request};
use hearth::http::writer::ResponseSink;
use hearth::routing::HandlerRegistry;

fn request(method: Method, path: &str) -> Request {
    Request::new(method, path, vec![], None)
}

#[test]
fn test_register_and_lookup() {
    let mut registry = HandlerRegistry::new();
    registry.register(Method::GET, "/err", |_req, sink| {
        sink.write(b"handled");
    });

    let handler = registry.lookup(Method::GET, "/err").expect("registered route");

    let mut sink = ResponseSink::new();
    handler(&request(Method::GET, "/err"), &mut sink);
    assert_eq!(sink.as_bytes(), b"handled");
}

#[test]
fn test_lookup_misses_on_method_mismatch() {
    let mut registry = HandlerRegistry::new();
    registry.register(Method::GET, "/err", |_req, _sink| {});

    assert!(registry.lookup(Method::POST, "/err").is_none());
}

#[test]
fn test_lookup_misses_on_unknown_path() {
    let mut registry = HandlerRegistry::new();
    registry.register(Method::GET, "/err", |_req, _sink| {});

    assert!(registry.lookup(Method::GET, "/other").is_none());
}

#[test]
fn test_lookup_is_exact_no_patterns() {
    let mut registry = HandlerRegistry::new();
    registry.register(Method::GET, "/api", |_req, _sink| {});

    assert!(registry.lookup(Method::GET, "/api/users").is_none());
    assert!(registry.lookup(Method::GET, "/api/").is_none());
}

#[test]
fn test_reregistering_overwrites_last_wins() {
    let mut registry = HandlerRegistry::new();
    registry.register(Method::GET, "/err", |_req, sink| {
        sink.write(b"first");
    });
    registry.register(Method::GET, "/err", |_req, sink| {
        sink.write(b"second");
    });

    assert_eq!(registry.len(), 1);

    let handler = registry.lookup(Method::GET, "/err").unwrap();
    let mut sink = ResponseSink::new();
    handler(&request(Method::GET, "/err"), &mut sink);

    // Only the second handler's side effect is observable
    assert_eq!(sink.as_bytes(), b"second");
}

#[test]
fn test_same_path_different_methods_are_distinct() {
    let mut registry = HandlerRegistry::new();
    registry.register(Method::GET, "/echo", |_req, sink| sink.write(b"get"));
    registry.register(Method::POST, "/echo", |_req, sink| sink.write(b"post"));

    assert_eq!(registry.len(), 2);

    let mut sink = ResponseSink::new();
    registry.lookup(Method::POST, "/echo").unwrap()(&request(Method::POST, "/echo"), &mut sink);
    assert_eq!(sink.as_bytes(), b"post");
}

#[test]
fn test_empty_registry() {
    let registry = HandlerRegistry::new();

    assert!(registry.is_empty());
    assert!(registry.lookup(Method::GET, "/index.html").is_none());
}
