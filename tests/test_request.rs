use hearth::http::request::{Method, Request};

#[test]
fn test_request_header_retrieval() {
    let req = Request::new(
        Method::GET,
        "/",
        vec![
            "Host: example.com".to_string(),
            "Content-Type: application/json".to_string(),
        ],
        None,
    );

    assert_eq!(req.header("Host"), Some("example.com"));
    assert_eq!(req.header("Content-Type"), Some("application/json"));
    assert_eq!(req.header("Missing"), None);
}

#[test]
fn test_request_header_match_is_case_sensitive_prefix() {
    let req = Request::new(
        Method::POST,
        "/api",
        vec!["content-length: 5".to_string(), "Content-Length: 7".to_string()],
        None,
    );

    // Lowercase line does not match; the first line with the exact prefix wins
    assert_eq!(req.header("Content-Length"), Some("7"));
}

#[test]
fn test_request_header_value_is_trimmed() {
    let req = Request::new(
        Method::GET,
        "/",
        vec!["Host:    spaced.example   ".to_string()],
        None,
    );

    assert_eq!(req.header("Host"), Some("spaced.example"));
}

#[test]
fn test_request_query_is_stripped_from_path() {
    let req = Request::new(Method::GET, "/search?q=rust", vec![], None);

    assert_eq!(req.path, "/search");
    assert_eq!(req.query_param("q"), Some("rust"));
}

#[test]
fn test_request_repeated_query_params_keep_order() {
    let req = Request::new(Method::GET, "/list?tag=a&tag=b&tag=c", vec![], None);

    assert_eq!(
        req.query_params("tag"),
        Some(&["a".to_string(), "b".to_string(), "c".to_string()][..])
    );
    assert_eq!(req.query_param("tag"), Some("a"));
}

#[test]
fn test_request_query_values_are_percent_decoded() {
    let req = Request::new(Method::GET, "/search?q=hello%20world&msg=a%2Bb", vec![], None);

    assert_eq!(req.query_param("q"), Some("hello world"));
    assert_eq!(req.query_param("msg"), Some("a+b"));
}

#[test]
fn test_request_trailing_question_mark_means_no_query() {
    let req = Request::new(Method::GET, "/page?", vec![], None);

    assert_eq!(req.path, "/page");
    assert!(req.query.is_empty());
}

#[test]
fn test_request_without_query() {
    let req = Request::new(Method::GET, "/plain", vec![], None);

    assert_eq!(req.path, "/plain");
    assert!(req.query.is_empty());
    assert_eq!(req.query_param("anything"), None);
}

#[test]
fn test_request_route_key() {
    let req = Request::new(Method::POST, "/echo?debug=1", vec![], Some(b"hi".to_vec()));

    assert_eq!(req.route_key(), (Method::POST, "/echo"));
}

#[test]
fn test_method_from_string() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("PUT"), None);
    assert_eq!(Method::from_str("get"), None); // Case-sensitive
}

#[test]
fn test_method_display_matches_wire_form() {
    assert_eq!(Method::GET.to_string(), "GET");
    assert_eq!(Method::POST.to_string(), "POST");
}
