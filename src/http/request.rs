use std::collections::HashMap;
use std::fmt;

/// HTTP request methods.
///
/// The server only accepts the methods listed here; a request line naming
/// anything else fails parsing before dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET - Retrieve a resource. Never carries a body.
    GET,
    /// POST - Submit data. May carry a `Content-Length` delimited body.
    POST,
}

impl Method {
    /// Parses an HTTP method from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - String representation of the method (case-sensitive, uppercase)
    ///
    /// # Returns
    ///
    /// `Some(Method)` if the string matches an allowed method, `None` otherwise.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::request::Method;
    /// assert_eq!(Method::from_str("GET"), Some(Method::GET));
    /// assert_eq!(Method::from_str("get"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "GET" => Some(Method::GET),
            "POST" => Some(Method::POST),
            _ => None,
        }
    }

    /// The wire form of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a parsed HTTP request from a client.
///
/// Constructed once per connection by the parser. The request target is
/// split on construction: everything before `?` becomes [`path`], the rest
/// is decoded into the multi-valued [`query`] map.
///
/// [`path`]: Request::path
/// [`query`]: Request::query
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET or POST)
    pub method: Method,
    /// The request path with any query string stripped (e.g. "/index.html")
    pub path: String,
    /// Query parameters; a name may repeat, values keep their order of appearance
    pub query: HashMap<String, Vec<String>>,
    /// Raw header lines in wire order, duplicates preserved
    pub headers: Vec<String>,
    /// Request body; `None` for GET and for requests without `Content-Length`
    pub body: Option<Vec<u8>>,
}

impl Request {
    /// Build a request from the pieces the parser extracted. `target` is the
    /// raw request target, still carrying its query string if one was sent.
    pub fn new(method: Method, target: &str, headers: Vec<String>, body: Option<Vec<u8>>) -> Self {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path.to_string(), parse_query(query)),
            None => (target.to_string(), HashMap::new()),
        };

        Self {
            method,
            path,
            query,
            headers,
            body,
        }
    }

    /// The (method, path) pair used for handler lookup.
    pub fn route_key(&self) -> (Method, &str) {
        (self.method, &self.path)
    }

    /// Retrieves a header value by name.
    ///
    /// The match is a prefix match on the raw line, case-sensitive, and the
    /// first matching line wins; the value is everything after the colon,
    /// trimmed.
    ///
    /// # Example
    ///
    /// ```
    /// # use hearth::http::request::{Method, Request};
    /// let req = Request::new(
    ///     Method::GET,
    ///     "/",
    ///     vec!["Host: localhost".to_string()],
    ///     None,
    /// );
    /// assert_eq!(req.header("Host"), Some("localhost"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        extract_header(&self.headers, name)
    }

    /// All values sent for a query parameter, in order of appearance.
    pub fn query_params(&self, name: &str) -> Option<&[String]> {
        self.query.get(name).map(Vec::as_slice)
    }

    /// The first value sent for a query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// First header line starting with `name`, value taken after the colon and
/// trimmed. Shared with the parser, which needs `Content-Length` before a
/// `Request` exists.
pub(crate) fn extract_header<'a, S: AsRef<str>>(headers: &'a [S], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .map(S::as_ref)
        .find(|line| line.starts_with(name))
        .and_then(|line| line.split_once(':'))
        .map(|(_, value)| value.trim())
}

fn parse_query(query: &str) -> HashMap<String, Vec<String>> {
    let mut params: HashMap<String, Vec<String>> = HashMap::new();

    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    params
}
