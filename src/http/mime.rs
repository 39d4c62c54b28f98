//! MIME type detection based on file extensions.

/// Content-Type for a request path, derived from its extension.
///
/// Unknown extensions (and paths without one) fall back to
/// `application/octet-stream`.
pub fn content_type_for(path: &str) -> &'static str {
    let extension = path.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");

    match extension {
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "json" => "application/json",
        "txt" => "text/plain",
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_extensions() {
        assert_eq!(content_type_for("/index.html"), "text/html");
        assert_eq!(content_type_for("/styles.css"), "text/css");
        assert_eq!(content_type_for("/spring.svg"), "image/svg+xml");
        assert_eq!(content_type_for("/download"), "application/octet-stream");
    }
}
