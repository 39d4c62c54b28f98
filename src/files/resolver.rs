//! Allow-list checked file serving with `{time}` template expansion.

use std::path::PathBuf;

use anyhow::Context;

use crate::config::StaticFilesConfig;
use crate::http::mime;
use crate::http::response::{ResponseBuilder, StatusCode};
use crate::http::writer::ResponseSink;

/// Placeholder replaced with the current local time in templated files.
const TIME_PLACEHOLDER: &str = "{time}";

/// Serves allow-listed request paths from a root directory.
pub struct StaticFiles {
    root: PathBuf,
    allow_list: Vec<String>,
    templated: Vec<String>,
}

impl StaticFiles {
    pub fn new(cfg: &StaticFilesConfig) -> Self {
        Self {
            root: cfg.root.clone(),
            allow_list: cfg.allow_list.clone(),
            templated: cfg.templated.clone(),
        }
    }

    /// Serve `path` into `sink` if it is allow-listed.
    ///
    /// Returns `Ok(false)` when the path is not in the allow-list - the
    /// caller decides what a miss looks like. A failed read of a listed
    /// file is an error: the file was promised by configuration.
    pub async fn serve(&self, path: &str, sink: &mut ResponseSink) -> anyhow::Result<bool> {
        if !self.allow_list.iter().any(|allowed| allowed == path) {
            return Ok(false);
        }

        let file_path = self.root.join(path.trim_start_matches('/'));

        let mut content = tokio::fs::read(&file_path)
            .await
            .with_context(|| format!("reading static file {}", file_path.display()))?;

        if self.templated.iter().any(|templated| templated == path) {
            content = expand_time(&content).into_bytes();
        }

        tracing::debug!(path = %path, bytes = content.len(), "Serving static file");

        let response = ResponseBuilder::new(StatusCode::Ok)
            .header("Content-Type", mime::content_type_for(path))
            .body(content)
            .build();

        sink.write_response(&response);
        Ok(true)
    }
}

/// Replace every `{time}` in `content` with the current local timestamp.
fn expand_time(content: &[u8]) -> String {
    let now = chrono::Local::now().naive_local();
    String::from_utf8_lossy(content).replace(TIME_PLACEHOLDER, &now.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_time_replaces_placeholder() {
        let expanded = expand_time(b"<p>It is {time} now</p>");

        assert!(!expanded.contains("{time}"));
        assert!(expanded.starts_with("<p>It is "));
        assert!(expanded.ends_with(" now</p>"));
    }
}
