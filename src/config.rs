use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Environment variable pointing at the configuration file.
const CONFIG_ENV: &str = "CONFIG";

/// Fallback configuration file next to the binary.
const DEFAULT_CONFIG_PATH: &str = "hearth.yaml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub static_files: StaticFilesConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to.
    pub listen_addr: String,

    /// Maximum number of connections handled concurrently.
    pub max_workers: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticFilesConfig {
    /// Directory the allow-listed paths resolve under.
    pub root: PathBuf,

    /// Exact request paths that may be served from `root`.
    pub allow_list: Vec<String>,

    /// Allow-listed paths whose content gets `{time}` expansion.
    pub templated: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            static_files: StaticFilesConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:9999".to_string(),
            max_workers: 64,
        }
    }
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            allow_list: [
                "/index.html",
                "/spring.svg",
                "/spring.png",
                "/resources.html",
                "/styles.css",
                "/app.js",
                "/links.html",
                "/forms.html",
                "/classic.html",
                "/events.html",
                "/events.js",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            templated: vec!["/classic.html".to_string()],
        }
    }
}

impl Config {
    /// Load the configuration from the file named by `CONFIG`, falling back
    /// to `hearth.yaml`. A missing file is not an error: the built-in
    /// defaults are used instead.
    pub fn load() -> anyhow::Result<Self> {
        let path =
            std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&path).exists() {
            tracing::info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }

        Self::from_file(Path::new(&path))
    }

    /// Parse a YAML configuration file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;

        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}
