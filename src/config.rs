//! Configuration management

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the analysis service
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the static sample-comments resource
    #[serde(default = "default_sample_path")]
    pub sample_path: String,
    /// Per-request timeout in seconds. Unset means requests never time out.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Number of batch items shown in the top list
    #[serde(default = "default_top_items")]
    pub top_items: usize,
    /// Start with dark mode enabled
    #[serde(default)]
    pub dark_mode: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_sample_path() -> String {
    "/static/uploads/sample_comments.txt".to_string()
}

fn default_top_items() -> usize {
    10
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            sample_path: default_sample_path(),
            request_timeout_secs: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            top_items: default_top_items(),
            dark_mode: false,
        }
    }
}

impl ServiceConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Config {
    /// Load configuration from file, with `SENTIMENT__*` environment overrides
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix("SENTIMENT").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        Ok(config)
    }

    /// Load from default locations, falling back to built-in defaults
    pub fn load_default() -> anyhow::Result<Self> {
        let paths = [
            "config.toml",
            "config.yaml",
            "~/.config/sentiment-dashboard/config.toml",
        ];

        for path in paths {
            let expanded = shellexpand::tilde(path);
            if Path::new(expanded.as_ref()).exists() {
                return Self::load(expanded.as_ref());
            }
        }

        tracing::debug!("No configuration file found, using defaults");
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("SENTIMENT").separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }
}
