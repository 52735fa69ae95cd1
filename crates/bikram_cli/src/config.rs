use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BikramConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Pattern for BS dates when no `--format` is given.
    #[serde(default = "default_format")]
    pub format: String,
    /// Print the AD date next to converted BS dates.
    #[serde(default)]
    pub show_ad: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            show_ad: false,
        }
    }
}

fn default_format() -> String {
    "%Y-%m-%d".to_string()
}

impl BikramConfig {
    /// Read `path`, or fall back to defaults when no file was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("no config file, using defaults");
            return Ok(Self::default());
        };
        info!(path = %path.display(), "reading config");
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&text).context("failed to parse TOML config")
    }
}
