//! Configuration loading for the `loanrisk` front end.
//!
//! Configuration is loaded from TOML with the following resolution order:
//! 1. `--config <path>` (CLI flag, must exist)
//! 2. `~/.loanrisk/config.toml` (user)
//! 3. `/etc/loanrisk/config.toml` (system)
//!
//! When none of these exist the built-in defaults are used. Command-line
//! flags are applied on top by the binary.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::{ClientConfig, DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use crate::{LoanRiskError, Result};

/// Front-end configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where and how to reach the prediction service.
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// Prediction endpoint (default: http://127.0.0.1:8000/predict).
    #[serde(default = "default_url")]
    pub url: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Terminal output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Colour the risk feedback (default: true; ignored when stdout is not a terminal).
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_color() -> bool {
    true
}

impl Config {
    /// Load configuration from the standard locations, falling back to
    /// defaults when no file is found.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_config_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Parse a specific config file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LoanRiskError::Configuration(format!("Failed to read config file {path:?}: {e}"))
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| {
            LoanRiskError::Configuration(format!("Failed to parse config file {path:?}: {e}"))
        })?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(LoanRiskError::Configuration(format!(
                "Config file not found: {path:?}"
            )));
        }

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".loanrisk").join("config.toml");
            if user_config.exists() {
                return Ok(Some(user_config));
            }
        }

        let system_config = PathBuf::from("/etc/loanrisk/config.toml");
        if system_config.exists() {
            return Ok(Some(system_config));
        }

        Ok(None)
    }

    /// Client settings described by this config.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::with_url(&self.service.url)
            .timeout(Duration::from_secs(self.service.timeout_secs))
    }
}
