//! Configuration types for the statusboard service

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
    #[serde(default = "default_log_refresh_probability")]
    pub log_refresh_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            poll_interval_ms: default_poll_interval_ms(),
            log_refresh_probability: default_log_refresh_probability(),
        }
    }
}

impl Config {
    /// Check configuration invariants, collecting every violation
    pub fn validate(&self) -> crate::Result<()> {
        let mut errors = Vec::new();

        if self.poll_interval_ms == 0 {
            errors.push("poll_interval_ms must be at least 1".to_string());
        }

        if !(0.0..=1.0).contains(&self.log_refresh_probability) {
            errors.push(format!(
                "log_refresh_probability must be between 0 and 1, got {}",
                self.log_refresh_probability
            ));
        }

        if self.backend.host.is_empty() {
            errors.push("backend.host must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(crate::StatusboardError::Config(errors.join("; ")))
        }
    }
}

/// Location of the reporting backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl BackendConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_poll_interval_ms() -> u64 {
    5000
}

fn default_log_refresh_probability() -> f64 {
    0.3
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::StatusboardError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
