//! Configuration management for Robokit

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Crate configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Locator poll deadline in milliseconds
    pub wait_timeout_ms: u64,

    /// Delay between locator poll attempts in milliseconds
    pub poll_interval_ms: u64,

    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wait_timeout_ms: 20_000,
            poll_interval_ms: 100,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Config::default();

        if let Ok(timeout) = env::var("ROBOKIT_WAIT_TIMEOUT") {
            config.wait_timeout_ms = timeout
                .parse()
                .map_err(|_| Error::configuration("Invalid ROBOKIT_WAIT_TIMEOUT"))?;
        }

        if let Ok(interval) = env::var("ROBOKIT_POLL_INTERVAL") {
            config.poll_interval_ms = interval
                .parse()
                .map_err(|_| Error::configuration("Invalid ROBOKIT_POLL_INTERVAL"))?;
        }

        if let Ok(log_level) = env::var("ROBOKIT_LOG_LEVEL") {
            config.log_level = log_level;
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::configuration(format!("Failed to read config file: {}", e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::configuration(format!("Failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Wait settings consumed by the locator dispatcher
    pub fn wait(&self) -> WaitConfig {
        WaitConfig {
            timeout: Duration::from_millis(self.wait_timeout_ms),
            interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}

/// Bounded-poll settings for locator resolution
#[derive(Debug, Clone, Copy)]
pub struct WaitConfig {
    /// Total time to keep polling before giving up
    pub timeout: Duration,

    /// Sleep between poll attempts
    pub interval: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Config::default().wait()
    }
}
