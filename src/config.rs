//! Environment configuration
//!
//! Every setting has a default, so an empty environment yields a working
//! development server. A `.env` file in the working directory is read first.

use envconfig::Envconfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Error, Result};

/// Log levels accepted by `LOG_LEVEL`
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct Config {
    #[serde(flatten)]
    #[envconfig(nested)]
    pub server: ServerConfig,

    #[serde(flatten)]
    #[envconfig(nested)]
    pub limits: LimitsConfig,
}

/// Listener and logging settings
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct ServerConfig {
    #[envconfig(from = "HOST", default = "0.0.0.0")]
    pub host: String,

    #[envconfig(from = "PORT", default = "8080")]
    pub port: u16,

    /// One of `LOG_LEVELS`, any case
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    /// `production` switches logs to JSON
    #[envconfig(from = "ENVIRONMENT", default = "development")]
    pub environment: String,

    #[envconfig(from = "REQUEST_TIMEOUT_SECS", default = "30")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Limits applied to submitted batches
#[derive(Debug, Clone, Deserialize, Serialize, Envconfig)]
pub struct LimitsConfig {
    /// Largest accepted request body, in bytes
    #[envconfig(from = "MAX_BODY_BYTES", default = "1048576")]
    pub max_body_bytes: usize,

    /// Largest accepted batch, in items (0 disables the check)
    #[envconfig(from = "MAX_EVENTS", default = "10000")]
    pub max_events: usize,
}

impl LimitsConfig {
    /// Check a batch length against `max_events`
    pub fn check_batch_len(&self, len: usize) -> Result<()> {
        if self.max_events != 0 && len > self.max_events {
            return Err(Error::BatchTooLarge {
                len,
                max: self.max_events,
            });
        }
        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024,
            max_events: 10_000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        Config::init_from_env().map_err(Error::from)
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::config("Server port cannot be 0"));
        }

        if !LOG_LEVELS.contains(&self.server.log_level.to_lowercase().as_str()) {
            return Err(Error::config(format!(
                "Unknown log level '{}', expected one of: {}",
                self.server.log_level,
                LOG_LEVELS.join(", ")
            )));
        }

        if self.limits.max_body_bytes == 0 {
            return Err(Error::config("Max body bytes must be at least 1"));
        }

        Ok(())
    }

    /// Emit the effective settings once logging is up
    pub fn log_config(&self) {
        tracing::info!(
            address = %self.server.address(),
            environment = %self.server.environment,
            log_level = %self.server.log_level,
            request_timeout_secs = self.server.request_timeout_secs,
            max_body_bytes = self.limits.max_body_bytes,
            max_events = self.limits.max_events,
            "Configuration loaded"
        );
    }
}
