//! Logging configuration and subscriber setup
//!
//! Logs always go to stderr: stdout carries the MCP stdio stream.

use crate::error::ServerError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Default human-readable lines
    Text,
    /// One JSON object per record
    Json,
    /// Multi-line output for local debugging
    Pretty,
    /// Condensed single lines
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level or `EnvFilter` directive
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
        }
    }
}

impl LoggingConfig {
    /// Install the global tracing subscriber
    ///
    /// `RUST_LOG` takes precedence over the configured level.
    ///
    /// # Errors
    ///
    /// Returns an error if the level is not a valid filter directive or a
    /// global subscriber is already installed
    pub fn initialize(&self) -> Result<(), ServerError> {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        let level = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        let filter = EnvFilter::try_new(&level)
            .map_err(|e| ServerError::logging(format!("Invalid log level '{level}': {e}")))?;

        let registry = tracing_subscriber::registry().with(filter);
        let result = match self.format {
            LogFormat::Text => registry
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .try_init(),
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .try_init(),
        };

        result.map_err(|e| ServerError::logging(e.to_string()))
    }
}
