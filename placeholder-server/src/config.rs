//! Command-line and environment configuration

use crate::error::ServerError;
use crate::logging::{LogFormat, LoggingConfig};
use clap::Parser;
use image_placeholder_core::DimensionConstraints;

/// Command-line arguments; every flag falls back to an environment variable
#[derive(Debug, Clone, Parser)]
#[command(
    name = "image-placeholder-mcp",
    version,
    about = "MCP server that composes placeholder-image URLs"
)]
pub struct Cli {
    /// Log level or filter directive
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Log output format
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Logging settings selected on the command line
    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            format: self.log_format,
        }
    }
}

/// Resolved server configuration
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    /// Bounds and providers the validator enforces
    pub constraints: DimensionConstraints,
    /// Subscriber settings
    pub logging: LoggingConfig,
}

impl ServerConfig {
    /// Combine CLI flags with the dimension overrides from the environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a dimension override is invalid
    pub fn from_cli(cli: &Cli) -> Result<Self, ServerError> {
        Self::from_parts(cli, DimensionConstraints::from_env()?)
    }

    /// Same as [`ServerConfig::from_cli`] with explicitly loaded constraints
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the constraints are inconsistent
    pub fn from_parts(cli: &Cli, constraints: DimensionConstraints) -> Result<Self, ServerError> {
        constraints.check()?;
        Ok(Self {
            constraints,
            logging: cli.logging(),
        })
    }
}
