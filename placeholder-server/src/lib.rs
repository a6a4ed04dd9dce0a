//! MCP server for the `image_placeholder` tool
//!
//! Wraps [`image_placeholder_core::PlaceholderGenerator`] in an rmcp
//! [`ServerHandler`](rmcp::ServerHandler) served over stdio. Each tool call
//! returns the composed URL as a single text content item; invalid arguments
//! come back as `invalid_params` with the structured error in `data`.

pub mod config;
pub mod error;
pub mod logging;
pub mod server;
pub mod tool;


pub use config::{Cli, ServerConfig};
pub use error::ServerError;
pub use logging::{LogFormat, LoggingConfig};
pub use server::{PlaceholderServer, run_server};
pub use tool::{TOOL_NAME, ToolArguments};
