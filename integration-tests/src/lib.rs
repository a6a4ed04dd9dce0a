//! Integration tests for the image placeholder MCP server
//!
//! These drive the server the way a client would: through tool arguments
//! built from JSON, and through newline-delimited JSON-RPC over an in-memory
//! pipe.

#![allow(clippy::uninlined_format_args)]

pub mod end_to_end_scenarios;
pub mod protocol_integration;

/// Common test utilities for integration tests
pub mod test_utils {
    use image_placeholder_server::{PlaceholderServer, ToolArguments};
    use rmcp::model::CallToolResult;
    use serde_json::Value;

    /// Build tool arguments from a JSON object literal
    pub fn tool_arguments(value: Value) -> ToolArguments {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Call the tool and return the URL text, or the error message
    pub fn call_url(server: &PlaceholderServer, value: Value) -> Result<String, String> {
        server
            .call(tool_arguments(value))
            .map_err(|e| e.to_string())
            .and_then(|result| first_text(&result).ok_or_else(|| "no text content".to_string()))
    }

    /// Text of the first content item of a tool result
    pub fn first_text(result: &CallToolResult) -> Option<String> {
        result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|text| text.text.clone())
    }
}
