//! The `image_placeholder` tool: arguments, schema and invocation

use crate::error::ServerError;
use image_placeholder_core::PlaceholderGenerator;
use rmcp::model::{CallToolResult, Content, JsonObject};
use schemars::{JsonSchema, Schema, SchemaGenerator};
use serde::Deserialize;
use serde_json::{Value, json};
use std::borrow::Cow;
use tracing::info;

/// Name the tool is registered under
pub const TOOL_NAME: &str = "image_placeholder";

/// Raw tool arguments
///
/// Arguments are passed through untouched so the validator sees exactly what
/// the client sent and reports field-level errors itself.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct ToolArguments(pub JsonObject);

impl JsonSchema for ToolArguments {
    fn schema_name() -> Cow<'static, str> {
        "ImagePlaceholderArguments".into()
    }

    fn json_schema(_generator: &mut SchemaGenerator) -> Schema {
        Schema::from(input_schema())
    }
}

/// Published input schema
///
/// `height` is listed as required for client compatibility even though an
/// omitted height is accepted and defaults to the width.
pub fn input_schema() -> JsonObject {
    let schema = json!({
        "type": "object",
        "properties": {
            "provider": {
                "type": "string",
                "enum": ["placehold", "lorem-picsum"],
                "description": "Placeholder image provider"
            },
            "width": {
                "type": "number",
                "description": "Image width in pixels"
            },
            "height": {
                "type": "number",
                "description": "Image height in pixels"
            },
            "placeholdOptions": {
                "type": "object",
                "description": "Options for the placehold provider",
                "properties": {
                    "format": {
                        "type": "string",
                        "enum": ["svg", "png", "jpeg", "gif", "webp", "avif"]
                    },
                    "backgroundColor": {
                        "type": "string",
                        "description": "Hex code or CSS color name; requires textColor"
                    },
                    "textColor": {
                        "type": "string",
                        "description": "Hex code or CSS color name; requires backgroundColor"
                    },
                    "customText": { "type": "string" },
                    "font": {
                        "type": "string",
                        "enum": [
                            "lato", "lora", "montserrat", "noto-sans", "open-sans", "oswald",
                            "playfair-display", "poppins", "pt-sans", "raleway", "roboto",
                            "source-sans-pro"
                        ]
                    },
                    "retina": {
                        "type": "string",
                        "enum": ["2x", "3x"],
                        "description": "Only valid with a raster format"
                    }
                }
            },
            "picsumOptions": {
                "type": "object",
                "description": "Options for the lorem-picsum provider",
                "properties": {
                    "format": { "type": "string", "enum": ["jpg", "webp"] },
                    "imageId": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Specific image; excludes seed"
                    },
                    "seed": {
                        "type": "string",
                        "description": "Stable random image; excludes imageId"
                    },
                    "grayscale": { "type": "boolean" },
                    "blur": { "type": "integer", "minimum": 1, "maximum": 10 },
                    "random": {
                        "type": "integer",
                        "minimum": 0,
                        "description": "Cache-busting token"
                    }
                }
            }
        },
        "required": ["provider", "width", "height"]
    });

    match schema {
        Value::Object(object) => object,
        _ => JsonObject::new(),
    }
}

/// Run the tool against the generator
///
/// # Errors
///
/// Returns the generator's validation or provider error
pub fn invoke(
    generator: &PlaceholderGenerator,
    arguments: ToolArguments,
) -> Result<CallToolResult, ServerError> {
    let raw = Value::Object(arguments.0);
    let result = generator.generate_from_value(&raw)?;

    info!(
        tool = TOOL_NAME,
        provider = %result.provider,
        url = %result.url,
        "Tool call completed"
    );

    Ok(CallToolResult::success(vec![Content::text(result.url)]))
}
