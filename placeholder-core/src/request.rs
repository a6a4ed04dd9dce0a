//! Request, option and result value types

use crate::provider::Provider;
use serde::{Deserialize, Serialize};

/// Options understood by the placehold provider
///
/// Values are kept as received; the placehold builder owns their validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholdOptions {
    /// Output format such as `png` or `svg`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Background color; requires `text_color`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Text color; requires `background_color`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Text drawn instead of the size label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
    /// Font for the text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
    /// Pixel-density suffix, `2x` or `3x`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retina: Option<String>,
}

/// Options understood by the lorem-picsum provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PicsumOptions {
    /// Output format, `jpg` or `webp`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Specific image; excludes `seed`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<i64>,
    /// Seed for a stable random image; excludes `image_id`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<String>,
    /// Render in grayscale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grayscale: Option<bool>,
    /// Blur strength from 1 to 10
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur: Option<i64>,
    /// Cache-busting token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random: Option<i64>,
}

/// Provider-specific option bundle handed to a builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProviderOptions {
    /// Options for placehold.co
    Placehold(PlaceholdOptions),
    /// Options for picsum.photos
    Picsum(PicsumOptions),
}

impl ProviderOptions {
    /// Wire name of the request field carrying these options
    pub fn field_name(&self) -> &'static str {
        match self {
            ProviderOptions::Placehold(_) => "placeholdOptions",
            ProviderOptions::Picsum(_) => "picsumOptions",
        }
    }
}

/// A single placeholder request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceholderRequest {
    /// Provider wire name
    pub provider: String,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels; defaults to the width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Options for the placehold provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placehold_options: Option<PlaceholdOptions>,
    /// Options for the lorem-picsum provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picsum_options: Option<PicsumOptions>,
}

impl PlaceholderRequest {
    /// Square request with no options
    pub fn new(provider: impl Into<String>, width: u32) -> Self {
        Self {
            provider: provider.into(),
            width,
            height: None,
            placehold_options: None,
            picsum_options: None,
        }
    }

    /// Set an explicit height
    pub fn with_height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Attach placehold options
    pub fn with_placehold_options(mut self, options: PlaceholdOptions) -> Self {
        self.placehold_options = Some(options);
        self
    }

    /// Attach lorem-picsum options
    pub fn with_picsum_options(mut self, options: PicsumOptions) -> Self {
        self.picsum_options = Some(options);
        self
    }
}

/// Resolved output dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    /// Composed URL
    pub url: String,
    /// Provider the URL points at
    pub provider: Provider,
    /// Requested size with the height defaulted
    pub dimensions: Dimensions,
    /// Options used to compose the URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_options: Option<ProviderOptions>,
}
