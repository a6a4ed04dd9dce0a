//! placehold.co URL builder
//!
//! ```text
//! {base}/{width}[x{height}][@{retina}][/{bg}/{text}][.{format}][?text={text}][&font={font}]
//! ```

use super::{UrlBuilder, check_dimensions, distinct_height};
use crate::error::{PlaceholderError, Result};
use crate::provider::Provider;
use crate::request::{PlaceholdOptions, ProviderOptions};
use std::fmt::Write as _;
use tracing::trace;

/// Output formats accepted by placehold.co
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Scalable vector output, the provider default
    Svg,
    /// PNG
    Png,
    /// JPEG
    Jpeg,
    /// GIF
    Gif,
    /// WebP
    Webp,
    /// AVIF
    Avif,
}

impl ImageFormat {
    /// Every format, in the order listed in error messages
    pub const ALL: [ImageFormat; 6] = [
        ImageFormat::Svg,
        ImageFormat::Png,
        ImageFormat::Jpeg,
        ImageFormat::Gif,
        ImageFormat::Webp,
        ImageFormat::Avif,
    ];

    /// Extension appended to the URL
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
            ImageFormat::Webp => "webp",
            ImageFormat::Avif => "avif",
        }
    }

    /// Everything except svg is a raster format
    pub fn is_raster(&self) -> bool {
        !matches!(self, ImageFormat::Svg)
    }

    fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == value)
            .ok_or_else(|| {
                PlaceholderError::validation(
                    "format",
                    value,
                    format!("must be one of: {}", Self::ALL.map(|f| f.as_str()).join(", ")),
                )
            })
    }
}

/// Fonts accepted by placehold.co
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    /// Lato, the provider default
    Lato,
    /// Lora
    Lora,
    /// Montserrat
    Montserrat,
    /// Noto Sans
    NotoSans,
    /// Open Sans
    OpenSans,
    /// Oswald
    Oswald,
    /// Playfair Display
    PlayfairDisplay,
    /// Poppins
    Poppins,
    /// PT Sans
    PtSans,
    /// Raleway
    Raleway,
    /// Roboto
    Roboto,
    /// Source Sans Pro
    SourceSansPro,
}

impl Font {
    /// Every font, in the order listed in error messages
    pub const ALL: [Font; 12] = [
        Font::Lato,
        Font::Lora,
        Font::Montserrat,
        Font::NotoSans,
        Font::OpenSans,
        Font::Oswald,
        Font::PlayfairDisplay,
        Font::Poppins,
        Font::PtSans,
        Font::Raleway,
        Font::Roboto,
        Font::SourceSansPro,
    ];

    /// Hyphenated font name as accepted in options
    pub fn as_str(&self) -> &'static str {
        match self {
            Font::Lato => "lato",
            Font::Lora => "lora",
            Font::Montserrat => "montserrat",
            Font::NotoSans => "noto-sans",
            Font::OpenSans => "open-sans",
            Font::Oswald => "oswald",
            Font::PlayfairDisplay => "playfair-display",
            Font::Poppins => "poppins",
            Font::PtSans => "pt-sans",
            Font::Raleway => "raleway",
            Font::Roboto => "roboto",
            Font::SourceSansPro => "source-sans-pro",
        }
    }

    /// Value used in the `font` query parameter
    pub fn query_value(&self) -> String {
        self.as_str().replace('-', "+")
    }

    fn parse(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|font| font.as_str() == value)
            .ok_or_else(|| {
                PlaceholderError::validation(
                    "font",
                    value,
                    format!("must be one of: {}", Self::ALL.map(|f| f.as_str()).join(", ")),
                )
            })
    }
}

/// Pixel-density suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Retina {
    /// `@2x`
    Double,
    /// `@3x`
    Triple,
}

impl Retina {
    /// Suffix written after the size segment
    pub fn as_str(&self) -> &'static str {
        match self {
            Retina::Double => "2x",
            Retina::Triple => "3x",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value {
            "2x" => Ok(Retina::Double),
            "3x" => Ok(Retina::Triple),
            other => Err(PlaceholderError::validation(
                "retina",
                other,
                "must be one of: 2x, 3x",
            )),
        }
    }
}

const DEFAULT_FORMAT: ImageFormat = ImageFormat::Svg;
const DEFAULT_FONT: Font = Font::Lato;

const CSS_COLOR_KEYWORDS: &[&str] = &[
    "aqua", "beige", "black", "blue", "brown", "coral", "crimson", "cyan", "darkblue",
    "darkgray", "darkgreen", "darkred", "fuchsia", "gold", "gray", "green", "grey", "indigo",
    "ivory", "khaki", "lavender", "lightblue", "lightgray", "lightgreen", "lime", "magenta",
    "maroon", "navy", "olive", "orange", "orchid", "pink", "plum", "purple", "red", "salmon",
    "silver", "tan", "teal", "tomato", "turquoise", "violet", "white", "yellow",
];

/// Options after validation, ready to be composed
#[derive(Debug)]
struct Resolved<'a> {
    format: ImageFormat,
    retina: Option<Retina>,
    colors: Option<(&'a str, &'a str)>,
    text: Option<&'a str>,
    font: Font,
}

impl Default for Resolved<'_> {
    fn default() -> Self {
        Self {
            format: DEFAULT_FORMAT,
            retina: None,
            colors: None,
            text: None,
            font: DEFAULT_FONT,
        }
    }
}

/// Builder for placehold.co URLs
#[derive(Debug, Clone)]
pub struct PlaceholdBuilder {
    base_url: String,
}

impl Default for PlaceholdBuilder {
    fn default() -> Self {
        Self::new(Provider::Placehold.base_url())
    }
}

impl PlaceholdBuilder {
    /// Builder targeting a custom origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn placehold_options(options: Option<&ProviderOptions>) -> Result<Option<&PlaceholdOptions>> {
        match options {
            None => Ok(None),
            Some(ProviderOptions::Placehold(options)) => Ok(Some(options)),
            Some(other) => Err(PlaceholderError::validation_message(
                other.field_name(),
                format!(
                    "{} cannot be used with provider '{}'",
                    other.field_name(),
                    Provider::Placehold
                ),
            )),
        }
    }

    fn resolve(options: Option<&PlaceholdOptions>) -> Result<Resolved<'_>> {
        let Some(options) = options else {
            return Ok(Resolved::default());
        };

        let format = options
            .format
            .as_deref()
            .map(ImageFormat::parse)
            .transpose()?
            .unwrap_or(DEFAULT_FORMAT);

        let retina = options.retina.as_deref().map(Retina::parse).transpose()?;
        if let Some(retina) = retina {
            if !format.is_raster() {
                return Err(PlaceholderError::validation(
                    "retina",
                    retina.as_str(),
                    "requires a raster format (png, jpeg, gif, webp, avif)",
                ));
            }
        }

        let colors = match (
            options.background_color.as_deref(),
            options.text_color.as_deref(),
        ) {
            (Some(background), Some(text)) => Some((
                check_color("backgroundColor", background)?,
                check_color("textColor", text)?,
            )),
            (None, None) => None,
            (Some(_), None) => {
                return Err(PlaceholderError::validation_message(
                    "textColor",
                    "textColor is required when backgroundColor is set",
                ));
            }
            (None, Some(_)) => {
                return Err(PlaceholderError::validation_message(
                    "backgroundColor",
                    "backgroundColor is required when textColor is set",
                ));
            }
        };

        let font = options
            .font
            .as_deref()
            .map(Font::parse)
            .transpose()?
            .unwrap_or(DEFAULT_FONT);

        let text = options.custom_text.as_deref().filter(|t| !t.is_empty());

        Ok(Resolved {
            format,
            retina,
            colors,
            text,
            font,
        })
    }

    fn compose(&self, width: u32, height: Option<u32>, resolved: &Resolved<'_>) -> String {
        let mut url = format!("{}/{width}", self.base_url);

        if let Some(height) = distinct_height(width, height) {
            let _ = write!(url, "x{height}");
        }
        if let Some(retina) = resolved.retina {
            let _ = write!(url, "@{}", retina.as_str());
        }
        if let Some((background, text)) = resolved.colors {
            let _ = write!(url, "/{background}/{text}");
        }
        if resolved.format != DEFAULT_FORMAT {
            let _ = write!(url, ".{}", resolved.format.as_str());
        }

        let mut query = Vec::new();
        if let Some(text) = resolved.text {
            query.push(format!("text={}", encode_text(text)));
        }
        if resolved.font != DEFAULT_FONT {
            query.push(format!("font={}", resolved.font.query_value()));
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query.join("&"));
        }

        url
    }
}

impl UrlBuilder for PlaceholdBuilder {
    fn provider(&self) -> Provider {
        Provider::Placehold
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn validate_options(&self, options: Option<&ProviderOptions>) -> Result<()> {
        Self::resolve(Self::placehold_options(options)?).map(|_| ())
    }

    fn build_url(
        &self,
        width: u32,
        height: Option<u32>,
        options: Option<&ProviderOptions>,
    ) -> Result<String> {
        check_dimensions(width, height)?;
        let resolved = Self::resolve(Self::placehold_options(options)?)?;
        let url = self.compose(width, height, &resolved);
        trace!(provider = %Provider::Placehold, url = %url, "Composed URL");
        Ok(url)
    }
}

/// Accepts 3/6-digit hex (optional `#`), a CSS keyword, or `transparent`;
/// returns the path form with any `#` removed
fn check_color<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Ok(hex);
    }

    let keyword = value.to_ascii_lowercase();
    if keyword == "transparent" || CSS_COLOR_KEYWORDS.contains(&keyword.as_str()) {
        return Ok(value);
    }

    Err(PlaceholderError::validation(
        field,
        value,
        "must be a 3 or 6 digit hex code, a CSS color name, or 'transparent'",
    ))
}

/// Spaces become `+` and newlines the literal `\n`; nothing else is escaped
fn encode_text(text: &str) -> String {
    text.replace(' ', "+").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_text() {
        assert_eq!(encode_text("Hello World"), "Hello+World");
        assert_eq!(encode_text("line one\nline two"), "line+one\\nline+two");
        assert_eq!(encode_text("plain"), "plain");
    }

    #[test]
    fn test_check_color_strips_hash() {
        assert_eq!(check_color("backgroundColor", "#fff").unwrap(), "fff");
        assert_eq!(check_color("backgroundColor", "2563eb").unwrap(), "2563eb");
        assert_eq!(check_color("backgroundColor", "Navy").unwrap(), "Navy");
        assert!(check_color("backgroundColor", "#ffff").is_err());
        assert!(check_color("backgroundColor", "notacolor").is_err());
    }

    #[test]
    fn test_font_query_value() {
        assert_eq!(Font::PlayfairDisplay.query_value(), "playfair+display");
        assert_eq!(Font::SourceSansPro.query_value(), "source+sans+pro");
        assert_eq!(Font::Roboto.query_value(), "roboto");
    }
}
