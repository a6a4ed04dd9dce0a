//! picsum.photos URL builder
//!
//! ```text
//! {base}[/id/{imageId}|/seed/{seed}]/{width}[/{height}][.{format}][?{effects}]
//! ```

use super::{UrlBuilder, check_dimensions, distinct_height};
use crate::error::{PlaceholderError, Result};
use crate::provider::Provider;
use crate::request::{PicsumOptions, ProviderOptions};
use std::fmt::Write as _;
use tracing::trace;

const MIN_BLUR: i64 = 1;
const MAX_BLUR: i64 = 10;

/// Output formats accepted by picsum.photos
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PicsumFormat {
    /// JPEG
    Jpg,
    /// WebP
    Webp,
}

impl PicsumFormat {
    /// Extension appended to the URL
    pub fn as_str(&self) -> &'static str {
        match self {
            PicsumFormat::Jpg => "jpg",
            PicsumFormat::Webp => "webp",
        }
    }

    fn parse(value: &str) -> Result<Self> {
        match value {
            "jpg" => Ok(PicsumFormat::Jpg),
            "webp" => Ok(PicsumFormat::Webp),
            other => Err(PlaceholderError::validation(
                "format",
                other,
                "must be one of: jpg, webp",
            )),
        }
    }
}

/// Which image the URL selects, if any
#[derive(Debug)]
enum Selector<'a> {
    Id(i64),
    Seed(&'a str),
}

#[derive(Debug, Default)]
struct Resolved<'a> {
    selector: Option<Selector<'a>>,
    format: Option<PicsumFormat>,
    grayscale: bool,
    blur: Option<i64>,
    random: Option<i64>,
}

/// Builder for picsum.photos URLs
#[derive(Debug, Clone)]
pub struct PicsumBuilder {
    base_url: String,
}

impl Default for PicsumBuilder {
    fn default() -> Self {
        Self::new(Provider::LoremPicsum.base_url())
    }
}

impl PicsumBuilder {
    /// Builder targeting a custom origin
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn picsum_options(options: Option<&ProviderOptions>) -> Result<Option<&PicsumOptions>> {
        match options {
            None => Ok(None),
            Some(ProviderOptions::Picsum(options)) => Ok(Some(options)),
            Some(other) => Err(PlaceholderError::validation_message(
                other.field_name(),
                format!(
                    "{} cannot be used with provider '{}'",
                    other.field_name(),
                    Provider::LoremPicsum
                ),
            )),
        }
    }

    fn resolve(options: Option<&PicsumOptions>) -> Result<Resolved<'_>> {
        let Some(options) = options else {
            return Ok(Resolved::default());
        };

        let selector = match (options.image_id, options.seed.as_deref()) {
            (Some(_), Some(_)) => {
                return Err(PlaceholderError::validation_message(
                    "imageId",
                    "imageId and seed are mutually exclusive",
                ));
            }
            (Some(id), None) if id < 0 => {
                return Err(PlaceholderError::validation(
                    "imageId",
                    id,
                    "must be a non-negative integer",
                ));
            }
            (Some(id), None) => Some(Selector::Id(id)),
            (None, Some(seed)) if seed.trim().is_empty() => {
                return Err(PlaceholderError::validation(
                    "seed",
                    seed,
                    "must be a non-empty string",
                ));
            }
            (None, Some(seed)) => Some(Selector::Seed(seed)),
            (None, None) => None,
        };

        let format = options
            .format
            .as_deref()
            .map(PicsumFormat::parse)
            .transpose()?;

        if let Some(blur) = options.blur {
            if !(MIN_BLUR..=MAX_BLUR).contains(&blur) {
                return Err(PlaceholderError::validation(
                    "blur",
                    blur,
                    format!("must be between {MIN_BLUR} and {MAX_BLUR}"),
                ));
            }
        }

        if let Some(random) = options.random {
            if random < 0 {
                return Err(PlaceholderError::validation(
                    "random",
                    random,
                    "must be a non-negative integer",
                ));
            }
        }

        Ok(Resolved {
            selector,
            format,
            grayscale: options.grayscale.unwrap_or(false),
            blur: options.blur,
            random: options.random,
        })
    }

    fn compose(&self, width: u32, height: Option<u32>, resolved: &Resolved<'_>) -> String {
        let mut url = self.base_url.clone();

        match resolved.selector {
            Some(Selector::Id(id)) => {
                let _ = write!(url, "/id/{id}");
            }
            Some(Selector::Seed(seed)) => {
                let _ = write!(url, "/seed/{}", urlencoding::encode(seed));
            }
            None => {}
        }

        let _ = write!(url, "/{width}");
        if let Some(height) = distinct_height(width, height) {
            let _ = write!(url, "/{height}");
        }
        if let Some(format) = resolved.format {
            let _ = write!(url, ".{}", format.as_str());
        }

        let mut effects = Vec::new();
        if resolved.grayscale {
            effects.push("grayscale".to_string());
        }
        if let Some(blur) = resolved.blur {
            effects.push(blur_effect(blur));
        }
        if let Some(random) = resolved.random {
            effects.push(format!("random={random}"));
        }
        if !effects.is_empty() {
            url.push('?');
            url.push_str(&effects.join("&"));
        }

        url
    }
}

impl UrlBuilder for PicsumBuilder {
    fn provider(&self) -> Provider {
        Provider::LoremPicsum
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn validate_options(&self, options: Option<&ProviderOptions>) -> Result<()> {
        Self::resolve(Self::picsum_options(options)?).map(|_| ())
    }

    fn build_url(
        &self,
        width: u32,
        height: Option<u32>,
        options: Option<&ProviderOptions>,
    ) -> Result<String> {
        check_dimensions(width, height)?;
        let resolved = Self::resolve(Self::picsum_options(options)?)?;
        let url = self.compose(width, height, &resolved);
        trace!(provider = %Provider::LoremPicsum, url = %url, "Composed URL");
        Ok(url)
    }
}

/// The minimum blur is sent as a bare flag, anything stronger carries its value
fn blur_effect(blur: i64) -> String {
    match blur {
        MIN_BLUR => "blur".to_string(),
        n => format!("blur={n}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blur_effect_encoding() {
        assert_eq!(blur_effect(1), "blur");
        assert_eq!(blur_effect(2), "blur=2");
        assert_eq!(blur_effect(10), "blur=10");
    }
}
