//! Per-provider URL builders
//!
//! Each builder owns one provider's URL grammar and the validation of that
//! provider's option object. Builders are pure: the same inputs always
//! compose the same URL and nothing is fetched.
//!
//! Builders re-check dimensions against their own bounds
//! ([`BUILDER_MIN_DIMENSION`]..=[`BUILDER_MAX_DIMENSION`]), independent of
//! the outer [`Validator`](crate::Validator) constraint set.

mod picsum;
mod placehold;

pub use picsum::{PicsumBuilder, PicsumFormat};
pub use placehold::{Font, ImageFormat, PlaceholdBuilder, Retina};

use crate::error::Result;
use crate::provider::Provider;
use crate::request::ProviderOptions;
use crate::validator::check_range;
use std::fmt;

/// Smallest dimension any builder accepts
pub const BUILDER_MIN_DIMENSION: u32 = 10;
/// Largest dimension any builder accepts
pub const BUILDER_MAX_DIMENSION: u32 = 4000;

/// Capability shared by every provider builder
pub trait UrlBuilder: fmt::Debug + Send + Sync {
    /// Provider this builder composes URLs for
    fn provider(&self) -> Provider;

    /// Origin every composed URL starts with
    fn base_url(&self) -> &str;

    /// Check a provider option object without composing a URL
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending option field, or if
    /// the options belong to a different provider
    fn validate_options(&self, options: Option<&ProviderOptions>) -> Result<()>;

    /// Compose the URL for the given size and options
    ///
    /// # Errors
    ///
    /// Returns a validation error if a dimension is outside the builder
    /// bounds or the options are invalid
    fn build_url(
        &self,
        width: u32,
        height: Option<u32>,
        options: Option<&ProviderOptions>,
    ) -> Result<String>;
}

/// Builder-local bound check for width and optional height
pub(crate) fn check_dimensions(width: u32, height: Option<u32>) -> Result<()> {
    check_range(
        "width",
        i64::from(width),
        BUILDER_MIN_DIMENSION,
        BUILDER_MAX_DIMENSION,
    )?;
    if let Some(height) = height {
        check_range(
            "height",
            i64::from(height),
            BUILDER_MIN_DIMENSION,
            BUILDER_MAX_DIMENSION,
        )?;
    }
    Ok(())
}

/// Height is only spelled out when it differs from the width
pub(crate) fn distinct_height(width: u32, height: Option<u32>) -> Option<u32> {
    height.filter(|h| *h != width)
}
