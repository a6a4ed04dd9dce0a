//! Provider name to builder lookup

use crate::builders::{PicsumBuilder, PlaceholdBuilder, UrlBuilder};
use crate::error::{PlaceholderError, Result};
use crate::provider::Provider;

/// The providers a builder exists for. This table, not the validator's
/// allow-list, decides which providers can actually produce URLs.
const REGISTERED_PROVIDERS: [Provider; 2] = [Provider::Placehold, Provider::LoremPicsum];

/// Creates builders from the fixed provider table
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderFactory;

impl BuilderFactory {
    /// Build the URL builder for a provider name
    ///
    /// # Errors
    ///
    /// Returns a provider-unsupported error if the name is not registered
    pub fn create_builder(provider: &str) -> Result<Box<dyn UrlBuilder>> {
        let provider = Self::lookup(provider)?;
        let base_url = provider.base_url();

        Ok(match provider {
            Provider::Placehold => Box::new(PlaceholdBuilder::new(base_url)),
            Provider::LoremPicsum => Box::new(PicsumBuilder::new(base_url)),
        })
    }

    /// Names of every registered provider
    pub fn supported_providers() -> Vec<&'static str> {
        REGISTERED_PROVIDERS.iter().map(Provider::as_str).collect()
    }

    /// Base origin for a provider name
    ///
    /// # Errors
    ///
    /// Returns a provider-unsupported error if the name is not registered
    pub fn provider_base_url(provider: &str) -> Result<&'static str> {
        Self::lookup(provider).map(|p| p.base_url())
    }

    /// Resolve a provider name against the table
    ///
    /// # Errors
    ///
    /// Returns a provider-unsupported error if the name is not registered
    pub fn lookup(provider: &str) -> Result<Provider> {
        REGISTERED_PROVIDERS
            .into_iter()
            .find(|p| p.as_str() == provider)
            .ok_or_else(|| PlaceholderError::provider_unsupported(provider, Self::supported_providers()))
    }
}
