//! Orchestration: validate, pick a builder, compose, package the result

use crate::config::{ConstraintsUpdate, DimensionConstraints};
use crate::error::{PlaceholderError, Result};
use crate::factory::BuilderFactory;
use crate::provider::Provider;
use crate::request::{Dimensions, GenerationResult, PlaceholderRequest, ProviderOptions};
use crate::template;
use crate::validator::Validator;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Placeholder URL generator
///
/// Errors from the validator or a builder are returned unchanged.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderGenerator {
    validator: Validator,
}

impl PlaceholderGenerator {
    /// Generator validating against the given constraints
    pub fn new(constraints: DimensionConstraints) -> Self {
        Self {
            validator: Validator::new(constraints),
        }
    }

    /// The validator applied before composition
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Change the outer constraint set for subsequent calls
    pub fn update_constraints(&mut self, update: ConstraintsUpdate) {
        self.validator.update_constraints(update);
    }

    /// Generate a placeholder URL from a typed request
    ///
    /// # Errors
    ///
    /// Returns the validator's or the builder's error for invalid input
    pub fn generate_placeholder(&self, request: &PlaceholderRequest) -> Result<GenerationResult> {
        debug!(
            provider = %request.provider,
            width = request.width,
            height = ?request.height,
            "Generating placeholder"
        );

        self.validator.validate(request).inspect_err(log_failure)?;
        self.compose(request).inspect_err(log_failure)
    }

    /// Generate a placeholder URL from an untyped parameter bundle
    ///
    /// # Errors
    ///
    /// Same as [`PlaceholderGenerator::generate_placeholder`], plus type
    /// errors for malformed fields
    pub fn generate_from_value(&self, raw: &Value) -> Result<GenerationResult> {
        debug!("Generating placeholder from raw arguments");

        let request = self.validator.validate_value(raw).inspect_err(log_failure)?;
        self.compose(&request).inspect_err(log_failure)
    }

    /// Positional entry point using the simple per-provider templates
    ///
    /// Provider-specific options are not supported here.
    ///
    /// # Errors
    ///
    /// Returns a validation or provider error for bad input, or an internal
    /// error if the template cannot be rendered
    pub fn generate_legacy_url(&self, provider: &str, width: u32, height: u32) -> Result<String> {
        let request = PlaceholderRequest::new(provider, width).with_height(height);
        self.validator.validate(&request).inspect_err(log_failure)?;

        let provider = BuilderFactory::lookup(provider)?;
        let variables = BTreeMap::from([
            ("baseUrl", provider.base_url().to_string()),
            ("width", width.to_string()),
            ("height", height.to_string()),
        ]);

        template::render(provider.legacy_template(), &variables).inspect_err(log_failure)
    }

    fn compose(&self, request: &PlaceholderRequest) -> Result<GenerationResult> {
        let builder = BuilderFactory::create_builder(&request.provider)?;
        let provider = builder.provider();

        let options = match provider {
            Provider::Placehold => request
                .placehold_options
                .clone()
                .map(ProviderOptions::Placehold),
            Provider::LoremPicsum => request.picsum_options.clone().map(ProviderOptions::Picsum),
        };

        let url = builder.build_url(request.width, request.height, options.as_ref())?;
        let dimensions = Dimensions {
            width: request.width,
            height: request.height.unwrap_or(request.width),
        };

        info!(
            provider = %provider,
            width = dimensions.width,
            height = dimensions.height,
            url = %url,
            applied_options = ?options,
            "Generated placeholder URL"
        );

        Ok(GenerationResult {
            url,
            provider,
            dimensions,
            applied_options: options,
        })
    }
}

fn log_failure(error: &PlaceholderError) {
    warn!(
        error_kind = %error.kind(),
        field = ?error.field(),
        error = %error,
        "Placeholder generation failed"
    );
}
