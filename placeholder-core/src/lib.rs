//! Validation and URL composition for placeholder-image providers
//!
//! This crate turns a provider name, a size and a handful of cosmetic options
//! into a URL on a third-party placeholder service. Nothing is fetched or
//! rendered; the work is input validation plus string composition.
//!
//! # Quick Start
//!
//! ```rust
//! use image_placeholder_core::{PlaceholderGenerator, PlaceholderRequest};
//!
//! let generator = PlaceholderGenerator::default();
//! let request = PlaceholderRequest::new("placehold", 300).with_height(200);
//!
//! let result = generator.generate_placeholder(&request).unwrap();
//! assert_eq!(result.url, "https://placehold.co/300x200");
//! assert_eq!(result.dimensions.height, 200);
//! ```
//!
//! Two independent range checks apply: the [`Validator`] enforces the
//! configurable [`DimensionConstraints`], and every builder enforces its own
//! fixed bounds ([`builders::BUILDER_MIN_DIMENSION`] to
//! [`builders::BUILDER_MAX_DIMENSION`]).

pub mod builders;
pub mod config;
pub mod error;
pub mod factory;
pub mod generator;
pub mod provider;
pub mod request;
pub mod template;
pub mod validator;

#[cfg(test)]
mod config_tests;
#[cfg(test)]
mod generator_tests;

pub use builders::{PicsumBuilder, PlaceholdBuilder, UrlBuilder};
pub use config::{ConstraintsUpdate, DimensionConstraints};
pub use error::{ErrorContext, ErrorKind, PlaceholderError, Result};
pub use factory::BuilderFactory;
pub use generator::PlaceholderGenerator;
pub use provider::Provider;
pub use request::{
    Dimensions, GenerationResult, PicsumOptions, PlaceholdOptions, PlaceholderRequest,
    ProviderOptions,
};
pub use validator::Validator;
