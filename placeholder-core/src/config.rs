//! Dimension constraints and their environment overrides

use crate::error::{PlaceholderError, Result};
use crate::provider::Provider;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::env;

/// Environment variable overriding the minimum width
pub const ENV_MIN_WIDTH: &str = "PLACEHOLDER_MIN_WIDTH";
/// Environment variable overriding the maximum width
pub const ENV_MAX_WIDTH: &str = "PLACEHOLDER_MAX_WIDTH";
/// Environment variable overriding the minimum height
pub const ENV_MIN_HEIGHT: &str = "PLACEHOLDER_MIN_HEIGHT";
/// Environment variable overriding the maximum height
pub const ENV_MAX_HEIGHT: &str = "PLACEHOLDER_MAX_HEIGHT";

/// Default lower bound for width and height
pub const DEFAULT_MIN_DIMENSION: u32 = 1;
/// Default upper bound for width and height
pub const DEFAULT_MAX_DIMENSION: u32 = 10_000;

/// Numeric bounds and provider allow-list used by the outer validator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionConstraints {
    /// Smallest accepted width
    pub min_width: u32,
    /// Largest accepted width
    pub max_width: u32,
    /// Smallest accepted height
    pub min_height: u32,
    /// Largest accepted height
    pub max_height: u32,
    /// Provider names requests may use
    pub supported_providers: BTreeSet<String>,
}

impl Default for DimensionConstraints {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_DIMENSION,
            max_width: DEFAULT_MAX_DIMENSION,
            min_height: DEFAULT_MIN_DIMENSION,
            max_height: DEFAULT_MAX_DIMENSION,
            supported_providers: Provider::ALL
                .iter()
                .map(|p| p.as_str().to_string())
                .collect(),
        }
    }
}

impl DimensionConstraints {
    /// Defaults merged with the process environment
    ///
    /// # Errors
    ///
    /// Returns a configuration error if an override is not an unsigned
    /// integer or the merged bounds are inconsistent
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Defaults merged with values from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`DimensionConstraints::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut constraints = Self::default();

        if let Some(value) = parse_bound(&lookup, ENV_MIN_WIDTH)? {
            constraints.min_width = value;
        }
        if let Some(value) = parse_bound(&lookup, ENV_MAX_WIDTH)? {
            constraints.max_width = value;
        }
        if let Some(value) = parse_bound(&lookup, ENV_MIN_HEIGHT)? {
            constraints.min_height = value;
        }
        if let Some(value) = parse_bound(&lookup, ENV_MAX_HEIGHT)? {
            constraints.max_height = value;
        }

        constraints.check()?;
        Ok(constraints)
    }

    /// Verify min <= max per axis and a non-empty provider set
    ///
    /// # Errors
    ///
    /// Returns a configuration error describing the first broken invariant
    pub fn check(&self) -> Result<()> {
        if self.min_width > self.max_width {
            return Err(PlaceholderError::configuration(
                ENV_MIN_WIDTH,
                format!(
                    "minWidth ({}) must not exceed maxWidth ({})",
                    self.min_width, self.max_width
                ),
            ));
        }
        if self.min_height > self.max_height {
            return Err(PlaceholderError::configuration(
                ENV_MIN_HEIGHT,
                format!(
                    "minHeight ({}) must not exceed maxHeight ({})",
                    self.min_height, self.max_height
                ),
            ));
        }
        if self.supported_providers.is_empty() {
            return Err(PlaceholderError::configuration(
                "supportedProviders",
                "at least one provider must be supported",
            ));
        }
        Ok(())
    }

    /// Merge a partial override in place
    pub fn apply(&mut self, update: ConstraintsUpdate) {
        if let Some(value) = update.min_width {
            self.min_width = value;
        }
        if let Some(value) = update.max_width {
            self.max_width = value;
        }
        if let Some(value) = update.min_height {
            self.min_height = value;
        }
        if let Some(value) = update.max_height {
            self.max_height = value;
        }
        if let Some(providers) = update.supported_providers {
            self.supported_providers = providers;
        }
    }

    /// Whether the provider name is in the allow-list
    pub fn supports(&self, provider: &str) -> bool {
        self.supported_providers.contains(provider)
    }
}

/// Partial override of [`DimensionConstraints`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintsUpdate {
    /// New smallest width
    pub min_width: Option<u32>,
    /// New largest width
    pub max_width: Option<u32>,
    /// New smallest height
    pub min_height: Option<u32>,
    /// New largest height
    pub max_height: Option<u32>,
    /// Replacement provider allow-list
    pub supported_providers: Option<BTreeSet<String>>,
}

fn parse_bound<F>(lookup: &F, key: &str) -> Result<Option<u32>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: u32 = trimmed.parse().map_err(|e| {
        PlaceholderError::configuration(key, format!("Invalid value for {key}: '{raw}' ({e})"))
    })?;

    if value == 0 {
        return Err(PlaceholderError::configuration(
            key,
            format!("Invalid value for {key}: bounds must be at least 1"),
        ));
    }

    Ok(Some(value))
}
