//! Outer-layer request validation against the constraint set

use crate::config::{ConstraintsUpdate, DimensionConstraints};
use crate::error::{PlaceholderError, Result};
use crate::request::{PicsumOptions, PlaceholdOptions, PlaceholderRequest};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

const PLACEHOLD_OPTIONS_FIELD: &str = "placeholdOptions";
const PICSUM_OPTIONS_FIELD: &str = "picsumOptions";
const PLACEHOLD_PROVIDER: &str = "placehold";
const PICSUM_PROVIDER: &str = "lorem-picsum";
const PICSUM_INTEGER_FIELDS: [&str; 3] = ["imageId", "blur", "random"];

/// Request validator
///
/// Rules run in a fixed order and the first violation wins:
/// request shape, provider, width, height, then option/provider pairing.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    constraints: DimensionConstraints,
}

impl Validator {
    /// Validator over the given constraint set
    pub fn new(constraints: DimensionConstraints) -> Self {
        Self { constraints }
    }

    /// A copy of the active constraint set
    pub fn constraints(&self) -> DimensionConstraints {
        self.constraints.clone()
    }

    /// Merge a partial override into the active constraint set
    ///
    /// The merged values are not checked here; the next validation enforces
    /// whatever bounds result.
    pub fn update_constraints(&mut self, update: ConstraintsUpdate) {
        debug!(update = ?update, "Updating dimension constraints");
        self.constraints.apply(update);
    }

    /// Validate a typed request
    ///
    /// # Errors
    ///
    /// Returns a validation error for bad fields, or a provider-unsupported
    /// error when the provider is not in the supported set
    pub fn validate(&self, request: &PlaceholderRequest) -> Result<()> {
        self.check_provider(&request.provider)?;
        self.check_width(i64::from(request.width))?;
        if let Some(height) = request.height {
            self.check_height(i64::from(height))?;
        }
        check_option_pairing(
            &request.provider,
            request.placehold_options.is_some(),
            request.picsum_options.is_some(),
        )
    }

    /// Validate an untyped parameter bundle and lift it into a request
    ///
    /// # Errors
    ///
    /// Same as [`Validator::validate`], plus type errors for fields that are
    /// not of the expected JSON type
    pub fn validate_value(&self, raw: &Value) -> Result<PlaceholderRequest> {
        let object = raw.as_object().ok_or_else(|| {
            PlaceholderError::validation("request", raw.clone(), "must be an object")
        })?;

        let provider = match object.get("provider") {
            Some(Value::String(provider)) => provider.as_str(),
            other => {
                return Err(PlaceholderError::validation(
                    "provider",
                    other.cloned().unwrap_or(Value::Null),
                    "must be a non-empty string",
                ));
            }
        };
        self.check_provider(provider)?;

        let width = match present(object, "width") {
            Some(value) => dimension_value(
                "width",
                value,
                self.constraints.min_width,
                self.constraints.max_width,
            )?,
            None => {
                return Err(PlaceholderError::validation(
                    "width",
                    Value::Null,
                    "is required",
                ));
            }
        };

        let height = match present(object, "height") {
            Some(value) => Some(dimension_value(
                "height",
                value,
                self.constraints.min_height,
                self.constraints.max_height,
            )?),
            None => None,
        };

        let placehold_raw = present(object, PLACEHOLD_OPTIONS_FIELD);
        let picsum_raw = present(object, PICSUM_OPTIONS_FIELD);
        check_option_pairing(provider, placehold_raw.is_some(), picsum_raw.is_some())?;

        let placehold_options = placehold_raw
            .map(|value| parse_options::<PlaceholdOptions>(PLACEHOLD_OPTIONS_FIELD, value))
            .transpose()?;
        let picsum_options = picsum_raw
            .map(|value| {
                let value = normalize_integers(value, &PICSUM_INTEGER_FIELDS)?;
                parse_options::<PicsumOptions>(PICSUM_OPTIONS_FIELD, &value)
            })
            .transpose()?;

        Ok(PlaceholderRequest {
            provider: provider.to_string(),
            width,
            height,
            placehold_options,
            picsum_options,
        })
    }

    fn check_provider(&self, provider: &str) -> Result<()> {
        if provider.trim().is_empty() {
            return Err(PlaceholderError::validation(
                "provider",
                provider,
                "must be a non-empty string",
            ));
        }

        if !self.constraints.supports(provider) {
            return Err(PlaceholderError::provider_unsupported(
                provider,
                self.constraints.supported_providers.iter().cloned(),
            ));
        }

        Ok(())
    }

    fn check_width(&self, width: i64) -> Result<u32> {
        check_range(
            "width",
            width,
            self.constraints.min_width,
            self.constraints.max_width,
        )
    }

    fn check_height(&self, height: i64) -> Result<u32> {
        check_range(
            "height",
            height,
            self.constraints.min_height,
            self.constraints.max_height,
        )
    }
}

/// Inclusive range check shared by the validator and the builders
pub(crate) fn check_range(field: &str, value: i64, min: u32, max: u32) -> Result<u32> {
    if value < i64::from(min) || value > i64::from(max) {
        return Err(PlaceholderError::validation(
            field,
            value,
            range_constraint(min, max),
        ));
    }

    u32::try_from(value).map_err(|e| PlaceholderError::internal_from(&e))
}

fn range_constraint(min: u32, max: u32) -> String {
    format!("must be between {min} and {max}")
}

/// Range-checked dimension from a raw JSON number
///
/// Values above the bound are rejected before any narrowing, so the error
/// reports the number exactly as sent.
fn dimension_value(field: &str, value: &Value, min: u32, max: u32) -> Result<u32> {
    let above_max = match value {
        Value::Number(number) => match (number.as_u64(), number.as_f64()) {
            (Some(v), _) => v > u64::from(max),
            (None, Some(v)) => v.fract() == 0.0 && v > f64::from(max),
            (None, None) => false,
        },
        _ => false,
    };
    if above_max {
        return Err(PlaceholderError::validation(
            field,
            value.clone(),
            range_constraint(min, max),
        ));
    }

    check_range(field, integer_value(field, value)?, min, max)
}

fn present<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|value| !value.is_null())
}

/// Integer view of a JSON number; floats count when they have no fraction
fn integer_value(field: &str, value: &Value) -> Result<i64> {
    let not_integer = || PlaceholderError::validation(field, value.clone(), "must be an integer");
    let out_of_range = || {
        PlaceholderError::validation(
            field,
            value.clone(),
            format!("must be between {} and {}", i64::MIN, i64::MAX),
        )
    };

    let Value::Number(number) = value else {
        return Err(not_integer());
    };

    if let Some(v) = number.as_i64() {
        return Ok(v);
    }
    if number.is_u64() {
        return Err(out_of_range());
    }

    match number.as_f64() {
        Some(v) if !v.is_finite() || v.fract() != 0.0 => Err(not_integer()),
        // i64::MAX as f64 rounds up to 2^63, which is itself out of range
        Some(v) if v < i64::MIN as f64 || v >= i64::MAX as f64 => Err(out_of_range()),
        Some(v) => Ok(v as i64),
        None => Err(not_integer()),
    }
}

/// Rewrite integer-valued option fields so whole floats deserialize as integers
///
/// Errors name the option field itself rather than the enclosing object.
fn normalize_integers(value: &Value, fields: &[&str]) -> Result<Value> {
    let mut value = value.clone();
    if let Value::Object(object) = &mut value {
        for &field in fields {
            if let Some(raw) = object.get_mut(field).filter(|raw| !raw.is_null()) {
                *raw = Value::from(integer_value(field, raw)?);
            }
        }
    }
    Ok(value)
}

fn check_option_pairing(provider: &str, has_placehold: bool, has_picsum: bool) -> Result<()> {
    let mismatch = if has_placehold && provider != PLACEHOLD_PROVIDER {
        Some((PLACEHOLD_OPTIONS_FIELD, PLACEHOLD_PROVIDER))
    } else if has_picsum && provider != PICSUM_PROVIDER {
        Some((PICSUM_OPTIONS_FIELD, PICSUM_PROVIDER))
    } else {
        None
    };

    match mismatch {
        Some((field, expected)) => Err(PlaceholderError::validation_message(
            field,
            format!(
                "Invalid {field}: can only be used with provider '{expected}', \
                 got provider '{provider}'"
            ),
        )
        .with_context("provider", provider)
        .with_context("constraint", format!("requires provider '{expected}'"))),
        None => Ok(()),
    }
}

fn parse_options<T: DeserializeOwned>(field: &str, value: &Value) -> Result<T> {
    if !value.is_object() {
        return Err(PlaceholderError::validation(
            field,
            value.clone(),
            "must be an object",
        ));
    }

    serde_json::from_value(value.clone()).map_err(|e| {
        PlaceholderError::validation(field, value.clone(), format!("has an invalid field: {e}"))
    })
}
