//! Error types for placeholder generation

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Result type alias for placeholder operations
pub type Result<T> = std::result::Result<T, PlaceholderError>;

/// Field-to-value context attached to every error
pub type ErrorContext = BTreeMap<String, Value>;

/// Machine-readable error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// A field failed a rule
    Validation,
    /// The provider is not known or not allowed
    ProviderUnsupported,
    /// The constraint set is unusable
    Configuration,
    /// A bug or broken invariant
    Internal,
}

impl ErrorKind {
    /// Stable code used in logs and protocol error payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::ProviderUnsupported => "PROVIDER_UNSUPPORTED",
            ErrorKind::Configuration => "CONFIGURATION_ERROR",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type
///
/// Every variant carries a human-readable message and a context map so the
/// transport layer can surface the offending field, value and constraint.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlaceholderError {
    /// A request field failed a rule
    #[error("Validation error: {message}")]
    Validation {
        /// Human-readable description
        message: String,
        /// Field, value and constraint
        context: ErrorContext,
    },

    /// The provider is not known or not allowed
    #[error("Provider error: {message}")]
    ProviderUnsupported {
        /// Description
        message: String,
        /// Requested provider and the supported list
        context: ErrorContext,
    },

    /// The constraint set or an override is unusable
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description
        message: String,
        /// Offending key
        context: ErrorContext,
    },

    /// A bug or broken invariant
    #[error("Internal error: {message}")]
    Internal {
        /// Description
        message: String,
        /// Source details when wrapping another error
        context: ErrorContext,
    },
}

impl PlaceholderError {
    /// Create a validation error for a specific field
    pub fn validation(
        field: impl Into<String>,
        value: impl Into<Value>,
        constraint: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let value = value.into();
        let constraint = constraint.into();
        let message = format!("Invalid {field}: {} ({constraint})", display_value(&value));

        let mut context = ErrorContext::new();
        context.insert("field".to_string(), Value::String(field));
        context.insert("value".to_string(), value);
        context.insert("constraint".to_string(), Value::String(constraint));

        Self::Validation { message, context }
    }

    /// Create a validation error that is not tied to a single field value
    pub fn validation_message(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        let message = message.into();

        let mut context = ErrorContext::new();
        context.insert("field".to_string(), Value::String(field));

        Self::Validation { message, context }
    }

    /// Create a provider-unsupported error listing the valid providers
    pub fn provider_unsupported<I, S>(provider: impl Into<String>, supported: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = provider.into();
        let supported: Vec<String> = supported.into_iter().map(Into::into).collect();
        let message = format!(
            "Unsupported provider '{provider}'. Supported providers: {}",
            supported.join(", ")
        );

        let mut context = ErrorContext::new();
        context.insert("provider".to_string(), Value::String(provider));
        context.insert(
            "supportedProviders".to_string(),
            Value::Array(supported.into_iter().map(Value::String).collect()),
        );

        Self::ProviderUnsupported { message, context }
    }

    /// Create a configuration error for an environment-derived setting
    pub fn configuration(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut context = ErrorContext::new();
        context.insert("key".to_string(), Value::String(key.into()));

        Self::Configuration {
            message: message.into(),
            context,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            context: ErrorContext::new(),
        }
    }

    /// Wrap an unexpected error, keeping its identity for diagnostics
    pub fn internal_from<E>(error: &E) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut context = ErrorContext::new();
        context.insert(
            "source".to_string(),
            Value::String(std::any::type_name::<E>().to_string()),
        );
        context.insert("cause".to_string(), Value::String(error.to_string()));

        Self::Internal {
            message: error.to_string(),
            context,
        }
    }

    /// Attach an extra context entry
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context_mut().insert(key.into(), value.into());
        self
    }

    /// Machine-readable kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation { .. } => ErrorKind::Validation,
            Self::ProviderUnsupported { .. } => ErrorKind::ProviderUnsupported,
            Self::Configuration { .. } => ErrorKind::Configuration,
            Self::Internal { .. } => ErrorKind::Internal,
        }
    }

    /// Message without the kind prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::ProviderUnsupported { message, .. }
            | Self::Configuration { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    /// Structured details
    pub fn context(&self) -> &ErrorContext {
        match self {
            Self::Validation { context, .. }
            | Self::ProviderUnsupported { context, .. }
            | Self::Configuration { context, .. }
            | Self::Internal { context, .. } => context,
        }
    }

    fn context_mut(&mut self) -> &mut ErrorContext {
        match self {
            Self::Validation { context, .. }
            | Self::ProviderUnsupported { context, .. }
            | Self::Configuration { context, .. }
            | Self::Internal { context, .. } => context,
        }
    }

    /// The field an error is attributed to, if any
    pub fn field(&self) -> Option<&str> {
        self.context().get("field").and_then(Value::as_str)
    }

    /// Identical inputs always fail identically, so nothing is retryable
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Serializable payload: kind, message and context
    pub fn to_data(&self) -> Value {
        serde_json::json!({
            "kind": self.kind().as_str(),
            "message": self.message(),
            "context": self.context(),
        })
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => format!("'{s}'"),
        other => other.to_string(),
    }
}
