//! The single-field validation error type.
//!
//! [`ValidationError`] is the failure currency of the whole workspace: every
//! validator reports problems with it, and the form layer aggregates it.
//! Errors describe malformed user input, not system faults — callers should
//! treat them as the 400-class of their surface, which is why the type
//! serializes to a JSON payload.

use std::error::Error;
use std::fmt;

use serde::Serialize;

/// A validation failure for a single field.
///
/// Carries the field name, the offending value when there is one (rendered
/// for display; absent for pure "missing value" failures), a human-readable
/// message, and optionally the lower-level error that triggered the failure
/// (e.g. the integer parse error underneath `"not a valid i32"`).
///
/// # Examples
///
/// ```
/// use fieldwork_core::ValidationError;
///
/// let err = ValidationError::new("limit", "missing value");
/// assert_eq!(err.to_string(), "field 'limit': missing value");
///
/// let err = ValidationError::new("limit", "not a valid i32").with_value("x");
/// assert_eq!(err.to_string(), "value 'x' for field 'limit': not a valid i32");
/// ```
#[derive(Debug, Serialize)]
pub struct ValidationError {
    field_name: String,
    value: Option<String>,
    message: String,
    #[serde(skip)]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ValidationError {
    /// Creates a new `ValidationError` for the given field.
    pub fn new(field_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            value: None,
            message: message.into(),
            source: None,
        }
    }

    /// Records the offending value, rendered for display.
    #[must_use]
    pub fn with_value(mut self, value: impl fmt::Display) -> Self {
        self.value = Some(value.to_string());
        self
    }

    /// Attaches the lower-level error that caused this failure.
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// The name of the field that failed validation.
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// The offending value, if one was recorded.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The failure message, without the field/value prefix.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(
                f,
                "value '{value}' for field '{}': {}",
                self.field_name, self.message
            ),
            None => write!(f, "field '{}': {}", self.field_name, self.message),
        }
    }
}

impl Error for ValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}
