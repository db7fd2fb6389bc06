//! Validators that act on absent values.
//!
//! These are the only two built-ins that do not pass `None` through:
//! [`RequiredValidator`] rejects it, [`DefaultValueValidator`] replaces it.

use std::marker::PhantomData;

use fieldwork_core::ValidationError;

use crate::validator::Validator;

/// Fails with `"missing value"` when the input is absent; passes every
/// present value through unchanged.
///
/// The error carries no offending value — there is none.
pub struct RequiredValidator<T> {
    _value: PhantomData<fn() -> T>,
}

impl<T> RequiredValidator<T> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }
}

impl<T> Default for RequiredValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Send + Sync + 'static> Validator<T, T> for RequiredValidator<T> {
    fn validate(&self, field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        match value {
            Some(v) => Ok(Some(v)),
            None => Err(ValidationError::new(field_name, "missing value")),
        }
    }
}

/// Substitutes a fixed default when the input is absent; passes every
/// present value through unchanged. Never fails.
pub struct DefaultValueValidator<T> {
    default: T,
}

impl<T> DefaultValueValidator<T> {
    pub fn new(default: T) -> Self {
        Self { default }
    }
}

impl<T: Clone + Send + Sync + 'static> Validator<T, T> for DefaultValueValidator<T> {
    fn validate(&self, _field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        Ok(Some(value.unwrap_or_else(|| self.default.clone())))
    }
}
