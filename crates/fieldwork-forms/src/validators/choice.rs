//! Membership validation against a fixed set of legal values.

use std::fmt;

use fieldwork_core::ValidationError;

use crate::validator::Validator;

/// Fails unless the value is one of the legal values given at construction.
///
/// The legal set keeps its construction order, and the error message
/// enumerates it: `"must be one of [0, 2, 4]"`. `None` passes through —
/// attach [`DefaultValueValidator`](crate::validators::DefaultValueValidator)
/// *before* this validator if absent values should be checked too.
pub struct OneOfValidator<T> {
    legal: Vec<T>,
}

impl<T> OneOfValidator<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            legal: values.into_iter().collect(),
        }
    }
}

impl<T> Validator<T, T> for OneOfValidator<T>
where
    T: PartialEq + fmt::Display + Send + Sync + 'static,
{
    fn validate(&self, field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        let value = match value {
            Some(v) => v,
            None => return Ok(None),
        };
        if self.legal.contains(&value) {
            Ok(Some(value))
        } else {
            let legal = self
                .legal
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            Err(ValidationError::new(field_name, format!("must be one of [{legal}]"))
                .with_value(value))
        }
    }
}
