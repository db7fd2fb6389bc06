//! Forms: ordered field collections parsed against a raw input mapping.
//!
//! A [`Form`] is built once per schema from erased fields and reused for
//! every parse call. Two parse modes share the same per-field work and
//! differ only in failure handling: [`Form::parse`] stops at the first
//! failing field, [`Form::parse_all`] evaluates every field and reports the
//! complete failure set.

use std::collections::HashMap;

use fieldwork_core::ValidationError;
use serde::Serialize;
use thiserror::Error;

use crate::field::{AnyField, Field, FieldId};
use crate::parse_result::ParseResult;

/// An ordered collection of fields defining a parsing schema.
///
/// Fields are evaluated in insertion order. Duplicate names are permitted:
/// every field with a matching name independently reads and validates the
/// same raw value. Forms are immutable; [`Form::extend`] builds a new form
/// rather than mutating the receiver.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use fieldwork_forms::{Field, Form};
///
/// let query = Field::string("q");
/// let limit = Field::i32("limit").required();
/// let form = Form::new([query.to_any(), limit.to_any()]);
///
/// let mut input = HashMap::new();
/// input.insert("limit".to_string(), Some("25".to_string()));
///
/// let result = form.parse(&input).unwrap();
/// assert_eq!(result.get(&limit), Some(&25));
/// assert_eq!(result.get(&query), None); // optional, no input
/// ```
#[derive(Debug, Clone)]
pub struct Form {
    fields: Vec<AnyField>,
}

impl Form {
    /// Constructs a form from erased fields, in order.
    pub fn new(fields: impl IntoIterator<Item = AnyField>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// This form's fields, in insertion order.
    pub fn fields(&self) -> &[AnyField] {
        &self.fields
    }

    /// A new form with this form's fields followed by the given ones. The
    /// receiver is left untouched.
    pub fn extend(&self, fields: impl IntoIterator<Item = AnyField>) -> Self {
        Self {
            fields: self.fields.iter().cloned().chain(fields).collect(),
        }
    }

    /// Parses the raw inputs, stopping at the first failing field.
    ///
    /// Each field looks up `values[its name]` — an absent key and an
    /// explicit `None` value are both the absent representation — and runs
    /// its pipeline. Fields after the first failing one are not evaluated.
    /// Entries in `values` without a corresponding field are ignored.
    ///
    /// The returned [`ParseResult`] holds the non-absent outputs keyed by
    /// field identity.
    pub fn parse(
        &self,
        values: &HashMap<String, Option<String>>,
    ) -> Result<ParseResult, ValidationError> {
        let mut results = HashMap::with_capacity(self.fields.len());
        for field in &self.fields {
            let raw = values.get(field.name()).and_then(|v| v.as_deref());
            let parsed = field.run(raw).map_err(|err| {
                tracing::debug!(field = field.name(), error = %err, "field failed validation");
                err
            })?;
            if let Some(value) = parsed {
                results.insert(field.id(), value);
            }
        }
        Ok(ParseResult::new(results))
    }

    /// Parses the raw inputs, evaluating every field regardless of earlier
    /// failures.
    ///
    /// There is no partial success: either every field validates (possibly
    /// via defaults) and a [`ParseResult`] is returned, or the call fails
    /// with a [`FormValidationError`] carrying one error per failing field.
    pub fn parse_all(
        &self,
        values: &HashMap<String, Option<String>>,
    ) -> Result<ParseResult, FormValidationError> {
        let mut results = HashMap::with_capacity(self.fields.len());
        let mut failures = HashMap::new();
        for field in &self.fields {
            let raw = values.get(field.name()).and_then(|v| v.as_deref());
            match field.run(raw) {
                Ok(Some(value)) => {
                    results.insert(field.id(), value);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(field = field.name(), error = %err, "field failed validation");
                    failures.insert(field.id(), err);
                }
            }
        }
        if failures.is_empty() {
            Ok(ParseResult::new(results))
        } else {
            tracing::debug!(failures = failures.len(), "form failed validation");
            Err(FormValidationError::new(failures))
        }
    }
}

/// Aggregate failure from [`Form::parse_all`]: one [`ValidationError`] per
/// failing field, keyed by field identity. Non-empty by construction.
#[derive(Debug, Error, Serialize)]
#[error("form failed validation with {} problems", .failures.len())]
pub struct FormValidationError {
    failures: HashMap<FieldId, ValidationError>,
}

impl FormValidationError {
    pub(crate) fn new(failures: HashMap<FieldId, ValidationError>) -> Self {
        Self { failures }
    }

    /// All failures, keyed by field identity.
    pub fn failures(&self) -> &HashMap<FieldId, ValidationError> {
        &self.failures
    }

    /// The failure recorded for `field`, if it failed.
    pub fn get<T>(&self, field: &Field<T>) -> Option<&ValidationError> {
        self.failures.get(&field.id())
    }

    /// The number of failing fields.
    pub fn len(&self) -> usize {
        self.failures.len()
    }

    /// Always `false`: the error is only constructed when a field failed.
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}
