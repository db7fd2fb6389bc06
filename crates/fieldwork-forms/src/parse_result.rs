//! Typed results of a successful form parse.

use std::collections::HashMap;
use std::fmt;

use crate::field::{AnyValue, Field, FieldId};

/// The typed output bundle of [`Form::parse`](crate::Form::parse) /
/// [`Form::parse_all`](crate::Form::parse_all).
///
/// Values are stored type-erased, keyed by field identity; [`ParseResult::get`]
/// recovers the concrete type from the field used to look up. A field absent
/// from the map means either an optional field received no input or the field
/// was never part of the form that produced this result — the two are
/// indistinguishable, and both yield `None`.
pub struct ParseResult {
    values: HashMap<FieldId, AnyValue>,
}

impl ParseResult {
    pub(crate) fn new(values: HashMap<FieldId, AnyValue>) -> Self {
        Self { values }
    }

    /// The parsed value for `field`, if one was produced.
    pub fn get<T: 'static>(&self, field: &Field<T>) -> Option<&T> {
        self.values
            .get(&field.id())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// The number of values in this result.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether this result holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl fmt::Debug for ParseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseResult")
            .field("values", &self.values.len())
            .finish()
    }
}
