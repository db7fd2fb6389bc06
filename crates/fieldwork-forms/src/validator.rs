//! The validator abstraction.
//!
//! A validator is the atomic unit of parsing logic: given a field name and an
//! optional input value, it produces an optional output value or fails with a
//! [`ValidationError`]. Validators can check (emit the input unchanged,
//! failing under some conditions, like
//! [`RequiredValidator`](crate::validators::RequiredValidator)) or transform
//! (emit a different value, like
//! [`ParseValidator`](crate::validators::ParseValidator)); complex validators
//! may do a little of each.

use fieldwork_core::ValidationError;

/// A single parse/check/transform step in a field's pipeline.
///
/// # The `None` contract
///
/// Except for the two presence validators
/// ([`RequiredValidator`](crate::validators::RequiredValidator) and
/// [`DefaultValueValidator`](crate::validators::DefaultValueValidator)),
/// validators MUST return `None` unchanged when the input is `None`. This is
/// what lets arbitrary validators be attached to optional fields: an absent
/// value flows through the whole chain untouched.
pub trait Validator<In, Out>: Send + Sync {
    /// Validates the given input value and produces the output value.
    fn validate(
        &self,
        field_name: &str,
        value: Option<In>,
    ) -> Result<Option<Out>, ValidationError>;
}

/// Plain closures act as validators, for one-off custom steps:
///
/// ```
/// use fieldwork_core::ValidationError;
/// use fieldwork_forms::Field;
///
/// let upper = Field::string("code").with_validator(
///     |_name: &str, value: Option<String>| -> Result<Option<String>, ValidationError> {
///         Ok(value.map(|v| v.to_uppercase()))
///     },
/// );
/// assert_eq!(upper.validate(Some("abc")).unwrap(), Some("ABC".to_string()));
/// ```
impl<In, Out, F> Validator<In, Out> for F
where
    F: Fn(&str, Option<In>) -> Result<Option<Out>, ValidationError> + Send + Sync,
{
    fn validate(
        &self,
        field_name: &str,
        value: Option<In>,
    ) -> Result<Option<Out>, ValidationError> {
        self(field_name, value)
    }
}
