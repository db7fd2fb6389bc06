//! String-parse validators: the first stage of most pipelines.

use std::any::type_name;
use std::error::Error;
use std::marker::PhantomData;
use std::str::FromStr;

use fieldwork_core::ValidationError;

use crate::validator::Validator;

/// Parses the raw string into `T` via [`FromStr`].
///
/// Covers the numeric field constructors (`i8` through `f64`) and any other
/// `FromStr` target a caller wants to attach. A failed parse reports
/// `"not a valid <T>"` with the offending string and the underlying parse
/// error as source.
pub struct ParseValidator<T> {
    type_name: &'static str,
    _target: PhantomData<fn() -> T>,
}

impl<T> ParseValidator<T> {
    pub fn new() -> Self {
        Self {
            type_name: short_type_name::<T>(),
            _target: PhantomData,
        }
    }
}

impl<T> Default for ParseValidator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Validator<String, T> for ParseValidator<T>
where
    T: FromStr + Send + Sync + 'static,
    T::Err: Error + Send + Sync + 'static,
{
    fn validate(
        &self,
        field_name: &str,
        value: Option<String>,
    ) -> Result<Option<T>, ValidationError> {
        let raw = match value {
            Some(raw) => raw,
            None => return Ok(None),
        };
        match raw.parse::<T>() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(cause) => Err(
                ValidationError::new(field_name, format!("not a valid {}", self.type_name))
                    .with_value(raw)
                    .with_source(cause),
            ),
        }
    }
}

/// Strips module paths: `alloc::string::String` becomes `String`.
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Permissive boolean parsing: a string case-insensitively equal to
/// `"true"` validates to `true`, anything else to `false`. Malformed input
/// is not an error.
pub struct BoolValidator;

impl Validator<String, bool> for BoolValidator {
    fn validate(
        &self,
        _field_name: &str,
        value: Option<String>,
    ) -> Result<Option<bool>, ValidationError> {
        Ok(value.map(|raw| raw.eq_ignore_ascii_case("true")))
    }
}

/// Extracts the single character of the raw string; fails with
/// `"not a single character"` for any other length.
pub struct CharValidator;

impl Validator<String, char> for CharValidator {
    fn validate(
        &self,
        field_name: &str,
        value: Option<String>,
    ) -> Result<Option<char>, ValidationError> {
        let raw = match value {
            Some(raw) => raw,
            None => return Ok(None),
        };
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Some(c)),
            _ => Err(ValidationError::new(field_name, "not a single character").with_value(raw)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_parse_i32() {
        let v = ParseValidator::<i32>::new();
        assert_eq!(v.validate("n", Some("42".into())).unwrap(), Some(42));
        assert_eq!(v.validate("n", Some("-7".into())).unwrap(), Some(-7));
    }

    #[test]
    fn test_parse_i32_invalid() {
        let v = ParseValidator::<i32>::new();
        let err = v.validate("n", Some("abc".into())).unwrap_err();
        assert_eq!(err.message(), "not a valid i32");
        assert_eq!(err.value(), Some("abc"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_parse_overflow_is_invalid() {
        let v = ParseValidator::<i8>::new();
        assert!(v.validate("n", Some("200".into())).is_err());
    }

    #[test]
    fn test_parse_f64() {
        let v = ParseValidator::<f64>::new();
        assert_eq!(v.validate("x", Some("2.5".into())).unwrap(), Some(2.5));
        assert_eq!(v.validate("x", Some("2.5e3".into())).unwrap(), Some(2500.0));
        assert!(v.validate("x", Some("two".into())).is_err());
    }

    #[test]
    fn test_parse_none_passes_through() {
        assert_eq!(ParseValidator::<i8>::new().validate("n", None).unwrap(), None);
        assert_eq!(ParseValidator::<i16>::new().validate("n", None).unwrap(), None);
        assert_eq!(ParseValidator::<i32>::new().validate("n", None).unwrap(), None);
        assert_eq!(ParseValidator::<i64>::new().validate("n", None).unwrap(), None);
        assert_eq!(ParseValidator::<f32>::new().validate("n", None).unwrap(), None);
        assert_eq!(ParseValidator::<f64>::new().validate("n", None).unwrap(), None);
    }

    #[test]
    fn test_error_message_names_each_width() {
        let err = ParseValidator::<i64>::new().validate("n", Some("x".into())).unwrap_err();
        assert_eq!(err.message(), "not a valid i64");
        let err = ParseValidator::<f32>::new().validate("n", Some("x".into())).unwrap_err();
        assert_eq!(err.message(), "not a valid f32");
    }

    #[test]
    fn test_bool_is_permissive() {
        let v = BoolValidator;
        assert_eq!(v.validate("b", Some("true".into())).unwrap(), Some(true));
        assert_eq!(v.validate("b", Some("TRUE".into())).unwrap(), Some(true));
        assert_eq!(v.validate("b", Some("tRuE".into())).unwrap(), Some(true));
        assert_eq!(v.validate("b", Some("false".into())).unwrap(), Some(false));
        // Malformed input parses to false rather than failing.
        assert_eq!(v.validate("b", Some("yes".into())).unwrap(), Some(false));
        assert_eq!(v.validate("b", Some("1".into())).unwrap(), Some(false));
        assert_eq!(v.validate("b", Some("".into())).unwrap(), Some(false));
        assert_eq!(v.validate("b", None).unwrap(), None);
    }

    #[test]
    fn test_char_single() {
        let v = CharValidator;
        assert_eq!(v.validate("c", Some("x".into())).unwrap(), Some('x'));
        assert_eq!(v.validate("c", Some("é".into())).unwrap(), Some('é'));
        assert_eq!(v.validate("c", None).unwrap(), None);
    }

    #[test]
    fn test_char_wrong_length() {
        let v = CharValidator;
        let err = v.validate("c", Some("xy".into())).unwrap_err();
        assert_eq!(err.message(), "not a single character");
        assert!(v.validate("c", Some("".into())).is_err());
    }

    #[test]
    fn test_short_type_name() {
        assert_eq!(short_type_name::<i32>(), "i32");
        assert_eq!(short_type_name::<String>(), "String");
    }
}
