//! Range and clamp validators over ordered values.
//!
//! Two families: the bound validators fail when the comparison fails and
//! never alter the value; the clamp validators replace an out-of-range value
//! with the bound and never fail. [`RangeValidator`] combines both bounds
//! with a per-bound [`Cap`] and a global [`RangePolicy`].
//!
//! All of them pass `None` through unchanged, and all work with any
//! `PartialOrd` value — numbers, strings, anything ordered.

use std::fmt;

use fieldwork_core::ValidationError;

use crate::validator::Validator;

/// Whether a bound includes the bound value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cap {
    Inclusive,
    Exclusive,
}

impl fmt::Display for Cap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inclusive => f.write_str("inclusive"),
            Self::Exclusive => f.write_str("exclusive"),
        }
    }
}

/// What [`RangeValidator`] does with an out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
    /// Replace the value with the nearest bound.
    Clamp,
    /// Fail with an error naming both bounds.
    Fail,
}

/// Fails with `"must be at least {min}"` when the value is below `min`.
pub struct InclusiveMinValidator<T> {
    min: T,
}

impl<T> InclusiveMinValidator<T> {
    pub fn new(min: T) -> Self {
        Self { min }
    }
}

impl<T> Validator<T, T> for InclusiveMinValidator<T>
where
    T: PartialOrd + fmt::Display + Send + Sync + 'static,
{
    fn validate(&self, field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        match value {
            None => Ok(None),
            Some(v) if v < self.min => {
                Err(ValidationError::new(field_name, format!("must be at least {}", self.min))
                    .with_value(v))
            }
            Some(v) => Ok(Some(v)),
        }
    }
}

/// Fails with `"must be greater than {min}"` when the value is at or below
/// `min`.
pub struct ExclusiveMinValidator<T> {
    min: T,
}

impl<T> ExclusiveMinValidator<T> {
    pub fn new(min: T) -> Self {
        Self { min }
    }
}

impl<T> Validator<T, T> for ExclusiveMinValidator<T>
where
    T: PartialOrd + fmt::Display + Send + Sync + 'static,
{
    fn validate(&self, field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        match value {
            None => Ok(None),
            Some(v) if v <= self.min => Err(ValidationError::new(
                field_name,
                format!("must be greater than {}", self.min),
            )
            .with_value(v)),
            Some(v) => Ok(Some(v)),
        }
    }
}

/// Fails with `"must be at most {max}"` when the value is above `max`.
pub struct InclusiveMaxValidator<T> {
    max: T,
}

impl<T> InclusiveMaxValidator<T> {
    pub fn new(max: T) -> Self {
        Self { max }
    }
}

impl<T> Validator<T, T> for InclusiveMaxValidator<T>
where
    T: PartialOrd + fmt::Display + Send + Sync + 'static,
{
    fn validate(&self, field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        match value {
            None => Ok(None),
            Some(v) if v > self.max => {
                Err(ValidationError::new(field_name, format!("must be at most {}", self.max))
                    .with_value(v))
            }
            Some(v) => Ok(Some(v)),
        }
    }
}

/// Fails with `"must be less than {max}"` when the value is at or above
/// `max`.
pub struct ExclusiveMaxValidator<T> {
    max: T,
}

impl<T> ExclusiveMaxValidator<T> {
    pub fn new(max: T) -> Self {
        Self { max }
    }
}

impl<T> Validator<T, T> for ExclusiveMaxValidator<T>
where
    T: PartialOrd + fmt::Display + Send + Sync + 'static,
{
    fn validate(&self, field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        match value {
            None => Ok(None),
            Some(v) if v >= self.max => Err(ValidationError::new(
                field_name,
                format!("must be less than {}", self.max),
            )
            .with_value(v)),
            Some(v) => Ok(Some(v)),
        }
    }
}

/// Replaces values below `min` with `min`; never fails.
pub struct ClampMinValidator<T> {
    min: T,
}

impl<T> ClampMinValidator<T> {
    pub fn new(min: T) -> Self {
        Self { min }
    }
}

impl<T> Validator<T, T> for ClampMinValidator<T>
where
    T: PartialOrd + Clone + Send + Sync + 'static,
{
    fn validate(&self, _field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        Ok(value.map(|v| if v < self.min { self.min.clone() } else { v }))
    }
}

/// Replaces values above `max` with `max`; never fails.
pub struct ClampMaxValidator<T> {
    max: T,
}

impl<T> ClampMaxValidator<T> {
    pub fn new(max: T) -> Self {
        Self { max }
    }
}

impl<T> Validator<T, T> for ClampMaxValidator<T>
where
    T: PartialOrd + Clone + Send + Sync + 'static,
{
    fn validate(&self, _field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        Ok(value.map(|v| if v > self.max { self.max.clone() } else { v }))
    }
}

/// Limits a value to a range with independently capped bounds.
///
/// Each bound is [`Cap::Inclusive`] or [`Cap::Exclusive`]; the
/// [`RangePolicy`] decides between clamping to the violated bound and
/// failing. The min bound is checked before the max bound.
///
/// Note that clamping to an exclusive bound yields the bound itself, which
/// lies outside the open interval.
pub struct RangeValidator<T> {
    min: T,
    min_cap: Cap,
    max: T,
    max_cap: Cap,
    policy: RangePolicy,
}

impl<T> RangeValidator<T> {
    pub fn new(min: T, min_cap: Cap, max: T, max_cap: Cap, policy: RangePolicy) -> Self {
        Self {
            min,
            min_cap,
            max,
            max_cap,
            policy,
        }
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + fmt::Display + Clone + Send + Sync + 'static,
{
    fn clamp_or_fail(
        &self,
        field_name: &str,
        value: T,
        bound: &T,
    ) -> Result<Option<T>, ValidationError> {
        match self.policy {
            RangePolicy::Clamp => Ok(Some(bound.clone())),
            RangePolicy::Fail => Err(ValidationError::new(
                field_name,
                format!(
                    "not in bounds {} ({}) to {} ({})",
                    self.min, self.min_cap, self.max, self.max_cap
                ),
            )
            .with_value(value)),
        }
    }
}

impl<T> Validator<T, T> for RangeValidator<T>
where
    T: PartialOrd + fmt::Display + Clone + Send + Sync + 'static,
{
    fn validate(&self, field_name: &str, value: Option<T>) -> Result<Option<T>, ValidationError> {
        let value = match value {
            Some(v) => v,
            None => return Ok(None),
        };
        let below_min = match self.min_cap {
            Cap::Inclusive => value < self.min,
            Cap::Exclusive => value <= self.min,
        };
        if below_min {
            return self.clamp_or_fail(field_name, value, &self.min);
        }
        let above_max = match self.max_cap {
            Cap::Inclusive => value > self.max,
            Cap::Exclusive => value >= self.max,
        };
        if above_max {
            return self.clamp_or_fail(field_name, value, &self.max);
        }
        Ok(Some(value))
    }
}
