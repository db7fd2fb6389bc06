//! Named, typed validation pipelines.
//!
//! A [`Field`] turns a raw string into a validated, typed value. It is built
//! fluently: [`Field::named`] creates the identity field over the raw string,
//! and [`Field::with_validator`] appends a step to the pipeline. Steps run in
//! the order they were attached — the first validator sees the raw string,
//! later validators see the output of the previous stage.
//!
//! Attachment order can matter. `with_default(x)` before `one_of(...)` makes
//! an absent value become `x` before the membership check runs (so `x` must
//! itself be a legal value); attached after, an absent value bypasses the
//! membership check entirely.
//!
//! Fields are immutable and cheap to clone; define them once and reuse them
//! across parse calls:
//!
//! ```
//! use fieldwork_forms::Field;
//!
//! let limit = Field::i32("limit").with_default(10).clamp_min(0).clamp_max(100);
//! assert_eq!(limit.validate(Some("50")).unwrap(), Some(50));
//! assert_eq!(limit.validate(Some("-10")).unwrap(), Some(0));
//! assert_eq!(limit.validate(None).unwrap(), Some(10));
//! ```

use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use fieldwork_core::ValidationError;
use serde::Serialize;

use crate::validator::Validator;
use crate::validators::choice::OneOfValidator;
use crate::validators::parse::{BoolValidator, CharValidator, ParseValidator};
use crate::validators::presence::{DefaultValueValidator, RequiredValidator};
use crate::validators::range::{ClampMaxValidator, ClampMinValidator};

/// A value travelling between pipeline steps, with its concrete type erased.
pub(crate) type AnyValue = Box<dyn Any + Send + Sync>;

/// Process-unique identity of a field.
///
/// Every builder step produces a field with a fresh identity; cloning a field
/// preserves it. Two fields with the same name are distinct entities, and
/// [`ParseResult`](crate::ParseResult) lookups are keyed by identity, never
/// by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldId(u64);

impl FieldId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// One type-erased step of a field's pipeline.
trait Step: Send + Sync {
    fn apply(
        &self,
        field_name: &str,
        value: Option<AnyValue>,
    ) -> Result<Option<AnyValue>, ValidationError>;
}

/// Adapts a typed [`Validator`] to the erased [`Step`] interface.
struct ValidatorStep<In, Out, V> {
    validator: V,
    _types: PhantomData<fn(In) -> Out>,
}

impl<In, Out, V> Step for ValidatorStep<In, Out, V>
where
    In: Send + Sync + 'static,
    Out: Send + Sync + 'static,
    V: Validator<In, Out>,
{
    fn apply(
        &self,
        field_name: &str,
        value: Option<AnyValue>,
    ) -> Result<Option<AnyValue>, ValidationError> {
        // Adjacent steps are type-aligned by the `with_validator` signature,
        // so this downcast only fails on a builder bug.
        let input = value.map(|boxed| {
            *boxed
                .downcast::<In>()
                .expect("pipeline step received a value of the wrong type")
        });
        Ok(self
            .validator
            .validate(field_name, input)?
            .map(|out| Box::new(out) as AnyValue))
    }
}

/// Shared state of a field: its name, identity, and pipeline.
struct FieldInner {
    name: String,
    id: FieldId,
    steps: Vec<Arc<dyn Step>>,
}

impl FieldInner {
    fn run(&self, raw: Option<&str>) -> Result<Option<AnyValue>, ValidationError> {
        let mut value: Option<AnyValue> = raw.map(|s| Box::new(s.to_owned()) as AnyValue);
        for step in &self.steps {
            value = step.apply(&self.name, value)?;
        }
        Ok(value)
    }
}

/// A named pipeline from a raw string to a validated `T`.
///
/// See the [module documentation](self) for an overview and examples.
pub struct Field<T> {
    inner: Arc<FieldInner>,
    _output: PhantomData<fn() -> T>,
}

impl<T> Clone for Field<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            _output: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.inner.name)
            .field("id", &self.inner.id)
            .field("steps", &self.inner.steps.len())
            .finish()
    }
}

impl Field<String> {
    /// Creates the identity field: validation returns the raw string
    /// unchanged and never fails.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(FieldInner {
                name: name.into(),
                id: FieldId::next(),
                steps: Vec::new(),
            }),
            _output: PhantomData,
        }
    }

    /// A string field; alias for [`Field::named`].
    pub fn string(name: impl Into<String>) -> Self {
        Self::named(name)
    }

    /// An `i8` field.
    pub fn i8(name: impl Into<String>) -> Field<i8> {
        Self::named(name).with_validator(ParseValidator::new())
    }

    /// An `i16` field.
    pub fn i16(name: impl Into<String>) -> Field<i16> {
        Self::named(name).with_validator(ParseValidator::new())
    }

    /// An `i32` field.
    pub fn i32(name: impl Into<String>) -> Field<i32> {
        Self::named(name).with_validator(ParseValidator::new())
    }

    /// An `i64` field.
    pub fn i64(name: impl Into<String>) -> Field<i64> {
        Self::named(name).with_validator(ParseValidator::new())
    }

    /// An `f32` field.
    pub fn f32(name: impl Into<String>) -> Field<f32> {
        Self::named(name).with_validator(ParseValidator::new())
    }

    /// An `f64` field.
    pub fn f64(name: impl Into<String>) -> Field<f64> {
        Self::named(name).with_validator(ParseValidator::new())
    }

    /// A `bool` field. Parsing is permissive: any string other than a
    /// case-insensitive `"true"` validates to `false`.
    pub fn bool(name: impl Into<String>) -> Field<bool> {
        Self::named(name).with_validator(BoolValidator)
    }

    /// A `char` field; fails unless the input is exactly one character.
    pub fn char(name: impl Into<String>) -> Field<char> {
        Self::named(name).with_validator(CharValidator)
    }
}

impl<T> Field<T> {
    /// The field's name, used to look up its raw value in the input mapping.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The field's identity.
    pub fn id(&self) -> FieldId {
        self.inner.id
    }

    /// The erased handle for this field, as stored by a
    /// [`Form`](crate::Form). Cheap: the pipeline is shared, not copied.
    pub fn to_any(&self) -> AnyField {
        AnyField {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Send + Sync + 'static> Field<T> {
    /// Returns a new field whose pipeline is this field's pipeline followed
    /// by `validator`. The new validator observes the already-validated
    /// output of the previous stage, not the raw string.
    ///
    /// The returned field has a fresh identity.
    pub fn with_validator<B, V>(self, validator: V) -> Field<B>
    where
        B: Send + Sync + 'static,
        V: Validator<T, B> + 'static,
    {
        let mut steps = self.inner.steps.clone();
        steps.push(Arc::new(ValidatorStep {
            validator,
            _types: PhantomData,
        }));
        Field {
            inner: Arc::new(FieldInner {
                name: self.inner.name.clone(),
                id: FieldId::next(),
                steps,
            }),
            _output: PhantomData,
        }
    }

    /// Runs the pipeline over a raw value. `None` models an absent input.
    ///
    /// The first failing validator aborts the run; validators after it are
    /// not invoked.
    pub fn validate(&self, raw: Option<&str>) -> Result<Option<T>, ValidationError> {
        Ok(self.inner.run(raw)?.map(|boxed| {
            *boxed
                .downcast::<T>()
                .expect("pipeline output type does not match the field type")
        }))
    }

    /// Rejects absent values with a `"missing value"` error.
    pub fn required(self) -> Self {
        self.with_validator(RequiredValidator::new())
    }
}

impl<T: Clone + Send + Sync + 'static> Field<T> {
    /// Substitutes `default` for absent values.
    pub fn with_default(self, default: T) -> Self {
        self.with_validator(DefaultValueValidator::new(default))
    }
}

impl<T: PartialEq + fmt::Display + Send + Sync + 'static> Field<T> {
    /// Restricts the value to a fixed set of legal values.
    pub fn one_of(self, values: impl IntoIterator<Item = T>) -> Self {
        self.with_validator(OneOfValidator::new(values))
    }
}

impl<T: PartialOrd + fmt::Display + Clone + Send + Sync + 'static> Field<T> {
    /// Silently raises values below `min` to `min`; never fails.
    pub fn clamp_min(self, min: T) -> Self {
        self.with_validator(ClampMinValidator::new(min))
    }

    /// Silently lowers values above `max` to `max`; never fails.
    pub fn clamp_max(self, max: T) -> Self {
        self.with_validator(ClampMaxValidator::new(max))
    }
}

/// A [`Field`] with its output type erased.
///
/// This is what a [`Form`](crate::Form) stores: it keeps the field's name,
/// identity, and pipeline but forgets the output type, so fields of
/// different types can share one collection. Produce one with
/// [`Field::to_any`].
#[derive(Clone)]
pub struct AnyField {
    inner: Arc<FieldInner>,
}

impl AnyField {
    /// The field's name.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The field's identity.
    pub fn id(&self) -> FieldId {
        self.inner.id
    }

    /// Runs the pipeline, producing a type-erased value.
    pub(crate) fn run(&self, raw: Option<&str>) -> Result<Option<AnyValue>, ValidationError> {
        self.inner.run(raw)
    }
}

impl fmt::Debug for AnyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyField")
            .field("name", &self.inner.name)
            .field("id", &self.inner.id)
            .finish()
    }
}

impl<T> From<&Field<T>> for AnyField {
    fn from(field: &Field<T>) -> Self {
        field.to_any()
    }
}

impl<T> From<Field<T>> for AnyField {
    fn from(field: Field<T>) -> Self {
        Self { inner: field.inner }
    }
}
