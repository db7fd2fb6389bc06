//! # fieldwork-forms
//!
//! Converts untyped string key/value input (query parameters, CLI flags,
//! form posts) into strongly typed, validated values.
//!
//! A [`Field`] is a named pipeline of [`Validator`]s from a raw string to a
//! typed value; a [`Form`] is an ordered collection of fields that parses a
//! whole input mapping at once, either stopping at the first failure
//! ([`Form::parse`]) or collecting every failure ([`Form::parse_all`]).
//!
//! ```
//! use std::collections::HashMap;
//! use fieldwork_forms::{Field, Form};
//!
//! let query = Field::string("q").required();
//! let limit = Field::i32("limit").with_default(10).clamp_min(0).clamp_max(100);
//! let form = Form::new([query.to_any(), limit.to_any()]);
//!
//! let mut input = HashMap::new();
//! input.insert("q".to_string(), Some("rust".to_string()));
//! input.insert("limit".to_string(), Some("1000".to_string()));
//!
//! let result = form.parse(&input).unwrap();
//! assert_eq!(result.get(&query), Some(&"rust".to_string()));
//! assert_eq!(result.get(&limit), Some(&100)); // clamped
//! ```
//!
//! ## Modules
//!
//! - [`validator`] - The [`Validator`] trait
//! - [`validators`] - Built-in parse, range, choice, and presence validators
//! - [`field`] - [`Field`], [`AnyField`], and [`FieldId`]
//! - [`form`] - [`Form`] and [`FormValidationError`]
//! - [`parse_result`] - [`ParseResult`]

pub mod field;
pub mod form;
pub mod parse_result;
pub mod validator;
pub mod validators;

// Re-export the main surface at the crate root.
pub use field::{AnyField, Field, FieldId};
pub use form::{Form, FormValidationError};
pub use parse_result::ParseResult;
pub use validator::Validator;
