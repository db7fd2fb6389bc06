//! # fieldwork
//!
//! Typed, composable validation of string key/value input (query parameters,
//! CLI flags, form posts).
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `fieldwork` to get everything, or on the individual
//! crates for finer-grained control.
//!
//! ```
//! use std::collections::HashMap;
//! use fieldwork::forms::{Field, Form};
//!
//! let limit = Field::i32("limit").with_default(10).clamp_min(0).clamp_max(100);
//! let form = Form::new([limit.to_any()]);
//!
//! let result = form.parse(&HashMap::new()).unwrap();
//! assert_eq!(result.get(&limit), Some(&10));
//! ```

/// Core error type and logging setup.
pub use fieldwork_core as core;

/// Fields, validators, forms, and parse results.
pub use fieldwork_forms as forms;
