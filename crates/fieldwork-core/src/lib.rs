//! # fieldwork-core
//!
//! Foundation crate for the fieldwork workspace: the single-field validation
//! error type and logging setup. This crate has no dependency on the
//! validation machinery itself and provides the base for the other crates.
//!
//! ## Modules
//!
//! - [`error`] - The [`ValidationError`] type
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;

// Re-export the most commonly used type at the crate root.
pub use error::ValidationError;
