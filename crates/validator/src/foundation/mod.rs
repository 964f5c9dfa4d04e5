//! Core validation types and traits
//!
//! This module contains the building blocks every validator is made of:
//!
//! - **Values**: [`Value`], the dynamic input type, and its object [`Map`]
//! - **Traits**: [`Validate`], [`Rule`], [`ValidateExt`]
//! - **Validator**: [`Validator<R>`], the shared optional / custom-message
//!   behaviour wrapped around a rule
//! - **Results**: [`ValidationResult`], [`ValidationError`], [`FieldPath`]
//!
//! # Architecture
//!
//! ## 1. One hook per kind
//!
//! Each validator kind implements [`Rule::check`]. The common contract lives
//! in [`Validator<R>`], so a kind cannot forget to honour `optional()` or
//! `with_message()`:
//!
//! ```rust,ignore
//! impl<R: Rule> Validate for Validator<R> {
//!     fn validate(&self, input: &Value) -> ValidationResult {
//!         if self.optional && input.is_blank() {
//!             return ValidationResult::skipped();
//!         }
//!         self.apply_message(self.rule.check(input))
//!     }
//! }
//! ```
//!
//! ## 2. Immutable builders
//!
//! Builder methods take `self` and return the updated validator, so a
//! configured tree never changes and can be shared between threads.
//!
//! ## 3. Paths are folded bottom-up
//!
//! Composite validators re-root each child error under their own key or
//! index with [`ValidationError::nested_under`]; nothing is mutated in place.
//!
//! # Examples
//!
//! ```
//! use input_validator::prelude::*;
//!
//! let validator = string().min_length(5);
//! assert!(validator.validate(&"hello".into()).is_valid());
//! assert!(validator.validate(&"hi".into()).is_invalid());
//! ```

pub mod error;
pub mod path;
pub mod result;
pub mod traits;
pub mod value;

pub use error::{Error, ValidationError};
pub use path::{FieldKey, FieldPath, PathSegment};
pub use result::ValidationResult;
pub use traits::{Rule, SharedValidator, Validate, ValidateExt, Validator};
pub use value::{Map, Value};
