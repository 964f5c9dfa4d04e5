//! Prelude module for convenient imports.
//!
//! Provides a single `use input_validator::prelude::*;` import that brings
//! in the schema factory, the core traits and the result types.
//!
//! # Examples
//!
//! ```
//! use input_validator::prelude::*;
//!
//! let email = string().pattern(r"[^@\s]+@[^@\s]+").with_message("Enter a valid email");
//! let result = email.validate(&"nope".into());
//! assert_eq!(result.errors()[0].message, "Enter a valid email");
//! ```

// ============================================================================
// FOUNDATION: Core traits, values, results
// ============================================================================

pub use crate::foundation::{
    Error, FieldKey, FieldPath, Map, PathSegment, Rule, SharedValidator, Validate, ValidateExt,
    ValidationError, ValidationResult, Validator, Value,
};

// ============================================================================
// SCHEMA: Factory functions and macros
// ============================================================================

pub use crate::schema::{array, boolean, date, number, object, string};
pub use crate::{fields, path};
