//! Built-in validators
//!
//! One module per validator kind. Each kind is a [`Rule`](crate::foundation::Rule)
//! wrapped in [`Validator`](crate::foundation::Validator), so every kind
//! shares `optional()` and `with_message()`.
//!
//! # Categories
//!
//! - **Scalars**: [`StringValidator`], [`NumberValidator`], [`BooleanValidator`],
//!   [`DateValidator`]
//! - **Composites**: [`ObjectValidator`], [`ArrayValidator`]
//!
//! # Examples
//!
//! ```
//! use input_validator::prelude::*;
//!
//! let username = string().min_length(3).max_length(20).pattern("[a-z0-9_]+");
//! let age = number().integer().min(0).max(150);
//! let tags = array(string().min_length(1)).max_items(10);
//!
//! assert!(username.validate(&"ada_l".into()).is_valid());
//! assert!(age.validate(&Value::Float(36.5)).is_invalid());
//! assert!(tags.validate(&Value::from(vec!["math"])).is_valid());
//! ```

// Scalar validators
pub mod boolean;
pub mod date;
pub mod numeric;
pub mod string;

// Composite validators
pub mod collection;

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use boolean::{BooleanRule, BooleanValidator};
pub use collection::{ArrayRule, ArrayValidator, ObjectRule, ObjectValidator};
pub use date::{DateRule, DateValidator, parse_date};
pub use numeric::{NumberBound, NumberRule, NumberValidator};
pub use string::{Pattern, StringRule, StringValidator};
