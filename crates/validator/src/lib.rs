//! # input-validator
//!
//! Composable, recursive validation of dynamic data against declaratively
//! built schemas.
//!
//! A schema is a tree of validators: strings, numbers, booleans and dates at
//! the leaves, objects and arrays in between. Validating a value walks the
//! whole tree and returns a [`ValidationResult`](foundation::ValidationResult)
//! carrying either the validated (and normalized) value or every failure,
//! each tagged with the path that led to it.
//!
//! ## Quick Start
//!
//! ```
//! use input_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = object(fields! {
//!     "users" => array(object(fields! {
//!         "profile" => object(fields! {
//!             "name" => string().min_length(2),
//!         }),
//!     })),
//! });
//!
//! let input = json!({
//!     "users": [
//!         {"profile": {"name": "John"}},
//!         {"profile": {"name": "J"}},
//!     ]
//! });
//!
//! let result = schema.validate_json(&input);
//! assert_eq!(result.errors().len(), 1);
//! assert_eq!(result.errors()[0].path, path!["users", 1usize, "profile", "name"]);
//! assert_eq!(
//!     result.errors()[0].to_string(),
//!     "users.1.profile.name: String must be at least 2 characters long"
//! );
//! ```
//!
//! ## Building Validators
//!
//! Start from a factory in [`schema`] and chain constraints. Every chain call
//! returns a new validator, so a finished tree is immutable and can be shared
//! across threads.
//!
//! - **Scalars**: [`string()`](schema::string), [`number()`](schema::number),
//!   [`boolean()`](schema::boolean), [`date()`](schema::date)
//! - **Composites**: [`object()`](schema::object) with the [`fields!`] macro,
//!   [`array()`](schema::array)
//! - **Shared settings**: [`optional()`](foundation::Validator::optional),
//!   [`with_message()`](foundation::Validator::with_message)
//!
//! ## Custom Kinds
//!
//! Implement [`Rule`](foundation::Rule) and wrap it in
//! [`Validator`](foundation::Validator) to get the shared settings for free.

pub mod foundation;
mod macros;
pub mod prelude;
pub mod schema;
pub mod validators;
