//! Composite validators
//!
//! Objects and arrays delegate to child validators and re-root each child
//! error under the field key or element index that produced it.

pub mod array;
pub mod object;

pub use array::{ArrayRule, ArrayValidator};
pub use object::{ObjectRule, ObjectValidator};
