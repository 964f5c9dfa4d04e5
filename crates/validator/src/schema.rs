//! Schema factory
//!
//! Free constructors for every validator kind. A schema is a tree of these,
//! built once and then used for any number of `validate` calls.
//!
//! ```
//! use input_validator::prelude::*;
//! use serde_json::json;
//!
//! let schema = object(fields! {
//!     "name" => string().min_length(2),
//!     "tags" => array(string()).optional(),
//! });
//!
//! let result = schema.validate_json(&json!({"name": "J"}));
//! assert_eq!(result.errors()[0].path, path!["name"]);
//! ```

use crate::foundation::{FieldKey, SharedValidator, Validator};
use crate::validators::{
    ArrayRule, ArrayValidator, BooleanRule, BooleanValidator, DateRule, DateValidator, NumberRule,
    NumberValidator, ObjectRule, ObjectValidator, StringRule, StringValidator,
};

/// A string validator without constraints.
pub fn string() -> StringValidator {
    Validator::new(StringRule::default())
}

/// A number validator without constraints.
pub fn number() -> NumberValidator {
    Validator::new(NumberRule::default())
}

/// A validator accepting exactly `true` and `false`.
pub fn boolean() -> BooleanValidator {
    Validator::new(BooleanRule)
}

/// A date validator without bounds.
pub fn date() -> DateValidator {
    Validator::new(DateRule::default())
}

/// An object validator over `fields`, checked in the given order.
///
/// Keys may be `&str` or `String`; validators may be any validator or an
/// already shared one. Use the [`fields!`](crate::fields) macro to mix
/// validator kinds in one list.
pub fn object<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> ObjectValidator
where
    K: Into<FieldKey>,
    V: Into<SharedValidator>,
{
    Validator::new(ObjectRule::new(fields))
}

/// An array validator applying `item` to every element.
pub fn array(item: impl Into<SharedValidator>) -> ArrayValidator {
    Validator::new(ArrayRule::new(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, Value};

    #[test]
    fn test_factories_start_unconstrained() {
        assert!(!string().is_optional());
        assert_eq!(string().rule(), &StringRule::default());
        assert_eq!(number().rule(), &NumberRule::default());
        assert_eq!(date().rule(), &DateRule::default());
        assert_eq!(string().message(), None);
    }

    #[test]
    fn test_every_kind_honours_optional() {
        let validators: Vec<SharedValidator> = vec![
            string().optional().into(),
            number().optional().into(),
            boolean().optional().into(),
            date().optional().into(),
            object(crate::fields! {}).optional().into(),
            array(string()).optional().into(),
        ];
        for validator in &validators {
            let result = validator.validate(&Value::Null);
            assert!(result.is_valid(), "{validator:?}");
            assert_eq!(result.value(), None);
        }
    }
}
