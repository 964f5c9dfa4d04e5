//! Object validator
//!
//! Validates a fixed set of named fields, each with its own validator, and
//! collects every field failure instead of stopping at the first one.

use indexmap::IndexMap;

use crate::foundation::{
    FieldKey, Map, Rule, SharedValidator, ValidationError, ValidationResult, Validator, Value,
};

/// Object validator.
pub type ObjectValidator = Validator<ObjectRule>;

/// Field schema of an [`ObjectValidator`], in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ObjectRule {
    fields: IndexMap<FieldKey, SharedValidator>,
}

impl ObjectRule {
    /// Builds a schema from `(key, validator)` pairs. A repeated key replaces
    /// the earlier validator but keeps the original position.
    pub fn new<K, V>(fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<FieldKey>,
        V: Into<SharedValidator>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(key, validator)| (key.into(), validator.into()))
                .collect(),
        }
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&FieldKey, &SharedValidator)> {
        self.fields.iter()
    }

    /// The validator declared for `key`.
    pub fn get(&self, key: &str) -> Option<&SharedValidator> {
        self.fields.get(key)
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Rule for ObjectRule {
    const KIND: &'static str = "object";

    fn check(&self, input: &Value) -> ValidationResult {
        let Value::Object(map) = input else {
            return ValidationResult::error(ValidationError::type_mismatch("object", input));
        };

        let mut output = Map::with_capacity(self.fields.len());
        let mut errors = Vec::new();

        for (key, validator) in &self.fields {
            let present = map.get(key.as_str());
            let result = validator.validate(present.unwrap_or(&Value::Null));

            if result.is_invalid() {
                errors.extend(result.nested_under(key).into_errors());
                continue;
            }

            // A skipped optional field keeps its input as given; a missing
            // one stays missing.
            match (result.into_value(), present) {
                (Some(value), _) => {
                    output.insert(key.as_str().to_owned(), value);
                }
                (None, Some(original)) => {
                    output.insert(key.as_str().to_owned(), original.clone());
                }
                (None, None) => {}
            }
        }

        tracing::trace!(
            fields = self.fields.len(),
            errors = errors.len(),
            "object validated"
        );

        if errors.is_empty() {
            ValidationResult::success(Value::Object(output))
        } else {
            ValidationResult::failure(errors)
        }
    }
}

impl Validator<ObjectRule> {
    /// Declares one more field. Declaring an existing key replaces its
    /// validator.
    #[must_use = "builder methods must be chained or built"]
    pub fn field(self, key: impl Into<FieldKey>, validator: impl Into<SharedValidator>) -> Self {
        let (key, validator) = (key.into(), validator.into());
        self.map_rule(|mut rule| {
            rule.fields.insert(key, validator);
            rule
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Validate, ValidateExt};
    use crate::schema::{number, object, string};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn person() -> ObjectValidator {
        object(crate::fields! {
            "name" => string().min_length(2),
            "age" => number().integer().min(0),
        })
    }

    #[test]
    fn test_valid_object_returns_declared_fields() {
        let input = Value::from(json!({"name": "Ada", "age": 36, "extra": true}));
        let result = person().validate(&input);
        assert_eq!(
            result.into_value(),
            Some(Value::from(json!({"name": "Ada", "age": 36})))
        );
    }

    #[test]
    fn test_collects_every_field_error_in_declaration_order() {
        let input = Value::from(json!({"age": -1, "name": "A"}));
        let result = person().validate(&input);

        let paths: Vec<String> = result.errors().iter().map(|e| e.path.to_string()).collect();
        assert_eq!(paths, ["name", "age"]);
        assert_eq!(result.value(), None);
    }

    #[test]
    fn test_missing_required_field_is_validated_as_null() {
        let result = person().validate(&Value::from(json!({"name": "Ada"})));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].path, crate::path!["age"]);
        assert_eq!(result.errors()[0].message, "Expected number, got null");
    }

    #[test]
    fn test_missing_optional_field_is_omitted() {
        let validator = object(crate::fields! {
            "name" => string(),
            "nickname" => string().optional(),
        });
        let result = validator.validate(&Value::from(json!({"name": "Ada"})));
        assert_eq!(result.into_value(), Some(Value::from(json!({"name": "Ada"}))));
    }

    #[test]
    fn test_blank_optional_field_is_kept_as_given() {
        let validator = object(crate::fields! { "nickname" => string().optional().min_length(3) });
        let result = validator.validate(&Value::from(json!({"nickname": ""})));
        assert_eq!(result.into_value(), Some(Value::from(json!({"nickname": ""}))));
    }

    #[test]
    fn test_rejects_non_objects() {
        let result = person().validate(&Value::from(json!(["name", "age"])));
        assert_eq!(result.errors()[0].message, "Expected object, got array");
        assert!(result.errors()[0].is_root());
    }

    #[test]
    fn test_empty_schema_accepts_any_object() {
        let result = object(crate::fields! {}).validate(&Value::from(json!({"a": 1})));
        assert_eq!(result.into_value(), Some(Value::from(json!({}))));
    }

    #[test]
    fn test_field_builder_replaces_existing_key() {
        let validator = person().field("name", string().max_length(1));
        assert_eq!(validator.rule().len(), 2);
        assert_eq!(validator.rule().fields().next().map(|(k, _)| k.as_str()), Some("name"));

        let result = validator.validate(&Value::from(json!({"name": "Ada", "age": 1})));
        assert_eq!(result.errors()[0].code, "max_length");
    }

    #[test]
    fn test_object_message_does_not_touch_child_messages() {
        let validator = person().with_message("Bad person");

        let wrong_type = validator.validate(&Value::from("nope"));
        assert_eq!(wrong_type.errors()[0].message, "Bad person");

        let bad_field = validator.validate(&Value::from(json!({"name": "A", "age": 1})));
        assert_eq!(
            bad_field.errors()[0].message,
            "String must be at least 2 characters long"
        );
    }

    #[test]
    fn test_accepts_prebuilt_shared_validators() {
        let name = string().min_length(1).shared();
        let validator = object([("first", name.clone()), ("last", name)]);
        let result = validator.validate(&Value::from(json!({"first": "A", "last": ""})));
        assert_eq!(result.errors()[0].path, crate::path!["last"]);
    }
}
