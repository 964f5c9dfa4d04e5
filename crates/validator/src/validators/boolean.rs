//! Boolean validator

use crate::foundation::{Rule, ValidationError, ValidationResult, Validator, Value};

/// Boolean validator.
pub type BooleanValidator = Validator<BooleanRule>;

/// Accepts exactly `true` and `false`. Truthy or falsy stand-ins such as
/// `1`, `0`, `""` or `[]` are type mismatches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanRule;

impl Rule for BooleanRule {
    const KIND: &'static str = "boolean";

    fn check(&self, input: &Value) -> ValidationResult {
        match input {
            Value::Bool(_) => ValidationResult::success(input.clone()),
            _ => ValidationResult::error(ValidationError::type_mismatch("boolean", input)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Map, Validate};
    use crate::schema::boolean;
    use rstest::rstest;

    #[test]
    fn test_accepts_literals() {
        assert_eq!(
            boolean().validate(&Value::Bool(true)).into_value(),
            Some(Value::Bool(true))
        );
        assert_eq!(
            boolean().validate(&Value::Bool(false)).into_value(),
            Some(Value::Bool(false))
        );
    }

    #[rstest]
    #[case(Value::Int(1))]
    #[case(Value::Int(0))]
    #[case(Value::from(""))]
    #[case(Value::from("true"))]
    #[case(Value::Null)]
    #[case(Value::Array(vec![]))]
    #[case(Value::Object(Map::new()))]
    fn test_rejects_truthy_and_falsy_stand_ins(#[case] input: Value) {
        let result = boolean().validate(&input);
        assert!(result.is_invalid());
        assert_eq!(
            result.errors()[0].message,
            format!("Expected boolean, got {}", input.type_name())
        );
    }
}
