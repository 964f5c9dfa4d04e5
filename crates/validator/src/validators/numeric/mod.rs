//! Number validator
//!
//! Accepts integers and finite floats. Bounds are inclusive. An integer input
//! is compared with an integer bound exactly and with a float bound without
//! going through `f64`, so precision holds past 2^53. The validated value
//! keeps its original integer or float kind.

use std::cmp::Ordering;
use std::fmt;

use crate::foundation::{Rule, ValidationError, ValidationResult, Validator, Value};

/// Number validator.
pub type NumberValidator = Validator<NumberRule>;

/// An inclusive bound of a [`NumberRule`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberBound {
    /// Whole-number bound, compared exactly with integer input.
    Int(i64),
    /// Floating-point bound.
    Float(f64),
}

impl NumberBound {
    fn of(input: &Value) -> Option<Self> {
        match input {
            Value::Int(n) => Some(Self::Int(*n)),
            Value::Float(f) if f.is_finite() => Some(Self::Float(*f)),
            _ => None,
        }
    }

    fn compare(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (Self::Int(a), Self::Float(b)) => int_cmp_float(a, b),
            (Self::Float(a), Self::Int(b)) => int_cmp_float(b, a).map(Ordering::reverse),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(&b),
        }
    }
}

// 2^63, exactly representable and above every i64.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

fn int_cmp_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_LIMIT {
        return Some(Ordering::Less);
    }
    if float < -I64_LIMIT {
        return Some(Ordering::Greater);
    }
    let floor = float.floor();
    let tail = if float > floor { Ordering::Less } else { Ordering::Equal };
    Some(int.cmp(&(floor as i64)).then(tail))
}

impl fmt::Display for NumberBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
        }
    }
}

macro_rules! bound_from {
    ($variant:ident as $target:ty: $($source:ty),+) => {
        $(impl From<$source> for NumberBound {
            fn from(value: $source) -> Self {
                Self::$variant(<$target>::from(value))
            }
        })+
    };
}

bound_from!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
bound_from!(Float as f64: f32, f64);

/// Constraints of a [`NumberValidator`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberRule {
    /// Lower bound (inclusive).
    pub min: Option<NumberBound>,
    /// Upper bound (inclusive).
    pub max: Option<NumberBound>,
    /// Reject numbers with a fractional part.
    pub integer: bool,
}

fn is_whole(value: &Value) -> bool {
    match value {
        Value::Int(_) => true,
        Value::Float(f) => f.fract() == 0.0,
        _ => false,
    }
}

impl Rule for NumberRule {
    const KIND: &'static str = "number";

    fn check(&self, input: &Value) -> ValidationResult {
        let Some(number) = NumberBound::of(input) else {
            return ValidationResult::error(ValidationError::type_mismatch("number", input));
        };

        if self.integer && !is_whole(input) {
            return ValidationResult::error(
                ValidationError::new("integer", format!("Expected integer, got {input}"))
                    .with_param("actual", input.to_string()),
            );
        }

        if let Some(min) = self.min.filter(|&min| number.compare(min) == Some(Ordering::Less)) {
            return ValidationResult::error(ValidationError::below_min(min, input));
        }

        if let Some(max) = self.max.filter(|&max| number.compare(max) == Some(Ordering::Greater)) {
            return ValidationResult::error(ValidationError::above_max(max, input));
        }

        ValidationResult::success(input.clone())
    }
}

impl Validator<NumberRule> {
    /// Requires the number to be at least `value`.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(self, value: impl Into<NumberBound>) -> Self {
        let min = value.into();
        self.map_rule(|rule| NumberRule {
            min: Some(min),
            ..rule
        })
    }

    /// Requires the number to be at most `value`.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(self, value: impl Into<NumberBound>) -> Self {
        let max = value.into();
        self.map_rule(|rule| NumberRule {
            max: Some(max),
            ..rule
        })
    }

    /// Requires a whole number. `5` and `5.0` pass, `5.5` does not.
    #[must_use = "builder methods must be chained or built"]
    pub fn integer(self) -> Self {
        self.map_rule(|rule| NumberRule {
            integer: true,
            ..rule
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use crate::schema::number;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Int(42))]
    #[case(Value::Float(3.25))]
    #[case(Value::Int(0))]
    #[case(Value::Int(-42))]
    #[case(Value::Float(-3.25))]
    fn test_accepts_numbers(#[case] input: Value) {
        let result = number().validate(&input);
        assert!(result.is_valid());
        assert_eq!(result.value(), Some(&input));
    }

    #[rstest]
    #[case(Value::from("42"), "string")]
    #[case(Value::Null, "null")]
    #[case(Value::Bool(false), "boolean")]
    #[case(Value::Float(f64::NAN), "float")]
    #[case(Value::Float(f64::INFINITY), "float")]
    fn test_rejects_non_numbers(#[case] input: Value, #[case] actual: &str) {
        let result = number().validate(&input);
        assert_eq!(result.errors()[0].code, "type_mismatch");
        assert_eq!(
            result.errors()[0].message,
            format!("Expected number, got {actual}")
        );
    }

    #[rstest]
    #[case(0.0, true)]
    #[case(100.0, true)]
    #[case(50.5, true)]
    #[case(-0.0001, false)]
    #[case(100.0001, false)]
    fn test_bounds_are_inclusive(#[case] input: f64, #[case] valid: bool) {
        let validator = number().min(0).max(100);
        assert_eq!(validator.validate(&Value::Float(input)).is_valid(), valid);
    }

    #[test]
    fn test_integer_bounds_at_edges() {
        let validator = number().min(0).max(100);
        assert!(validator.validate(&Value::Int(0)).is_valid());
        assert!(validator.validate(&Value::Int(100)).is_valid());
        assert!(validator.validate(&Value::Int(-1)).is_invalid());
        assert!(validator.validate(&Value::Int(101)).is_invalid());
    }

    #[test]
    fn test_bound_messages() {
        let low = number().min(10).validate(&Value::Int(5));
        assert_eq!(low.errors()[0].message, "Number must be at least 10");
        assert_eq!(low.errors()[0].code, "min");

        let high = number().max(100).validate(&Value::Int(150));
        assert_eq!(high.errors()[0].message, "Number must be at most 100");
        assert_eq!(high.errors()[0].code, "max");
    }

    #[test]
    fn test_integer_rejects_fractions() {
        let validator = number().integer();
        assert!(validator.validate(&Value::Int(42)).is_valid());
        assert!(validator.validate(&Value::Float(42.0)).is_valid());

        let result = validator.validate(&Value::Float(3.25));
        assert_eq!(result.errors()[0].code, "integer");
        assert_eq!(result.errors()[0].message, "Expected integer, got 3.25");
    }

    #[test]
    fn test_integer_check_runs_before_bounds() {
        let validator = number().integer().min(1).max(10);
        assert!(validator.validate(&Value::Int(1)).is_valid());
        assert!(validator.validate(&Value::Int(10)).is_valid());
        assert!(validator.validate(&Value::Int(0)).is_invalid());
        assert!(validator.validate(&Value::Int(11)).is_invalid());

        let result = validator.validate(&Value::Float(50.5));
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].code, "integer");
    }

    #[test]
    fn test_integer_bounds_are_exact_past_f64_precision() {
        let max = number().max(9_007_199_254_740_992.0);
        assert!(max.validate(&Value::Int(9_007_199_254_740_992)).is_valid());
        assert!(max.validate(&Value::Int(9_007_199_254_740_993)).is_invalid());

        let max = number().max(9_007_199_254_740_992_i64);
        assert!(max.validate(&Value::Int(9_007_199_254_740_993)).is_invalid());

        let min = number().min(9_007_199_254_740_993_i64);
        assert!(min.validate(&Value::Int(9_007_199_254_740_992)).is_invalid());
        assert!(min.validate(&Value::Int(9_007_199_254_740_993)).is_valid());
    }

    #[test]
    fn test_i64_extremes_as_bounds() {
        let validator = number().min(i64::MIN).max(i64::MAX);
        assert!(validator.validate(&Value::Int(i64::MIN)).is_valid());
        assert!(validator.validate(&Value::Int(i64::MAX)).is_valid());

        let high = number().max(i64::MAX - 1).validate(&Value::Int(i64::MAX));
        assert_eq!(high.errors()[0].param("max"), Some("9223372036854775806"));
    }

    #[rstest]
    #[case(Value::Int(5), true)]
    #[case(Value::Int(6), false)]
    #[case(Value::Int(-3), false)]
    #[case(Value::Int(-2), true)]
    #[case(Value::Float(5.5), true)]
    #[case(Value::Float(5.6), false)]
    fn test_fractional_bounds_on_integers(#[case] input: Value, #[case] valid: bool) {
        let validator = number().min(-2.5).max(5.5);
        assert_eq!(validator.validate(&input).is_valid(), valid);
    }

    #[test]
    fn test_float_input_against_integer_bound() {
        let validator = number().min(1).max(i64::MAX);
        assert!(validator.validate(&Value::Float(0.5)).is_invalid());
        assert!(validator.validate(&Value::Float(1.0)).is_valid());
        assert!(validator.validate(&Value::Float(1.0e19)).is_invalid());
    }

    #[test]
    fn test_integers_keep_their_kind() {
        let result = number().validate(&Value::Int(7));
        assert_eq!(result.into_value(), Some(Value::Int(7)));
    }
}
