//! Array validator

use crate::foundation::{Rule, SharedValidator, ValidationError, ValidationResult, Validator, Value};

/// Array validator.
pub type ArrayValidator = Validator<ArrayRule>;

/// Item validator and size bounds of an [`ArrayValidator`].
#[derive(Debug, Clone)]
pub struct ArrayRule {
    /// Validator applied to every element.
    pub item: SharedValidator,
    /// Minimum number of elements (inclusive).
    pub min_items: Option<usize>,
    /// Maximum number of elements (inclusive).
    pub max_items: Option<usize>,
}

impl ArrayRule {
    /// Creates a rule without size bounds.
    pub fn new(item: impl Into<SharedValidator>) -> Self {
        Self {
            item: item.into(),
            min_items: None,
            max_items: None,
        }
    }
}

impl Rule for ArrayRule {
    const KIND: &'static str = "array";

    fn check(&self, input: &Value) -> ValidationResult {
        let Value::Array(items) = input else {
            return ValidationResult::error(ValidationError::type_mismatch("array", input));
        };

        let count = items.len();
        if let Some(min) = self.min_items.filter(|&min| count < min) {
            return ValidationResult::error(ValidationError::min_items(min, count));
        }
        if let Some(max) = self.max_items.filter(|&max| count > max) {
            return ValidationResult::error(ValidationError::max_items(max, count));
        }

        let mut values = Vec::with_capacity(count);
        let mut errors = Vec::new();

        for (index, item) in items.iter().enumerate() {
            let result = self.item.validate(item);
            if result.is_valid() {
                values.push(result.into_value().unwrap_or_else(|| item.clone()));
            } else {
                errors.extend(result.nested_under(index).into_errors());
            }
        }

        tracing::trace!(items = count, errors = errors.len(), "array validated");

        if errors.is_empty() {
            ValidationResult::success(Value::Array(values))
        } else {
            ValidationResult::failure(errors)
        }
    }
}

impl Validator<ArrayRule> {
    /// Requires at least `count` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_items(self, count: usize) -> Self {
        self.map_rule(|rule| ArrayRule {
            min_items: Some(count),
            ..rule
        })
    }

    /// Allows at most `count` elements.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_items(self, count: usize) -> Self {
        self.map_rule(|rule| ArrayRule {
            max_items: Some(count),
            ..rule
        })
    }
}
