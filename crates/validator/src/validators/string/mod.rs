//! String validator
//!
//! Checks, in order and stopping at the first failure: the input is a
//! string, its length is within bounds, and it matches the pattern. Length
//! is measured in Unicode scalar values (chars), not bytes.

pub mod pattern;

pub use pattern::Pattern;

use crate::foundation::{Error, Rule, ValidationError, ValidationResult, Validator, Value};

/// String validator.
pub type StringValidator = Validator<StringRule>;

/// Constraints of a [`StringValidator`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StringRule {
    /// Minimum length in chars (inclusive).
    pub min_length: Option<usize>,
    /// Maximum length in chars (inclusive).
    pub max_length: Option<usize>,
    /// Pattern the whole string must match.
    pub pattern: Option<Pattern>,
}

impl Rule for StringRule {
    const KIND: &'static str = "string";

    fn check(&self, input: &Value) -> ValidationResult {
        let Value::String(text) = input else {
            return ValidationResult::error(ValidationError::type_mismatch("string", input));
        };

        if self.min_length.is_some() || self.max_length.is_some() {
            let length = text.chars().count();
            if let Some(min) = self.min_length.filter(|&min| length < min) {
                return ValidationResult::error(ValidationError::min_length(min, length));
            }
            if let Some(max) = self.max_length.filter(|&max| length > max) {
                return ValidationResult::error(ValidationError::max_length(max, length));
            }
        }

        if let Some(pattern) = &self.pattern {
            match pattern.matches(text) {
                Ok(true) => {}
                Ok(false) => {
                    return ValidationResult::error(
                        ValidationError::new("pattern", "String does not match required pattern")
                            .with_param("pattern", pattern.source().to_owned()),
                    );
                }
                Err(reason) => {
                    return ValidationResult::error(
                        ValidationError::new("invalid_pattern", format!("Invalid pattern: {reason}"))
                            .with_param("pattern", pattern.source().to_owned()),
                    );
                }
            }
        }

        ValidationResult::success(input.clone())
    }
}

impl Validator<StringRule> {
    /// Requires at least `length` chars.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(self, length: usize) -> Self {
        self.map_rule(|rule| StringRule {
            min_length: Some(length),
            ..rule
        })
    }

    /// Allows at most `length` chars.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(self, length: usize) -> Self {
        self.map_rule(|rule| StringRule {
            max_length: Some(length),
            ..rule
        })
    }

    /// Requires the whole string to match the regular expression `source`.
    ///
    /// An invalid expression does not panic; every validated string is then
    /// reported with an `invalid_pattern` error. Use
    /// [`try_pattern`](Self::try_pattern) to catch it at build time instead.
    #[must_use = "builder methods must be chained or built"]
    pub fn pattern(self, source: impl Into<String>) -> Self {
        let pattern = Pattern::new(source);
        self.map_rule(|rule| StringRule {
            pattern: Some(pattern),
            ..rule
        })
    }

    /// Like [`pattern`](Self::pattern), but fails if `source` does not
    /// compile.
    pub fn try_pattern(self, source: impl Into<String>) -> Result<Self, Error> {
        let pattern = Pattern::try_new(source)?;
        Ok(self.map_rule(|rule| StringRule {
            pattern: Some(pattern),
            ..rule
        }))
    }
}
