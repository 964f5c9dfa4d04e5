//! Validation outcome record.

use serde::Serialize;

use crate::foundation::{Error, PathSegment, ValidationError, Value};

/// Outcome of one `validate` call.
///
/// A result is either valid, with an optional validated value and no errors,
/// or invalid, with no value and at least one error. The constructors are the
/// only way to build one, so the two halves cannot disagree.
///
/// # Examples
///
/// ```
/// use input_validator::prelude::*;
///
/// let result = string().min_length(10).validate(&"hi".into());
/// assert!(result.is_invalid());
/// assert!(result.value().is_none());
/// assert_eq!(result.errors()[0].code, "min_length");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    valid: bool,
    value: Option<Value>,
    errors: Vec<ValidationError>,
}

impl ValidationResult {
    /// A valid result carrying the validated value.
    #[must_use]
    pub fn success(value: Value) -> Self {
        Self {
            valid: true,
            value: Some(value),
            errors: Vec::new(),
        }
    }

    /// A valid result without a value: an optional validator saw a blank
    /// input.
    #[must_use]
    pub fn skipped() -> Self {
        Self {
            valid: true,
            value: None,
            errors: Vec::new(),
        }
    }

    /// An invalid result with a single error.
    #[must_use]
    pub fn error(error: ValidationError) -> Self {
        Self::failure(vec![error])
    }

    /// An invalid result.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty. An invalid result without errors is a bug
    /// in the validator that produced it, not a property of the input.
    #[must_use]
    pub fn failure(errors: Vec<ValidationError>) -> Self {
        assert!(
            !errors.is_empty(),
            "a failed validation result must carry at least one error"
        );
        Self {
            valid: false,
            value: None,
            errors,
        }
    }

    /// Returns true if validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns true if validation failed.
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        !self.valid
    }

    /// The validated value. `None` when invalid or when an optional
    /// validator skipped a blank input.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The errors, in the order they were found. Empty iff valid.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Consumes the result, returning the validated value.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        self.value
    }

    /// Consumes the result, returning its errors.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    /// Converts to a `Result` so failures can be propagated with `?`.
    ///
    /// A skipped optional input yields `Ok(Value::Null)`.
    pub fn into_result(self) -> Result<Value, Error> {
        if self.valid {
            Ok(self.value.unwrap_or(Value::Null))
        } else {
            Err(Error::Invalid(self.errors))
        }
    }

    /// Re-roots every error under `segment`. Valid results pass through.
    #[must_use = "nested_under returns a new result"]
    pub fn nested_under(self, segment: impl Into<PathSegment>) -> Self {
        if self.valid {
            return self;
        }
        let segment = segment.into();
        Self {
            errors: self
                .errors
                .into_iter()
                .map(|e| e.nested_under(segment.clone()))
                .collect(),
            ..self
        }
    }
}
