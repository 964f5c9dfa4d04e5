//! Error types for validation failures
//!
//! [`ValidationError`] is one structured failure entry: where it happened
//! (a [`FieldPath`]), a stable machine-readable code, a human-readable
//! message and optional parameters. Validation failures are always returned
//! as data inside a [`ValidationResult`](crate::foundation::ValidationResult);
//! [`Error`] is only for callers that want to bubble a failure up with `?`.
//!
//! Codes and messages use `Cow<'static, str>` so the common static case does
//! not allocate.

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

use crate::foundation::{FieldPath, PathSegment, Value};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single validation failure.
///
/// # Examples
///
/// ```
/// use input_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "String must be at least 5 characters long")
///     .with_param("min", "5")
///     .with_param("actual", "3")
///     .nested_under("name");
///
/// assert_eq!(error.param("min"), Some("5"));
/// assert_eq!(error.to_string(), "name: String must be at least 5 characters long");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Location of the offending value, relative to the validated root.
    pub path: FieldPath,

    /// Error code for programmatic handling.
    ///
    /// Examples: "type_mismatch", "min_length", "invalid_date"
    pub code: Cow<'static, str>,

    /// Human-readable message in English.
    pub message: Cow<'static, str>,

    /// Ordered key-value parameters (typically 0-3).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates an error at the root path.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            path: FieldPath::root(),
            code: code.into(),
            message: message.into(),
            params: Vec::new(),
        }
    }

    /// Adds a parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code, path and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Re-roots this error one level down: `segment` becomes the first path
    /// segment.
    #[must_use = "nested_under returns a new error"]
    pub fn nested_under(mut self, segment: impl Into<PathSegment>) -> Self {
        self.path = self.path.prepend(segment);
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns true if this error was raised by the validator at the root of
    /// the path rather than by a nested child.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.path.is_root()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "root: {}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "type_mismatch" error for `actual`.
    pub fn type_mismatch(expected: &'static str, actual: &Value) -> Self {
        Self::new(
            "type_mismatch",
            format!("Expected {expected}, got {}", actual.type_name()),
        )
        .with_param("expected", expected)
        .with_param("actual", actual.type_name())
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new(
            "min_length",
            format!("String must be at least {min} characters long"),
        )
        .with_param("min", min.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new(
            "max_length",
            format!("String must be at most {max} characters long"),
        )
        .with_param("max", max.to_string())
        .with_param("actual", actual.to_string())
    }

    /// Creates a "min" error for an inclusive lower bound.
    pub fn below_min(min: impl fmt::Display, actual: &Value) -> Self {
        Self::new("min", format!("Number must be at least {min}"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max" error for an inclusive upper bound.
    pub fn above_max(max: impl fmt::Display, actual: &Value) -> Self {
        Self::new("max", format!("Number must be at most {max}"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "min_items" error.
    pub fn min_items(min: usize, actual: usize) -> Self {
        Self::new("min_items", format!("Array must have at least {min} items"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_items" error.
    pub fn max_items(max: usize, actual: usize) -> Self {
        Self::new("max_items", format!("Array must have at most {max} items"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// CRATE ERROR
// ============================================================================

/// Errors surfaced through `Result` by this crate.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A string pattern could not be compiled.
    #[error("invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The pattern source as given to the builder.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// Validation finished with one or more failures.
    #[error("{}", summarize(.0))]
    Invalid(Vec<ValidationError>),
}

impl Error {
    /// The validation failures, if this is [`Error::Invalid`].
    #[must_use]
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Error::Invalid(errors) => errors,
            Error::InvalidPattern { .. } => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    let mut out = format!("validation failed with {} error(s)", errors.len());
    for error in errors {
        out.push_str("\n  - ");
        out.push_str(&error.to_string());
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
