//! Core traits for the validation system
//!
//! Two traits split the work:
//!
//! - [`Rule`] is the variant-specific check (type test plus constraints) that
//!   every concrete validator kind implements.
//! - [`Validate`] is the object-safe evaluation entry point. It is
//!   implemented once, by [`Validator<R>`], which adds the behaviour shared by
//!   every kind: optional short-circuiting and custom messages.
//!
//! Validator trees hold their children as [`SharedValidator`] trait objects,
//! so objects and arrays can mix any kinds, including user-defined rules.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{ValidationResult, Value};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// Anything that can check a [`Value`] and report a [`ValidationResult`].
///
/// Implementations must be pure: the same input always yields the same
/// result, and validating never mutates the validator. That is what makes a
/// single tree safe to share across threads.
pub trait Validate: fmt::Debug + Send + Sync {
    /// Validates `input`.
    fn validate(&self, input: &Value) -> ValidationResult;

    /// Validates a `serde_json` value.
    fn validate_json(&self, input: &serde_json::Value) -> ValidationResult {
        self.validate(&Value::from(input))
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    fn validate(&self, input: &Value) -> ValidationResult {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    fn validate(&self, input: &Value) -> ValidationResult {
        (**self).validate(input)
    }
}

/// A type-erased, cheaply clonable validator.
pub type SharedValidator = Arc<dyn Validate>;

// ============================================================================
// VARIANT HOOK
// ============================================================================

/// The check a validator kind performs once optional handling is done.
///
/// `check` receives every non-blank input, and blank inputs too when the
/// validator is not optional. It reports failures of its own checks at the
/// root path; failures of nested children must already be re-rooted under the
/// key or index that led to them.
///
/// # Examples
///
/// ```
/// use input_validator::foundation::{
///     Rule, Validate, ValidationError, ValidationResult, Validator, Value,
/// };
///
/// #[derive(Debug, Clone)]
/// struct Even;
///
/// impl Rule for Even {
///     const KIND: &'static str = "even";
///
///     fn check(&self, input: &Value) -> ValidationResult {
///         match input {
///             Value::Int(n) if n % 2 == 0 => ValidationResult::success(input.clone()),
///             _ => ValidationResult::error(ValidationError::new("even", "Expected an even integer")),
///         }
///     }
/// }
///
/// let even = Validator::new(Even).optional();
/// assert!(even.validate(&Value::Int(4)).is_valid());
/// assert!(even.validate(&Value::Null).is_valid());
/// assert!(even.validate(&Value::Int(3)).is_invalid());
/// ```
pub trait Rule: fmt::Debug + Clone + Send + Sync {
    /// Short name of the kind, used in diagnostics.
    const KIND: &'static str;

    /// Performs the kind-specific validation.
    fn check(&self, input: &Value) -> ValidationResult;
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// A [`Rule`] plus the settings every validator kind shares.
///
/// Builder methods consume the validator and return the updated copy, so a
/// validator never changes after it has been handed out, and independent
/// settings can be applied in any order with the same outcome.
#[derive(Debug, Clone)]
pub struct Validator<R> {
    rule: R,
    optional: bool,
    message: Option<Cow<'static, str>>,
}

impl<R: Rule> Validator<R> {
    /// Wraps a rule. The validator starts required and without a custom
    /// message.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            optional: false,
            message: None,
        }
    }

    /// Accepts null and empty-string input as valid, skipping every other
    /// check. Nested validators keep their own optionality.
    #[must_use = "builder methods must be chained or built"]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Replaces the message of every failure this validator raises itself.
    /// Failures reported by nested validators keep their own messages.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The wrapped rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Whether blank input is accepted.
    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// The custom message, if set.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub(crate) fn map_rule(mut self, f: impl FnOnce(R) -> R) -> Self {
        self.rule = f(self.rule);
        self
    }

    fn apply_message(&self, result: ValidationResult) -> ValidationResult {
        let Some(message) = &self.message else {
            return result;
        };
        if result.is_valid() {
            return result;
        }
        let errors = result
            .into_errors()
            .into_iter()
            .map(|error| {
                if error.is_root() {
                    error.with_message(message.clone())
                } else {
                    error
                }
            })
            .collect();
        ValidationResult::failure(errors)
    }
}

impl<R: Rule + Default> Default for Validator<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: Rule> Validate for Validator<R> {
    fn validate(&self, input: &Value) -> ValidationResult {
        if self.optional && input.is_blank() {
            tracing::trace!(kind = R::KIND, "optional input is blank, skipping checks");
            return ValidationResult::skipped();
        }
        self.apply_message(self.rule.check(input))
    }
}

impl<R: Rule + 'static> From<Validator<R>> for SharedValidator {
    fn from(validator: Validator<R>) -> Self {
        Arc::new(validator)
    }
}

// ============================================================================
// VALIDATOR EXTENSION TRAIT
// ============================================================================

/// Extension methods available on every [`Validate`] implementation.
pub trait ValidateExt: Validate + Sized + 'static {
    /// Erases the concrete type so the validator can sit next to validators
    /// of other kinds, e.g. as an object field.
    fn shared(self) -> SharedValidator {
        Arc::new(self)
    }
}

impl<T: Validate + 'static> ValidateExt for T {}

// ============================================================================
// TESTS
// ============================================================================
