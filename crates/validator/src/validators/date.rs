//! Date validator
//!
//! Accepts native dates, date-times and date strings in a handful of common
//! layouts. Whatever the input representation, a valid result carries the
//! calendar date as [`Value::Date`].

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::foundation::{Rule, ValidationError, ValidationResult, Validator, Value};

/// Date validator.
pub type DateValidator = Validator<DateRule>;

/// Constraints of a [`DateValidator`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRule {
    /// Exclusive lower bound.
    pub after: Option<NaiveDate>,
    /// Exclusive upper bound.
    pub before: Option<NaiveDate>,
}

const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%B %d, %Y",
    "%d %B %Y",
];

/// Parses `text` as a calendar date.
///
/// Date-times keep the date as written, in their own offset. Returns `None`
/// for anything that is not one of the supported layouts or names a day that
/// does not exist.
///
/// ```
/// use chrono::NaiveDate;
/// use input_validator::validators::date::parse_date;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 15);
/// assert_eq!(parse_date("2024-01-15"), expected);
/// assert_eq!(parse_date("January 15, 2024"), expected);
/// assert_eq!(parse_date("2024-02-30"), None);
/// ```
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.date_naive());
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}

impl Rule for DateRule {
    const KIND: &'static str = "date";

    fn check(&self, input: &Value) -> ValidationResult {
        let date = match input {
            Value::Date(date) => *date,
            Value::DateTime(dt) => dt.date_naive(),
            Value::String(text) => match parse_date(text) {
                Some(date) => date,
                None => {
                    return ValidationResult::error(ValidationError::new(
                        "invalid_date",
                        "Invalid date format",
                    ));
                }
            },
            _ => return ValidationResult::error(ValidationError::type_mismatch("date", input)),
        };

        if let Some(after) = self.after.filter(|&after| date <= after) {
            return ValidationResult::error(
                ValidationError::new("date_after", format!("Date must be after {after}"))
                    .with_param("after", after.to_string())
                    .with_param("actual", date.to_string()),
            );
        }

        if let Some(before) = self.before.filter(|&before| date >= before) {
            return ValidationResult::error(
                ValidationError::new("date_before", format!("Date must be before {before}"))
                    .with_param("before", before.to_string())
                    .with_param("actual", date.to_string()),
            );
        }

        ValidationResult::success(Value::Date(date))
    }
}

impl Validator<DateRule> {
    /// Requires a date strictly later than `date`.
    #[must_use = "builder methods must be chained or built"]
    pub fn after(self, date: NaiveDate) -> Self {
        self.map_rule(|rule| DateRule {
            after: Some(date),
            ..rule
        })
    }

    /// Requires a date strictly earlier than `date`.
    #[must_use = "builder methods must be chained or built"]
    pub fn before(self, date: NaiveDate) -> Self {
        self.map_rule(|rule| DateRule {
            before: Some(date),
            ..rule
        })
    }
}
