use std::fmt;

use models::{FieldValue, FormValues};
use regex::Regex;

type Predicate = Box<dyn Fn(&FieldValue, &FormValues) -> bool + Send + Sync>;

struct Check {
    predicate: Predicate,
    message: String,
}

/// Ordered predicate/message pairs for a single field.
///
/// Checks run top to bottom and the first failing check decides the field's error,
/// so the order in which they are added matters:
///
/// ```ignore
/// let rule = Rule::new()
///     .required("Missing email.")
///     .max_length(32, "Email too long.")
///     .pattern(EMAIL_PATTERN.clone(), "Incorrect email format.");
/// ```
#[derive(Default)]
pub struct Rule {
    checks: Vec<Check>,
}

impl Rule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check on the field's own value.
    pub fn check<F>(self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue) -> bool + Send + Sync + 'static,
    {
        self.check_with(move |value, _| predicate(value), message)
    }

    /// Add a check that may also read other fields of the same snapshot.
    pub fn check_with<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&FieldValue, &FormValues) -> bool + Send + Sync + 'static,
    {
        self.checks.push(Check {
            predicate: Box::new(predicate),
            message: message.into(),
        });
        self
    }

    /// Require a value to be entered or selected.
    pub fn required(self, message: impl Into<String>) -> Self {
        self.check(FieldValue::is_present, message)
    }

    pub fn max_length(self, max: usize, message: impl Into<String>) -> Self {
        self.check(move |value| value.char_count() <= max, message)
    }

    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.check(move |value| value.char_count() >= min, message)
    }

    /// Require the text to match `pattern` in full. Anchor the pattern yourself.
    pub fn pattern(self, pattern: Regex, message: impl Into<String>) -> Self {
        self.check(move |value| pattern.is_match(value.as_str()), message)
    }

    /// Require the text to be one of `options`.
    pub fn one_of(self, options: &[&str], message: impl Into<String>) -> Self {
        let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        self.check(
            move |value| options.iter().any(|o| o == value.as_str()),
            message,
        )
    }

    /// Require the value to equal the value of another field.
    pub fn matches_field(self, other: impl Into<String>, message: impl Into<String>) -> Self {
        let other = other.into();
        self.check_with(move |value, values| *value == values.value(&other), message)
    }

    /// Run the checks in order and return the message of the first one that fails.
    pub fn evaluate(&self, value: &FieldValue, values: &FormValues) -> Option<String> {
        self.checks
            .iter()
            .find(|check| !(check.predicate)(value, values))
            .map(|check| check.message.clone())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|check| check.message.as_str())
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.messages()).finish()
    }
}
