use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Per-field outcome of one validation pass.
///
/// Every registered field has an entry: `None` when it passed, `Some(message)` when a
/// check failed. Validity is derived from the entries and never stored separately.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<String, Option<String>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, field: &str, error: Option<String>) {
        self.errors.insert(field.to_string(), error);
    }

    /// True iff no field carries an error.
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(Option::is_none)
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Error for `field`, or `None` when it passed or was not validated.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).and_then(|e| e.as_deref())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.errors
            .iter()
            .map(|(field, error)| (field.as_str(), error.as_deref()))
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.fields()
            .filter(|(_, error)| error.is_some())
            .map(|(field, _)| field)
    }

    pub fn error_count(&self) -> usize {
        self.errors.values().filter(|e| e.is_some()).count()
    }

    /// Comma-separated list of all error messages.
    pub fn to_message(&self) -> String {
        self.errors
            .values()
            .flatten()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ")
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        ValidationResult {
            errors: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_message())
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}
