use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The current value of a single form input.
///
/// Text inputs hold whatever the user typed, select inputs backed by a boolean hold a
/// `Flag`, and date pickers hold a `Date`. Deserialising from JSON yields `Flag` for
/// booleans and `Text` for strings; dates arrive as `YYYY-MM-DD` text and are read
/// back through [`FieldValue::as_date`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }

    /// Whether the user has entered or selected something.
    pub fn is_present(&self) -> bool {
        match self {
            FieldValue::Text(text) => !text.is_empty(),
            FieldValue::Date(_) | FieldValue::Flag(_) => true,
        }
    }

    /// Text content, or an empty string for non-text values.
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(text) => text.as_str(),
            _ => "",
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::Date(date) => Some(*date),
            FieldValue::Text(text) => NaiveDate::parse_from_str(text, DATE_FORMAT).ok(),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            FieldValue::Text(text) => text.parse().ok(),
            FieldValue::Date(_) => None,
        }
    }

    /// Length in characters; zero for non-text values.
    pub fn char_count(&self) -> usize {
        self.as_str().chars().count()
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::empty()
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(date: NaiveDate) -> Self {
        FieldValue::Date(date)
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}
