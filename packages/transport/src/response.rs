use serde_json::Value;

/// A response the backend answered with a success status.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn new(status: u16, body: Value) -> Self {
        ApiResponse { status, body }
    }

    /// The `message` field of a JSON object body, or the body itself when it is text.
    pub fn message(&self) -> Option<&str> {
        match &self.body {
            Value::String(text) => Some(text.as_str()),
            body => body.get("message").and_then(Value::as_str),
        }
    }

    /// A top-level field of a JSON object body rendered as text.
    pub fn text_field(&self, name: &str) -> Option<String> {
        match self.body.get(name)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }
}

/// Turn a raw response body into JSON, keeping non-JSON text as a string.
pub(crate) fn parse_body(text: String) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    serde_json::from_str(&text).unwrap_or(Value::String(text))
}
