//! Decoded response values and the body classification strategy.

use serde_json::Value;

/// How a successful response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseDecoding {
    /// Return structured JSON when the body is an object or array, raw text otherwise.
    #[default]
    Detect,
    /// Always return raw text. Used for the Pwned Passwords range API.
    PlainText,
}

/// Outcome of a request that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    /// Body parsed as a JSON object or array.
    Json(Value),
    /// Body returned verbatim.
    Text(String),
    /// The service answered 404; callers treat this as "nothing found".
    NotFound,
}

impl ApiResponse {
    /// Classifies a 2xx body according to `decoding`.
    ///
    /// JSON scalars (`42`, `"x"`, `true`) are not structured and stay text.
    #[must_use]
    pub fn from_body(body: String, decoding: ResponseDecoding) -> Self {
        if decoding == ResponseDecoding::PlainText {
            return Self::Text(body);
        }
        match serde_json::from_str::<Value>(&body) {
            Ok(value @ (Value::Object(_) | Value::Array(_))) => Self::Json(value),
            _ => Self::Text(body),
        }
    }

    /// Returns true for the 404 sentinel.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}
