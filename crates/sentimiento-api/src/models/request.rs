//! Request model definition

use serde::Deserialize;
use serde_json::Value;

use crate::errors::{ApiError, Result};

/// Sentiment analysis request
///
/// Both fields are kept as raw JSON values so that a missing or mistyped
/// field is reported as a validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SentimentRequest {
  /// Text to analyze
  #[serde(default)]
  pub text: Option<Value>,
  /// Model selector ("vader" | "textblob", any case). Defaults to "vader".
  #[serde(default)]
  pub model: Option<Value>,
}

/// `text` field that passed the presence check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RequestText<'a> {
  /// A JSON string
  Str(&'a str),
  /// Any other JSON value; it is scored as empty text
  Other(&'a Value),
}

impl RequestText<'_> {
  /// Text handed to the scorer (`""` for non-string values)
  pub fn as_str(&self) -> &str {
    match self {
      RequestText::Str(s) => *s,
      RequestText::Other(_) => "",
    }
  }

  /// Text echoed back in `texto`: the string itself, or the JSON rendering of other values
  pub fn echo(&self) -> String {
    match self {
      RequestText::Str(s) => (*s).to_string(),
      RequestText::Other(value) => value.to_string(),
    }
  }
}

impl SentimentRequest {
  /// Creates a request with text and an optional model selector
  pub fn new(text: impl Into<String>, model: Option<&str>) -> Self {
    Self {
      text: Some(Value::String(text.into())),
      model: model.map(Value::from),
    }
  }

  /// Text, if present
  ///
  /// `null`, `""`, `false`, `0`, `[]` and `{}` all count as no text.
  pub fn text(&self) -> Option<RequestText<'_>> {
    match self.text.as_ref()? {
      Value::Null | Value::Bool(false) => None,
      Value::String(s) if s.is_empty() => None,
      Value::Array(items) if items.is_empty() => None,
      Value::Object(fields) if fields.is_empty() => None,
      Value::Number(n) if n.as_f64() == Some(0.0) => None,
      Value::String(s) => Some(RequestText::Str(s.as_str())),
      other => Some(RequestText::Other(other)),
    }
  }

  /// Model selector, if given
  ///
  /// # Errors
  /// `ApiError::InvalidModel` when the selector is not a JSON string
  pub fn model(&self) -> Result<Option<&str>> {
    match &self.model {
      None | Some(Value::Null) => Ok(None),
      Some(Value::String(selector)) => Ok(Some(selector.as_str())),
      Some(other) => Err(ApiError::invalid_model(other.to_string())),
    }
  }
}
