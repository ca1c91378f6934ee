//! Error definitions

use thiserror::Error;

/// Integrated error
/// Public APIs of this crate return this error
/// Use as `SentimientoResult<T>` = `Result<T, SentimientoError>`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SentimientoError {
  /// The model selector does not name a supported backend
  #[error("unsupported sentiment model: {model} (valid values: vader, textblob)")]
  UnsupportedModel {
    /// Selector as received (before case folding)
    model: String,
  },
}

impl SentimientoError {
  /// Creates an unsupported model error
  #[must_use]
  pub fn unsupported_model(model: impl Into<String>) -> Self {
    Self::UnsupportedModel {
      model: model.into(),
    }
  }
}

/// Standard Result type alias of the sentimiento crate
pub type SentimientoResult<T> = Result<T, SentimientoError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unsupported_model_message_names_selector() {
    let err = SentimientoError::unsupported_model("Bogus");
    assert_eq!(
      err,
      SentimientoError::UnsupportedModel {
        model: "Bogus".to_string()
      }
    );
    assert!(err.to_string().contains("Bogus"));
  }
}
