//! Config loading from environment variables

use super::constants::{DEFAULT_BIND_ADDR, MAX_TEXT_LENGTH};
use crate::errors::ApiError;

/// Environment variable holding the bind address
pub const ENV_BIND_ADDR: &str = "SENTIMIENTO_API_BIND_ADDR";

/// Environment variable holding the maximum text length in bytes
pub const ENV_MAX_TEXT_LENGTH: &str = "SENTIMIENTO_MAX_TEXT_LENGTH";

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "127.0.0.1:5000")
  pub bind_addr: String,
  /// Maximum accepted text length (bytes)
  pub max_text_length: usize,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      bind_addr: DEFAULT_BIND_ADDR.to_string(),
      max_text_length: MAX_TEXT_LENGTH,
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// Unset keys fall back to the defaults.
  ///
  /// # Errors
  /// Returns an error if `SENTIMIENTO_MAX_TEXT_LENGTH` is not a positive integer
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::errors::Result<Self> {
    let bind_addr = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let max_text_length = match lookup(ENV_MAX_TEXT_LENGTH) {
      Some(raw) => parse_max_text_length(&raw)?,
      None => MAX_TEXT_LENGTH,
    };

    Ok(Self {
      bind_addr,
      max_text_length,
    })
  }
}

fn parse_max_text_length(raw: &str) -> crate::errors::Result<usize> {
  match raw.trim().parse::<usize>() {
    Ok(0) => Err(ApiError::config(format!(
      "{ENV_MAX_TEXT_LENGTH} must be greater than zero"
    ))),
    Ok(value) => Ok(value),
    Err(e) => Err(ApiError::config(format!(
      "{ENV_MAX_TEXT_LENGTH} is not a valid integer: {raw} ({e})"
    ))),
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key: &str| map.get(key).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let config = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.max_text_length, MAX_TEXT_LENGTH);
  }

  #[test]
  fn values_from_lookup() {
    let config = Config::from_lookup(lookup_from(&[
      (ENV_BIND_ADDR, "0.0.0.0:8080"),
      (ENV_MAX_TEXT_LENGTH, " 2048 "),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.max_text_length, 2048);
  }

  #[test]
  fn invalid_max_text_length() {
    let err = Config::from_lookup(lookup_from(&[(ENV_MAX_TEXT_LENGTH, "lots")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn zero_max_text_length() {
    assert!(Config::from_lookup(lookup_from(&[(ENV_MAX_TEXT_LENGTH, "0")])).is_err());
  }

  #[test]
  fn config_from_env_defaults() {
    // Note: remove_var became unsafe in Rust 2024, so not used here
    // If environment variable is set, it's that value, otherwise default value
    if let Ok(config) = Config::from_env() {
      assert!(!config.bind_addr.is_empty());
      assert!(config.max_text_length > 0);
    }
  }
}
