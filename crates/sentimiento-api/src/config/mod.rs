//! Config module

mod constants;
mod env;

pub use constants::{DEFAULT_BIND_ADDR, MAX_TEXT_LENGTH, SERVICE_MESSAGE};
pub use env::{Config, ENV_BIND_ADDR, ENV_MAX_TEXT_LENGTH};
