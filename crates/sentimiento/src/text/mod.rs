//! text module
pub mod normalizer;

/// Re-export
pub use normalizer::{clean_optional, clean_text};
