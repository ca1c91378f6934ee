//! API configuration constants

/// Default maximum input text length (bytes)
///
/// Texts above this are rejected before scoring.
pub const MAX_TEXT_LENGTH: usize = 1_000_000;

/// Default bind address
///
/// Same port the browser dashboard expects for a local server.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Message returned by `GET /`
pub const SERVICE_MESSAGE: &str = "API de Análisis de Sentimiento funcionando 👋";

