//! Error types for wellpulse
//!
//! The analytics core itself never errors: malformed values degrade to safe
//! defaults. These errors only surface at the input boundary (parsing raw
//! record files) and when encoding payloads.

use thiserror::Error;

/// Errors that can occur at the engine's boundaries
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to parse records: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid date: {0}")]
    DateParseError(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}
