//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. Only the
//! explicit parsing surfaces (settings deserialization, opt-in rewriting)
//! return errors; translation handlers never fail — every guard there
//! degrades to a silent no-op, because optional telemetry must not break
//! the host.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the bridge.
#[derive(Error, Debug)]
pub enum Error {
    /// Input that was required to be a JSON object was something else.
    #[error("validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// Convenience constructors
impl Error {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
