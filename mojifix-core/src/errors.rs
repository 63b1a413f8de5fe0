//! errors.rs - Custom error types for the mojifix-core library.
//!
//! Callers see a single failure kind for anything that goes wrong inside the
//! pipeline (`SanitizationFailed`), plus `InvalidInput` for arguments that are
//! not usable text.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// Result alias used by the public API of `mojifix-core`.
pub type Result<T> = std::result::Result<T, MojifixError>;

/// All error types surfaced by the `mojifix-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MojifixError {
    /// The argument was not text (e.g. bytes that are not UTF-8) or was a
    /// value no operation can accept, such as an empty mapping source.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An internal pipeline stage failed. The original cause is kept as the
    /// error source.
    #[error("Text sanitization failed during {stage}: {source}")]
    SanitizationFailed {
        stage: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid mapping configuration: {0}")]
    Config(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

impl MojifixError {
    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Wraps a stage failure, keeping `InvalidInput` errors as they are.
    pub fn stage_failure(stage: &'static str, source: anyhow::Error) -> Self {
        match source.downcast::<MojifixError>() {
            Ok(MojifixError::InvalidInput(message)) => Self::InvalidInput(message),
            Ok(other) => Self::SanitizationFailed {
                stage,
                source: anyhow::Error::new(other),
            },
            Err(source) => Self::SanitizationFailed { stage, source },
        }
    }

    pub const fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    pub const fn is_sanitization_failure(&self) -> bool {
        matches!(self, Self::SanitizationFailed { .. })
    }
}
