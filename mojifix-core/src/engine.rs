// mojifix-core/src/engine.rs
//! Defines the traits behind each stage of the sanitization pipeline.
//!
//! [`TextSanitizer`](crate::sanitizer::TextSanitizer) only talks to its
//! components through these traits, so a host (or a test) can swap in its own
//! normalizer, mapper or validator while the stage order stays fixed.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

/// Unicode normalization and repair of known mojibake signatures.
pub trait Normalizer: Send + Sync {
    /// Replaces known corruption signatures with the characters they stand for.
    ///
    /// Runs before [`normalize`](Normalizer::normalize): the signatures are
    /// literal artifacts, and normalizing first could rewrite them.
    fn fix_encoding_artifacts(&self, text: &str) -> Result<String>;

    /// Brings the text to a single canonical Unicode form (NFKC).
    fn normalize(&self, text: &str) -> Result<String>;
}

/// Table-driven replacement of valid but unwanted characters.
pub trait Mapper: Send + Sync {
    /// Applies every configured mapping to `text`.
    fn map_characters(&self, text: &str) -> Result<String>;

    /// Registers or overwrites a custom mapping that takes precedence over the
    /// defaults.
    ///
    /// Fails with [`MojifixError::InvalidInput`](crate::MojifixError::InvalidInput)
    /// when `source` is empty.
    fn add_mapping(&mut self, source: &str, target: &str) -> crate::Result<()>;
}

/// Read-only diagnostics. Implementations must never modify the text and must
/// not fail on any valid string.
pub trait Validator: Send + Sync {
    /// Returns `false` if the text still carries control characters or known
    /// corruption signatures.
    fn validate_encoding(&self, text: &str) -> bool;

    /// Describes each class of problem found, one line per class.
    fn detect_problems(&self, text: &str) -> Vec<String>;
}
