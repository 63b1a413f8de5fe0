// mojifix-core/src/lib.rs
//! # mojifix Core Library
//!
//! `mojifix-core` repairs mojibake and canonicalizes Unicode in text produced
//! by LLM providers before it is displayed or exported. It consumes plain
//! strings and returns plain strings; where the text came from and where it
//! goes are up to the caller.
//!
//! ## Modules
//!
//! * `config`: the ordered character-mapping table, YAML loading and merging.
//! * `sanitizers`: the `UnicodeNormalizer` and `CharacterMapper` stages.
//! * `validators`: the read-only `EncodingValidator`.
//! * `problem`: structured diagnostic records.
//! * `engine`: the traits each stage is reached through.
//! * `sanitizer`: the `TextSanitizer` pipeline.
//! * `headless`: one-shot helpers for LLM responses and export fields.
//!
//! ## Usage Example
//!
//! ```rust
//! use mojifix_core::TextSanitizer;
//!
//! fn main() -> mojifix_core::Result<()> {
//!     let mut sanitizer = TextSanitizer::new();
//!     sanitizer.add_mapping("§", "section")?;
//!
//!     let clean = sanitizer.sanitize_text("Trust matters窶覇see §2")?;
//!     assert_eq!(clean, "Trust matters—see section2");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Pipeline failures surface as a single [`MojifixError::SanitizationFailed`]
//! wrapping the cause. Sanitation is a quality improvement, not a gate:
//! callers that would rather keep going use
//! [`TextSanitizer::sanitize_or_original`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod problem;
pub mod sanitizer;
pub mod sanitizers;
pub mod validators;

/// Re-exports the mapping table types.
pub use config::{merge_mappings, CharacterMapping, SanitizationConfig};

/// Re-exports the error type and result alias.
pub use errors::{MojifixError, Result};

/// Re-exports the stage traits.
pub use engine::{Mapper, Normalizer, Validator};

pub use sanitizer::TextSanitizer;
pub use sanitizers::mapper::CharacterMapper;
pub use sanitizers::normalizer::UnicodeNormalizer;
pub use validators::EncodingValidator;

pub use problem::{CharOccurrence, Problem};

/// Re-exports helpers for one-shot, non-interactive use.
pub use headless::{headless_sanitize_string, sanitize_fields, sanitize_posts, split_posts, POST_SEPARATOR};
