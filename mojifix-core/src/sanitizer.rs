// mojifix-core/src/sanitizer.rs
//! The `TextSanitizer` pipeline: the entry point external callers use.
//!
//! Disallowed control characters and zero-width characters are dropped up
//! front; deleting them any later could join the halves of a corruption
//! signature, or a base letter and a combining mark, behind the stages that
//! handle those. The stages then always run in the same order:
//!
//! 1. repair known corruption signatures,
//! 2. NFKC normalization,
//! 3. character mapping,
//! 4. diagnostics (logged, never alters the text),
//! 5. final cleanup of control characters and whitespace.
//!
//! Sanitizing already-sanitized text returns it unchanged.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;

use crate::config::SanitizationConfig;
use crate::engine::{Mapper, Normalizer, Validator};
use crate::errors::{MojifixError, Result};
use crate::sanitizers::mapper::CharacterMapper;
use crate::sanitizers::normalizer::UnicodeNormalizer;
use crate::validators::{is_disallowed_control, is_zero_width, EncodingValidator};

static EXCESS_SPACES: Lazy<Regex> = Lazy::new(|| Regex::new(r" {3,}").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{4,}").unwrap());

/// Runs the fixed sanitization pipeline over plain text.
///
/// Construct one at startup and hand it to whatever needs it; a shared
/// instance can sit behind an `Arc` once its mappings are configured.
pub struct TextSanitizer {
    normalizer: Box<dyn Normalizer>,
    mapper: Box<dyn Mapper>,
    validator: Box<dyn Validator>,
}

impl fmt::Debug for TextSanitizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextSanitizer").finish_non_exhaustive()
    }
}

impl Default for TextSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSanitizer {
    /// Builds a sanitizer with the built-in mapping table.
    pub fn new() -> Self {
        Self::with_config(SanitizationConfig::default())
    }

    /// Builds a sanitizer whose mapper uses `config`.
    pub fn with_config(config: SanitizationConfig) -> Self {
        Self::with_components(
            Box::new(UnicodeNormalizer::new()),
            Box::new(CharacterMapper::new(config)),
            Box::new(EncodingValidator::new()),
        )
    }

    /// Builds a sanitizer from caller-supplied stage implementations.
    pub fn with_components(
        normalizer: Box<dyn Normalizer>,
        mapper: Box<dyn Mapper>,
        validator: Box<dyn Validator>,
    ) -> Self {
        Self {
            normalizer,
            mapper,
            validator,
        }
    }

    /// Registers a custom mapping on the underlying mapper.
    pub fn add_mapping(&mut self, source: &str, target: &str) -> Result<()> {
        self.mapper.add_mapping(source, target)
    }

    /// Runs the full pipeline over `text`.
    ///
    /// # Errors
    ///
    /// Returns [`MojifixError::SanitizationFailed`] if a stage fails, or
    /// [`MojifixError::InvalidInput`] if a stage rejected the input itself.
    pub fn sanitize_text(&self, text: &str) -> Result<String> {
        let visible = strip_invisible(text);
        if visible.is_empty() {
            return Ok(String::new());
        }

        let repaired = self
            .normalizer
            .fix_encoding_artifacts(&visible)
            .map_err(|e| MojifixError::stage_failure("fix_encoding_artifacts", e))?;
        let normalized = self
            .normalizer
            .normalize(&repaired)
            .map_err(|e| MojifixError::stage_failure("normalize", e))?;
        let mapped = self
            .mapper
            .map_characters(&normalized)
            .map_err(|e| MojifixError::stage_failure("map_characters", e))?;

        self.report(&mapped);

        let cleaned = final_cleanup(&mapped);
        debug!(
            "Sanitized text. Original length: {}, sanitized length: {}",
            text.chars().count(),
            cleaned.chars().count()
        );
        Ok(cleaned)
    }

    /// Sanitizes raw bytes, rejecting anything that is not UTF-8.
    pub fn sanitize_bytes(&self, bytes: &[u8]) -> Result<String> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| MojifixError::invalid_input(format!("input is not valid UTF-8: {}", e)))?;
        self.sanitize_text(text)
    }

    /// Best-effort sanitation: on failure, logs a warning and hands back the
    /// original text.
    pub fn sanitize_or_original<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match self.sanitize_text(text) {
            Ok(sanitized) => Cow::Owned(sanitized),
            Err(e) => {
                warn!("Falling back to unsanitized text: {}", e);
                Cow::Borrowed(text)
            }
        }
    }

    /// Runs only the validator's verdict over `text`.
    pub fn validate_encoding(&self, text: &str) -> bool {
        self.validator.validate_encoding(text)
    }

    /// Runs only the validator's problem report over `text`.
    pub fn detect_problems(&self, text: &str) -> Vec<String> {
        self.validator.detect_problems(text)
    }

    fn report(&self, text: &str) {
        if self.validator.validate_encoding(text) {
            debug!("Encoding check passed.");
            return;
        }
        let problems = self.validator.detect_problems(text);
        if problems.is_empty() {
            warn!("Encoding check failed without a detailed report.");
        } else {
            warn!("Encoding check found {} problem(s): {}", problems.len(), problems.join("; "));
        }
    }
}

/// Drops disallowed control characters and zero-width characters.
fn strip_invisible(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| is_disallowed_control(c) || is_zero_width(c)) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .filter(|c| !is_disallowed_control(*c) && !is_zero_width(*c))
            .collect(),
    )
}

/// Strips control characters and tidies whitespace.
///
/// Lines are right-trimmed before runs are collapsed; trimming afterwards
/// could leave a fresh run of four or more newlines behind.
fn final_cleanup(text: &str) -> String {
    let stripped: String = text.chars().filter(|c| !is_disallowed_control(*c)).collect();

    let trimmed = stripped
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");

    let spaced = EXCESS_SPACES.replace_all(&trimmed, "  ");
    EXCESS_NEWLINES.replace_all(&spaced, "\n\n\n").into_owned()
}
