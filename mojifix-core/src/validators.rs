// File: mojifix-core/src/validators.rs
//! Read-only encoding diagnostics.
//!
//! The validator never changes the text it inspects. Its verdict is advisory:
//! the pipeline logs it and carries on.
//!
//! License: MIT OR APACHE 2.0

use once_cell::sync::Lazy;
use std::ops::RangeInclusive;

use crate::engine::Validator;
use crate::problem::{OccurrenceCollector, Problem};

/// Raw substrings that only show up in mis-decoded text.
pub const CORRUPTION_MARKERS: &[&str] = &["窶", "竊", "Ã¢Â€", "â€"];

/// Signatures reported by [`EncodingValidator::diagnose`], with descriptions.
const CORRUPTION_DESCRIPTIONS: &[(&str, &str)] = &[
    ("窶覇", "Em dash corruption detected"),
    ("竊会", "Quote corruption detected"),
    ("窶忤", "Left quote corruption detected"),
    ("窶", "Right quote corruption detected"),
    ("竊", "Quote corruption marker detected"),
    ("Ã¢Â€", "UTF-8/Windows-1252 encoding issue detected"),
    ("â€", "Smart quote encoding issue detected"),
];

static PRIVATE_USE_RANGES: Lazy<Vec<RangeInclusive<u32>>> = Lazy::new(|| {
    vec![
        0xE000..=0xF8FF,
        0xF_0000..=0xF_FFFD,
        0x10_0000..=0x10_FFFD,
    ]
});

/// Returns `true` for control characters that should not survive sanitation:
/// C0 controls other than `\n`, `\t` and `\r`, DEL, and the C1 block.
pub fn is_disallowed_control(c: char) -> bool {
    match c {
        '\n' | '\t' | '\r' => false,
        '\u{0}'..='\u{1F}' | '\u{7F}'..='\u{9F}' => true,
        _ => false,
    }
}

/// Returns `true` for the invisible zero-width characters the built-in
/// mappings delete: ZWSP, ZWNJ, ZWJ, word joiner and the BOM.
pub fn is_zero_width(c: char) -> bool {
    matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

/// Returns `true` if `c` lies in one of the Unicode private use areas.
pub fn is_private_use(c: char) -> bool {
    let code = c as u32;
    PRIVATE_USE_RANGES.iter().any(|range| range.contains(&code))
}

/// Inspects text for leftover corruption, control characters and private use
/// code points.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingValidator;

impl EncodingValidator {
    pub fn new() -> Self {
        Self
    }

    /// Checks that raw bytes survive a UTF-8 decode/encode round trip.
    pub fn validate_bytes(&self, bytes: &[u8]) -> bool {
        match std::str::from_utf8(bytes) {
            Ok(text) => text.as_bytes() == bytes,
            Err(_) => false,
        }
    }

    /// Structured version of [`Validator::detect_problems`].
    pub fn diagnose(&self, text: &str) -> Vec<Problem> {
        let mut problems: Vec<Problem> = CORRUPTION_DESCRIPTIONS
            .iter()
            .filter(|(pattern, _)| text.contains(pattern))
            .map(|(pattern, description)| Problem::Corruption {
                pattern: (*pattern).to_string(),
                description: (*description).to_string(),
            })
            .collect();

        let mut controls = OccurrenceCollector::default();
        let mut private_use = OccurrenceCollector::default();
        for (position, c) in text.chars().enumerate() {
            if is_disallowed_control(c) {
                controls.record(position, c);
            } else if is_private_use(c) {
                private_use.record(position, c);
            }
        }

        if let Some((count, samples)) = controls.finish() {
            problems.push(Problem::ControlCharacters { count, samples });
        }
        if let Some((count, samples)) = private_use.finish() {
            problems.push(Problem::PrivateUse { count, samples });
        }

        problems
    }
}

impl Validator for EncodingValidator {
    fn validate_encoding(&self, text: &str) -> bool {
        if !self.validate_bytes(text.as_bytes()) {
            return false;
        }
        if text.chars().any(is_disallowed_control) {
            return false;
        }
        !CORRUPTION_MARKERS.iter().any(|marker| text.contains(marker))
    }

    fn detect_problems(&self, text: &str) -> Vec<String> {
        self.diagnose(text).iter().map(ToString::to_string).collect()
    }
}
