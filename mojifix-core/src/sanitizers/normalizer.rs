//! normalizer.rs - Unicode normalization and mojibake repair.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use log::debug;
use unicode_normalization::{is_nfkc_quick, IsNormalized, UnicodeNormalization};

use crate::engine::Normalizer;

/// Known corruption signatures and their repairs, in application order.
///
/// The CJK-range entries come from UTF-8 punctuation decoded as Shift_JIS;
/// the Latin entries from UTF-8 decoded as Windows-1252 (once or twice).
/// A signature that is a prefix of another is listed after it.
pub const CORRUPTION_FIXES: &[(&str, &str)] = &[
    // em dash
    ("窶覇", "—"),
    ("窶懊", "\""),
    ("窶暖", "—"),
    ("窶兤", "—"),
    // quotes
    ("竊会", " \""),
    ("竊曇", "\""),
    ("竊", "\""),
    ("窶忤", "\""),
    ("窶歛", "'"),
    ("窶戮", "'"),
    ("窶", "\""),
    // double-encoded Windows-1252
    ("Ã¢Â€Â™", "'"),
    ("Ã¢Â€Âœ", "\""),
    ("Ã¢Â€Â\"", "—"),
    ("Ã¢Â€Â", "\""),
    // Windows-1252
    ("â€™", "'"),
    ("â€œ", "\""),
    ("â€\"", "—"),
    ("â€¦", "..."),
    ("â€", "\""),
];

/// Applies NFKC normalization and repairs the fixed table of mojibake
/// signatures.
///
/// Signatures outside [`CORRUPTION_FIXES`] are left alone: repairing
/// unseen patterns risks rewriting legitimate CJK text.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeNormalizer;

impl UnicodeNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// The signature table used by [`Normalizer::fix_encoding_artifacts`].
    pub fn corruption_patterns(&self) -> &'static [(&'static str, &'static str)] {
        CORRUPTION_FIXES
    }
}

impl Normalizer for UnicodeNormalizer {
    fn fix_encoding_artifacts(&self, text: &str) -> Result<String> {
        let mut fixed = text.to_string();
        for (corrupted, repaired) in CORRUPTION_FIXES {
            if fixed.contains(corrupted) {
                debug!("Repairing corruption signature {:?} -> {:?}", corrupted, repaired);
                fixed = fixed.replace(corrupted, repaired);
            }
        }
        Ok(fixed)
    }

    /// NFKC-normalizes `text`.
    ///
    /// Composition can assemble a signature that was not there before (`a`
    /// plus U+0302 followed by `€` becomes `â€`). Signatures are repaired
    /// after canonical composition, while `™` and friends are still intact,
    /// and once more after the compatibility mapping.
    fn normalize(&self, text: &str) -> Result<String> {
        if is_nfkc_quick(text.chars()) == IsNormalized::Yes {
            return Ok(text.to_string());
        }
        let composed: String = text.nfc().collect();
        let repaired = self.fix_encoding_artifacts(&composed)?;
        let normalized: String = repaired.nfkc().collect();
        self.fix_encoding_artifacts(&normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> UnicodeNormalizer {
        UnicodeNormalizer::new()
    }

    #[test]
    fn test_normalize_basic_text() {
        let text = "Hello, world!";
        assert_eq!(normalizer().normalize(text).unwrap(), text);
    }

    #[test]
    fn test_normalize_unicode_characters() {
        let cases = [
            ("\u{00C9}", "\u{00C9}", "precomposed É"),
            ("E\u{0301}", "\u{00C9}", "decomposed É"),
            ("\u{2160}", "I", "roman numeral one"),
            ("\u{FF21}", "A", "fullwidth A"),
            ("\u{33A1}", "m2", "square meter symbol"),
            ("\u{FB01}le", "file", "fi ligature"),
        ];
        for (input, expected, description) in cases {
            assert_eq!(normalizer().normalize(input).unwrap(), expected, "{}", description);
        }
    }

    #[test]
    fn test_normalize_preserves_whitespace_controls() {
        let text = "Line 1\nLine 2\t\tTabbed\r\nWindows line";
        assert_eq!(normalizer().normalize(text).unwrap(), text);
    }

    #[test]
    fn test_normalize_empty_and_space() {
        assert_eq!(normalizer().normalize("").unwrap(), "");
        assert_eq!(normalizer().normalize(" ").unwrap(), " ");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let text = "Caf\u{0065}\u{0301} \u{FF48}\u{FF49} \u{2026}";
        let once = normalizer().normalize(text).unwrap();
        let twice = normalizer().normalize(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(once, "Café hi ...");
    }

    #[test]
    fn test_normalize_repairs_composed_signatures() {
        assert_eq!(normalizer().normalize("a\u{302}\u{20ac} ok").unwrap(), "\" ok");
        assert_eq!(normalizer().normalize("dona\u{302}\u{20ac}\u{2122}t").unwrap(), "don't");
        assert_eq!(normalizer().normalize("plain a\u{302}").unwrap(), "plain \u{e2}");
    }

    #[test]
    fn test_fix_encoding_artifacts_common_corruptions() {
        let cases = [
            ("Trust is key窶覇especially", "Trust is key—especially"),
            ("窶忤Hello窶", "\"Hello\""),
            ("He said竊会important竊", "He said \"important\""),
            ("The cost窶兤$50", "The cost—$50"),
            ("It窶歛s fine", "It's fine"),
            ("donâ€™t", "don't"),
            ("â€œquotedâ€", "\"quoted\""),
            ("waitâ€¦", "wait..."),
        ];
        for (corrupted, expected) in cases {
            assert_eq!(normalizer().fix_encoding_artifacts(corrupted).unwrap(), expected);
        }
    }

    #[test]
    fn test_fix_leaves_clean_text_alone() {
        let text = "日本語のテキスト — \"quoted\" café";
        assert_eq!(normalizer().fix_encoding_artifacts(text).unwrap(), text);
    }

    #[test]
    fn test_every_signature_is_reachable() {
        // An entry shadowed by an earlier prefix would never fire.
        for (index, (pattern, _)) in CORRUPTION_FIXES.iter().enumerate() {
            for (earlier, _) in &CORRUPTION_FIXES[..index] {
                assert!(
                    !pattern.contains(earlier),
                    "{:?} is shadowed by {:?}",
                    pattern,
                    earlier
                );
            }
        }
    }
}
