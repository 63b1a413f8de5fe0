// mojifix-core/tests/sanitizer_integration_tests.rs
//! End-to-end checks of the sanitization pipeline through the public API.

use anyhow::Result;
use std::sync::Arc;
use std::thread;
use test_log::test;

use mojifix_core::{
    sanitize_posts, CharacterMapper, EncodingValidator, Mapper, TextSanitizer, UnicodeNormalizer,
    Validator, POST_SEPARATOR,
};

const SAMPLES: &[&str] = &[
    "Normal text",
    "Text with窶覇corruption",
    "Mixed content: café & émojis 🎉",
    "He said \u{201c}hi\u{201d} and left\u{2026}",
    "Non\u{00a0}breaking and thin\u{2009}spaces",
    "Zero\u{200b}width\u{200d}joiners\u{feff}",
    "Control\x00chars\x07inside\x7F",
    "Too      many spaces",
    "Lines\n\n\n\n\n\nfar apart",
    "Trailing spaces   \nand tabs\t\t\nhere",
    "a\n  \n\t\n   \n \nb",
    "Windows\r\nline\r\n\r\n\r\n\r\n\r\nendings\r\n",
    "Fullwidth \u{FF21}\u{FF22}\u{FF23} and \u{FB01}ligatures",
    "Double encoded Ã¢Â€Â™quote and donâ€™t",
    "Private \u{E000} use",
    "日本語のテキストと中文",
    "a\u{302}\u{20ac} ok",
    "don\u{e2}\x00\u{20ac}\u{2122}t",
    "don\u{e2}\u{200b}\u{20ac}\u{2122}t",
    "Cafe\u{200b}\u{301} menu",
    "Resume\x07\u{301} sent",
    "split\u{7ab6}\u{feff}\u{8987} dash",
];

#[test]
fn test_empty_input_identity() -> Result<()> {
    assert_eq!(TextSanitizer::new().sanitize_text("")?, "");
    Ok(())
}

#[test]
fn test_corruption_repair() -> Result<()> {
    let result = TextSanitizer::new()
        .sanitize_text("Trust is a key driver of conversions窶覇especially in Japan.")?;
    assert!(result.contains('—'));
    assert!(!result.contains("窶覇"));
    assert_eq!(result, "Trust is a key driver of conversions—especially in Japan.");
    Ok(())
}

#[test]
fn test_quote_repair() -> Result<()> {
    let result = TextSanitizer::new().sanitize_text("He said窶忤Hello world窶with enthusiasm.")?;
    assert!(result.contains('"'));
    assert!(!result.contains("窶忤"));
    assert!(!result.contains('窶'));
    assert_eq!(result, "He said\"Hello world\"with enthusiasm.");
    Ok(())
}

#[test]
fn test_multiple_corruption_patterns() -> Result<()> {
    let result = TextSanitizer::new().sanitize_text("Multiple窶覇issues竊会in竊the竊text")?;
    assert!(result.contains('—'));
    assert!(result.contains('"'));
    assert!(EncodingValidator::new().validate_encoding(&result));
    Ok(())
}

#[test]
fn test_idempotence() -> Result<()> {
    let sanitizer = TextSanitizer::new();
    for sample in SAMPLES {
        let first = sanitizer.sanitize_text(sample)?;
        let second = sanitizer.sanitize_text(&first)?;
        assert_eq!(first, second, "not idempotent for {:?}", sample);
    }
    Ok(())
}

#[test]
fn test_output_has_no_repairable_signature() -> Result<()> {
    let sanitizer = TextSanitizer::new();
    let signatures = UnicodeNormalizer::new().corruption_patterns();
    for sample in SAMPLES {
        let result = sanitizer.sanitize_text(sample)?;
        for (signature, _) in signatures {
            assert!(
                !result.contains(signature),
                "{:?} -> {:?} still contains {:?}",
                sample,
                result,
                signature
            );
        }
    }
    Ok(())
}

#[test]
fn test_clean_ascii_is_untouched() -> Result<()> {
    let sanitizer = TextSanitizer::new();
    for text in [
        "Simple English text",
        "Numbers and symbols: $100, 50%, #hashtag, @mention",
        "Punctuation!? (parens) [brackets] {braces} <angles> ~tilde` 'single' \"double\"",
        "Two  spaces are fine",
        "line one\nline two\n\n\nline five",
    ] {
        assert_eq!(sanitizer.sanitize_text(text)?, text);
    }
    Ok(())
}

#[test]
fn test_length_does_not_collapse() -> Result<()> {
    let sanitizer = TextSanitizer::new();
    for sample in SAMPLES.iter().chain(
        [
            "Text with proper em dash — and quotes \"Hello\"",
            "Unicode content: café, naïve, résumé",
            "Mixed content: Hello 世界 🌍",
        ]
        .iter(),
    ) {
        let result = sanitizer.sanitize_text(sample)?;
        let (before, after) = (sample.chars().count(), result.chars().count());
        assert!(after * 2 >= before, "{:?} shrank to {:?}", sample, result);
    }
    Ok(())
}

#[test]
fn test_sanitized_output_passes_validation() -> Result<()> {
    let sanitizer = TextSanitizer::new();
    let validator = EncodingValidator::new();
    for sample in SAMPLES.iter().filter(|s| !s.contains('\u{E000}')) {
        let result = sanitizer.sanitize_text(sample)?;
        assert!(
            validator.validate_encoding(&result),
            "{:?} -> {:?}: {:?}",
            sample,
            result,
            validator.detect_problems(&result)
        );
    }
    Ok(())
}

#[test]
fn test_validator_is_pure_over_samples() {
    let validator = EncodingValidator::new();
    for sample in SAMPLES {
        let owned = sample.to_string();
        let _ = validator.validate_encoding(&owned);
        let _ = validator.detect_problems(&owned);
        assert_eq!(&owned, sample);
    }
}

#[test]
fn test_mapping_override() -> Result<()> {
    let mut mapper = CharacterMapper::default();
    mapper.add_mapping("§", "section")?;
    let result = mapper.map_characters("§1")?;
    assert!(result.contains("section"));
    assert!(!result.contains('§'));
    Ok(())
}

#[test]
fn test_invalid_input_bytes() {
    let err = TextSanitizer::new().sanitize_bytes(b"caf\xe9").unwrap_err();
    assert!(err.is_invalid_input());
}

#[test]
fn test_llm_response_scenario() {
    let sanitizer = TextSanitizer::new();
    let response = "POST 1: First post窶覇with issues\n---\nPOST 2: Second post has竊会problems竊too";

    let posts = sanitize_posts(&sanitizer, response, POST_SEPARATOR);

    assert_eq!(posts.len(), 2);
    for post in &posts {
        for marker in ["窶覇", "竊会", "竊", "窶"] {
            assert!(!post.contains(marker));
        }
        assert!(post.contains('—') || post.contains('"'));
    }
}

#[test]
fn test_shared_sanitizer_across_threads() -> Result<()> {
    let mut sanitizer = TextSanitizer::new();
    sanitizer.add_mapping("§", "section")?;
    let sanitizer = Arc::new(sanitizer);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let sanitizer = Arc::clone(&sanitizer);
            thread::spawn(move || sanitizer.sanitize_text(&format!("§{} 窶忤quoted窶", i)))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().expect("worker panicked")?;
        assert_eq!(result, format!("section{} \"quoted\"", i));
    }
    Ok(())
}

#[test]
fn test_large_input() -> Result<()> {
    let mut text = "Lorem ipsum dolor sit amet. ".repeat(1000);
    text.push_str(&"窶覇".repeat(100));
    let result = TextSanitizer::new().sanitize_text(&text)?;
    assert!(!result.contains('窶'));
    assert!(result.ends_with(&"—".repeat(100)));
    Ok(())
}
