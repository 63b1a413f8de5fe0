// File: mojifix-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for the layers that consume sanitized text: one-shot
//! sanitation, splitting an LLM response into posts, and best-effort cleanup
//! of export fields.
//!
//! Export fields must be sanitized before any format-level escaping (CSV
//! quoting, formula guards); sanitation works on characters, escaping on the
//! target format.

use log::debug;

use crate::errors::Result;
use crate::sanitizer::TextSanitizer;

/// Separator LLM responses use between posts.
pub const POST_SEPARATOR: &str = "---";

/// Sanitizes a string with a freshly built default sanitizer.
///
/// Convenient for one-off calls; long-lived callers should build a
/// [`TextSanitizer`] once and reuse it.
pub fn headless_sanitize_string(content: &str) -> Result<String> {
    TextSanitizer::new().sanitize_text(content)
}

/// Splits an LLM response on `separator`, trimming each part and dropping
/// parts that are empty.
pub fn split_posts<'a>(response: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        let trimmed = response.trim();
        return if trimmed.is_empty() { Vec::new() } else { vec![trimmed] };
    }
    response
        .split(separator)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect()
}

/// Splits an LLM response into posts and sanitizes each one.
///
/// A post that fails to sanitize is kept as the original text.
pub fn sanitize_posts(sanitizer: &TextSanitizer, response: &str, separator: &str) -> Vec<String> {
    let posts: Vec<String> = split_posts(response, separator)
        .into_iter()
        .map(|post| sanitizer.sanitize_or_original(post).trim().to_string())
        .filter(|post| !post.is_empty())
        .collect();
    debug!("Split response into {} post(s).", posts.len());
    posts
}

/// Sanitizes every field of an export record, keeping the original value of
/// any field that fails.
pub fn sanitize_fields<S: AsRef<str>>(sanitizer: &TextSanitizer, fields: &[S]) -> Vec<String> {
    fields
        .iter()
        .map(|field| sanitizer.sanitize_or_original(field.as_ref()).into_owned())
        .collect()
}
