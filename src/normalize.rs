//! Text normalization policy shared by insertion and lookup.
//!
//! The trie stores normalized character sequences, so the exact same
//! transform must run on every string before it touches the trie, whether
//! it is being inserted or queried. A mismatch between the two paths makes
//! the trie silently fail to match.

use unicode_normalization::UnicodeNormalization;

/// Canonicalizes a string for trie storage and lookup.
///
/// Every whitespace character is removed (leading, trailing, and internal,
/// per `char::is_whitespace`), then the remainder is converted to Unicode
/// NFC so composed and decomposed encodings of the same character compare
/// equal. "+44 20 7946" therefore keys as "+44207946".
///
/// Total function: never fails, and returns an empty string for
/// all-whitespace input. Idempotent.
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| !c.is_whitespace()).nfc().collect()
}
