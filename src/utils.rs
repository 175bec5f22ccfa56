//! Utility functions for string processing.

use unicode_normalization::UnicodeNormalization;

/// Normalize a word for fuzzy comparison: lowercase, then keep only word
/// characters.
///
/// Word characters are ASCII letters, digits and `_`, plus the Cyrillic
/// lowercase range `а-я` and `ё`. Everything else is dropped:
/// - "Hello," → "hello"
/// - "«Привет!»" → "привет"
/// - "C++" → "c"
/// - "snake_case" → "snake_case"
///
/// # Algorithm
///
/// 1. Lowercase
/// 2. NFC compose, so a decomposed `й` (и + breve) comes out as one letter
/// 3. Filter to word characters
///
/// Idempotent: the output contains only characters that all three steps map
/// to themselves.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .nfc()
        .filter(|c| is_word_char(*c))
        .collect()
}

/// Is this a character the normalizer keeps?
#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || ('а'..='я').contains(&c) || c == 'ё'
}

/// Whitespace-delimited tokens of `text`, empty tokens skipped.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// First `n` characters of `s` (or all of it if shorter).
pub fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
