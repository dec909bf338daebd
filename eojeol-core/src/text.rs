//! Character-indexed string helpers
//!
//! Every length and split point in the extractor counts characters, not
//! bytes. These helpers keep the slicing UTF-8 safe.

/// Number of characters in `s`
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split `s` after its first `n` characters
///
/// When `n` exceeds the length the whole string is the head.
#[inline]
pub fn split_at_char(s: &str, n: usize) -> (&str, &str) {
    match s.char_indices().nth(n) {
        Some((offset, _)) => s.split_at(offset),
        None => (s, ""),
    }
}

/// Split off the last `n` characters of `s`
#[inline]
pub fn split_from_end(s: &str, n: usize) -> (&str, &str) {
    let len = char_len(s);
    split_at_char(s, len.saturating_sub(n))
}

/// Last character of `s`
#[inline]
pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// The first `n` characters of `s`
#[inline]
pub fn prefix(s: &str, n: usize) -> &str {
    split_at_char(s, n).0
}

/// Byte offsets of every character boundary, including both ends
pub fn char_boundaries(s: &str) -> Vec<usize> {
    let mut bounds: Vec<usize> = s.char_indices().map(|(offset, _)| offset).collect();
    bounds.push(s.len());
    bounds
}
