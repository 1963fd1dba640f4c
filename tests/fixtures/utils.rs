// Brute-force reference answers shared by the integration tests

#![allow(dead_code)]

use suggest::WordId;

/// Indices of the words containing `query`, by linear scan
pub fn brute_substring<S: AsRef<str>>(words: &[S], query: &str) -> Vec<WordId> {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.as_ref().contains(query))
        .map(|(i, _)| i as WordId)
        .collect()
}

/// Indices of the words starting with `query`, by linear scan
pub fn brute_prefix<S: AsRef<str>>(words: &[S], query: &str) -> Vec<WordId> {
    words
        .iter()
        .enumerate()
        .filter(|(_, w)| w.as_ref().starts_with(query))
        .map(|(i, _)| i as WordId)
        .collect()
}
