//! Alphabet boundary for dictionary words and queries.
//!
//! The automaton indexes 7-bit ASCII. Byte `0x00` is reserved as the word
//! separator in the concatenated corpus and never appears inside a word.

use crate::error::{SuggestError, SuggestResult};

/// Number of distinct symbols a transition table is indexed by
pub const ALPHABET_SIZE: usize = 128;

/// Separator written before every word in the corpus
pub const SEPARATOR: u8 = 0x00;

/// Check whether a single byte may appear inside a word or query
#[inline]
pub fn is_word_symbol(b: u8) -> bool {
    b != SEPARATOR && (b as usize) < ALPHABET_SIZE
}

/// Validate a word or query against the supported alphabet.
///
/// Fails with [`SuggestError::InvalidCharacter`] pointing at the first
/// offending byte: either the separator or a byte outside the alphabet
/// (any non-ASCII UTF-8 sequence).
pub fn validate_symbols(text: &str) -> SuggestResult<()> {
    let bytes = text.as_bytes();

    let separator = memchr::memchr(SEPARATOR, bytes);
    let non_ascii = bytes.iter().position(|&b| (b as usize) >= ALPHABET_SIZE);

    let position = match (separator, non_ascii) {
        (Some(a), Some(b)) => a.min(b),
        (Some(a), None) | (None, Some(a)) => a,
        (None, None) => return Ok(()),
    };

    Err(SuggestError::InvalidCharacter {
        position,
        byte: bytes[position],
    })
}
