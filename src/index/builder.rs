//! Suffix automaton builder
//!
//! Builds a generalized suffix automaton over a dictionary by:
//! 1. Concatenating all words, each prefixed with the separator byte
//! 2. Extending the automaton online, one corpus byte at a time
//! 3. Inverting suffix links into the tree used to aggregate answers
//!
//! Construction is amortized O(n) in the corpus length and produces at most
//! `2n - 1` states.

use super::automaton::SuffixAutomaton;
use super::types::*;
use crate::error::{SuggestError, SuggestResult};
use crate::utils::alphabet::{SEPARATOR, validate_symbols};
use tracing::{debug, trace};

/// Longest corpus whose `2n - 1` states still fit below `NO_STATE`
const MAX_CORPUS_LEN: usize = (StateId::MAX / 2) as usize;

/// Builder for constructing a suffix automaton from dictionary words
#[derive(Debug)]
pub struct AutomatonBuilder {
    /// Separator-prefixed concatenation of all accepted words
    corpus: Vec<u8>,
    /// Number of accepted words
    word_count: u32,
    /// Corpus length beyond which words are rejected
    max_corpus_len: usize,
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl AutomatonBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `bytes` bytes of corpus
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            corpus: Vec::with_capacity(bytes),
            word_count: 0,
            max_corpus_len: MAX_CORPUS_LEN,
        }
    }

    /// Create a builder that rejects corpora longer than `limit` bytes
    #[cfg(test)]
    pub(crate) fn with_corpus_limit(limit: usize) -> Self {
        Self {
            max_corpus_len: limit.min(MAX_CORPUS_LEN),
            ..Self::new()
        }
    }

    /// Add a word to the dictionary
    ///
    /// Returns the word's index. Words containing the separator or bytes
    /// outside the alphabet are rejected and leave the builder unchanged.
    pub fn add_word(&mut self, word: &str) -> SuggestResult<WordId> {
        if let Err(err) = validate_symbols(word) {
            trace!(word_index = self.word_count, %err, "rejected dictionary word");
            return Err(err);
        }

        let len = self.corpus.len() + 1 + word.len();
        if len > self.max_corpus_len {
            return Err(SuggestError::CorpusTooLarge { len });
        }

        let id = self.word_count;
        self.corpus.push(SEPARATOR);
        self.corpus.extend_from_slice(word.as_bytes());
        self.word_count += 1;

        Ok(id)
    }

    /// Get the number of words added
    pub fn word_count(&self) -> usize {
        self.word_count as usize
    }

    /// Get the current size of the concatenated corpus
    pub fn corpus_len(&self) -> usize {
        self.corpus.len()
    }

    /// Build the automaton from the accumulated words
    pub fn build(self) -> SuffixAutomaton {
        let n = self.corpus.len();
        // Dictionaries average about 1.5 states per byte; spare room is trimmed in `finish`
        let mut construction = Construction::with_capacity(n + n / 2 + 1);

        let mut word = NO_WORD;
        for (i, &c) in self.corpus.iter().enumerate() {
            if c == SEPARATOR {
                word = if word == NO_WORD { 0 } else { word + 1 };
            }
            construction.extend(c, i, word);
        }

        let states = construction.finish();

        let automaton = SuffixAutomaton::from_parts(states, self.word_count, n);
        debug!(
            states = automaton.state_count(),
            words = self.word_count,
            corpus_len = n,
            "built suffix automaton"
        );
        automaton
    }
}

/// Build a suffix automaton over `words`, in order
///
/// Fails on the first word that contains the separator or a byte outside
/// the alphabet.
pub fn build_automaton<I, S>(words: I) -> SuggestResult<SuffixAutomaton>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = AutomatonBuilder::new();
    for word in words {
        builder.add_word(word.as_ref())?;
    }
    Ok(builder.build())
}

/// Transient state of one online construction
struct Construction {
    states: Vec<State>,
    /// State of the whole corpus prefix read so far
    last: StateId,
}

impl Construction {
    fn with_capacity(capacity: usize) -> Self {
        let mut states = Vec::with_capacity(capacity);
        states.push(State::new(0, NO_WORD));
        Self { states, last: ROOT }
    }

    #[inline]
    fn at(&self, id: StateId) -> &State {
        &self.states[id as usize]
    }

    #[inline]
    fn at_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id as usize]
    }

    fn push(&mut self, state: State) -> StateId {
        let id = self.states.len() as StateId;
        self.states.push(state);
        id
    }

    /// Append corpus byte `c` found at `position` while scanning `word`
    fn extend(&mut self, c: u8, position: usize, word: WordId) {
        let sym = c as usize;
        let cur = self.push(State::new(position as u32 + 1, word));

        let mut p = self.last;
        while p != NO_STATE && self.at(p).transitions[sym] == NO_STATE {
            self.at_mut(p).transitions[sym] = cur;
            p = self.at(p).suffix_link;
        }

        if p == NO_STATE {
            self.at_mut(cur).suffix_link = ROOT;
        } else {
            let q = self.at(p).transitions[sym];
            if self.at(p).length + 1 == self.at(q).length {
                self.at_mut(cur).suffix_link = q;
            } else {
                let mut clone = State::new(self.at(p).length + 1, NO_WORD);
                clone.transitions = self.at(q).transitions;
                clone.suffix_link = self.at(q).suffix_link;
                let clone = self.push(clone);

                while p != NO_STATE && self.at(p).transitions[sym] == q {
                    self.at_mut(p).transitions[sym] = clone;
                    p = self.at(p).suffix_link;
                }

                self.at_mut(q).suffix_link = clone;
                self.at_mut(cur).suffix_link = clone;
            }
        }

        self.last = cur;
    }

    /// Derive the suffix-link tree and hand over the arena
    fn finish(mut self) -> Vec<State> {
        for id in 1..self.states.len() {
            let link = self.states[id].suffix_link;
            self.at_mut(link).inverse_suffix_links.push(id as StateId);
        }
        self.states.shrink_to_fit();
        self.states
    }
}
