//! Immutable suffix automaton
//!
//! Provides read-only access to the built state arena. An automaton is never
//! mutated after construction, so it can be shared across threads by
//! reference or `Arc` without synchronization.

use super::types::*;
use crate::error::SuggestResult;
use crate::utils::alphabet::validate_symbols;

/// A generalized suffix automaton over a separator-joined dictionary
#[derive(Debug, Clone)]
pub struct SuffixAutomaton {
    /// State arena; index 0 is the initial state
    states: Vec<State>,
    /// Number of dictionary words
    word_count: u32,
    /// Length of the separator-joined corpus
    corpus_len: usize,
}

impl SuffixAutomaton {
    pub(crate) fn from_parts(states: Vec<State>, word_count: u32, corpus_len: usize) -> Self {
        Self {
            states,
            word_count,
            corpus_len,
        }
    }

    /// All states, indexed by `StateId`
    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Get a state by id
    #[inline]
    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id as usize)
    }

    /// The initial state
    #[inline]
    pub fn root(&self) -> &State {
        &self.states[ROOT as usize]
    }

    /// Number of states, including the root
    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of dictionary words
    #[inline]
    pub fn word_count(&self) -> usize {
        self.word_count as usize
    }

    /// Length of the separator-joined corpus
    #[inline]
    pub fn corpus_len(&self) -> usize {
        self.corpus_len
    }

    /// Follow transitions for `symbols` starting at `from`
    ///
    /// Returns `None` as soon as a transition is missing. Symbols are not
    /// validated; bytes outside the alphabet simply have no transition.
    pub fn walk(&self, from: StateId, symbols: &[u8]) -> Option<StateId> {
        symbols
            .iter()
            .try_fold(from, |node, &c| self.state(node)?.next(c))
    }

    /// Find the state reached by reading `query` from the initial state
    pub fn locate(&self, query: &str) -> SuggestResult<Option<StateId>> {
        validate_symbols(query)?;
        Ok(self.walk(ROOT, query.as_bytes()))
    }

    /// Check whether `query` occurs anywhere in the dictionary
    pub fn contains(&self, query: &str) -> SuggestResult<bool> {
        Ok(self.locate(query)?.is_some())
    }

    /// Get statistics about this automaton
    pub fn stats(&self) -> AutomatonStats {
        AutomatonStats {
            state_count: self.states.len() as u64,
            clone_count: self.states.iter().filter(|s| s.is_clone()).count() as u64,
            transition_count: self
                .states
                .iter()
                .map(|s| s.transitions().count() as u64)
                .sum(),
            word_count: self.word_count,
            corpus_len: self.corpus_len as u64,
        }
    }
}
