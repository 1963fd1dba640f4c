//! Types for suffix automaton indexing
//!
//! States live in one contiguous arena and reference each other by index,
//! so suffix links (pointing back) and inverse links (pointing forward)
//! never form ownership cycles.

use crate::error::{SuggestError, SuggestResult};
use crate::utils::alphabet::ALPHABET_SIZE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Index of a state in the automaton arena
pub type StateId = u32;

/// Index of a word in the dictionary, in insertion order
pub type WordId = u32;

/// The initial state, representing the empty string
pub const ROOT: StateId = 0;

/// Marker for a missing transition or suffix link
pub const NO_STATE: StateId = StateId::MAX;

/// Marker for a state without an origin word (root and clones)
pub const NO_WORD: WordId = WordId::MAX;

/// Cap meaning "return every match"
pub const MAX_RESULTS_UNLIMITED: usize = usize::MAX;

/// One node of the suffix automaton
#[derive(Debug, Clone)]
pub struct State {
    /// Length of the longest string in this state's equivalence class
    pub(crate) length: u32,
    /// Longest proper suffix class, `NO_STATE` for the root
    pub(crate) suffix_link: StateId,
    /// Outgoing edges indexed by symbol, `NO_STATE` where missing
    pub(crate) transitions: [StateId; ALPHABET_SIZE],
    /// States whose suffix link points here, in creation order
    pub(crate) inverse_suffix_links: Vec<StateId>,
    /// Word being scanned when this state was created, `NO_WORD` for clones
    pub(crate) origin_word: WordId,
}

impl State {
    pub(crate) fn new(length: u32, origin_word: WordId) -> Self {
        Self {
            length,
            suffix_link: NO_STATE,
            transitions: [NO_STATE; ALPHABET_SIZE],
            inverse_suffix_links: Vec::new(),
            origin_word,
        }
    }

    /// Length of the longest string this state represents
    #[inline]
    pub fn len(&self) -> u32 {
        self.length
    }

    /// Whether this is the initial state, the only one of length zero
    #[inline]
    pub fn is_root(&self) -> bool {
        self.length == 0
    }

    /// Suffix link target, `None` for the root
    #[inline]
    pub fn suffix_link(&self) -> Option<StateId> {
        (self.suffix_link != NO_STATE).then_some(self.suffix_link)
    }

    /// Transition on `symbol`, if any
    #[inline]
    pub fn next(&self, symbol: u8) -> Option<StateId> {
        let target = *self.transitions.get(symbol as usize)?;
        (target != NO_STATE).then_some(target)
    }

    /// All defined transitions as `(symbol, target)` pairs in symbol order
    pub fn transitions(&self) -> impl Iterator<Item = (u8, StateId)> + '_ {
        self.transitions
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != NO_STATE)
            .map(|(c, &t)| (c as u8, t))
    }

    /// Children of this state in the suffix-link tree
    #[inline]
    pub fn inverse_suffix_links(&self) -> &[StateId] {
        &self.inverse_suffix_links
    }

    /// Word that was being scanned when this state was created
    #[inline]
    pub fn origin_word(&self) -> Option<WordId> {
        (self.origin_word != NO_WORD).then_some(self.origin_word)
    }

    /// Clones are the only non-root states without an origin word
    #[inline]
    pub fn is_clone(&self) -> bool {
        self.origin_word == NO_WORD && self.length > 0
    }
}

/// Configuration for query execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Default cap on returned word indices (default: 10)
    pub max_results: usize,
    /// Batch size from which batch queries run in parallel (default: 64)
    pub parallel_batch_threshold: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            parallel_batch_threshold: 64,
        }
    }
}

impl SuggestConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(content: &str) -> SuggestResult<Self> {
        let config: SuggestConfig = serde_json::from_str(content)
            .map_err(|e| SuggestError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = Self::from_json_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Check that all values are in range
    pub fn validate(&self) -> SuggestResult<()> {
        if self.parallel_batch_threshold == 0 {
            return Err(SuggestError::Config(
                "parallel_batch_threshold must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Automaton statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AutomatonStats {
    /// Total number of states, including the root
    pub state_count: u64,
    /// Number of states created by splitting
    pub clone_count: u64,
    /// Number of defined transitions
    pub transition_count: u64,
    /// Number of dictionary words
    pub word_count: u32,
    /// Length of the separator-joined corpus
    pub corpus_len: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_blank() {
        let state = State::new(3, 1);
        assert_eq!(state.len(), 3);
        assert_eq!(state.suffix_link(), None);
        assert_eq!(state.next(b'a'), None);
        assert_eq!(state.transitions().count(), 0);
        assert_eq!(state.origin_word(), Some(1));
        assert!(!state.is_clone());
        assert!(!state.is_root());
        assert!(State::new(0, NO_WORD).is_root());
    }

    #[test]
    fn test_next_out_of_range() {
        let state = State::new(0, NO_WORD);
        assert_eq!(state.next(0xff), None);
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config = SuggestConfig::from_json_str(r#"{"max_results": 3}"#).unwrap();
        assert_eq!(config.max_results, 3);
        assert_eq!(config.parallel_batch_threshold, 64);
    }

    #[test]
    fn test_config_rejects_zero_threshold() {
        let err = SuggestConfig::from_json_str(r#"{"parallel_batch_threshold": 0}"#).unwrap_err();
        assert!(matches!(err, SuggestError::Config(_)));
    }

    #[test]
    fn test_config_rejects_bad_json() {
        assert!(SuggestConfig::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_config_load_missing_file() {
        let path = std::env::temp_dir().join("suggest_missing_config_does_not_exist.json");
        let err = SuggestConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn test_config_load_file() {
        let path = std::env::temp_dir().join(format!("suggest_config_{}.json", std::process::id()));
        std::fs::write(&path, r#"{"max_results": 5, "parallel_batch_threshold": 2}"#).unwrap();
        let config = SuggestConfig::load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(
            config,
            SuggestConfig {
                max_results: 5,
                parallel_batch_threshold: 2
            }
        );
    }

    #[test]
    fn test_stats_serialize() {
        let stats = AutomatonStats {
            state_count: 4,
            word_count: 1,
            ..Default::default()
        };
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"state_count\":4"));
    }
}
