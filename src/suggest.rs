//! Suggestion index over an owned word list
//!
//! Ties the automaton back to the dictionary so callers get matched words
//! instead of bare indices, as a suggestion box or command palette needs.

use crate::error::SuggestResult;
use crate::index::automaton::SuffixAutomaton;
use crate::index::builder::AutomatonBuilder;
use crate::index::types::{AutomatonStats, SuggestConfig, WordId};
use crate::query::executor::{MatchMode, QueryExecutor};

/// Dictionary plus the automaton built over it
#[derive(Debug, Clone)]
pub struct Suggester {
    words: Vec<String>,
    automaton: SuffixAutomaton,
    config: SuggestConfig,
}

impl Suggester {
    /// Build a suggester over `words`
    ///
    /// Fails if the configuration is invalid or any word falls outside the
    /// alphabet.
    pub fn new<I, S>(words: I, config: SuggestConfig) -> SuggestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        config.validate()?;

        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let mut builder =
            AutomatonBuilder::with_capacity(words.iter().map(|w| w.len() + 1).sum());
        for word in &words {
            builder.add_word(word)?;
        }

        Ok(Self {
            automaton: builder.build(),
            words,
            config,
        })
    }

    /// Build a suggester with default configuration
    pub fn with_defaults<I, S>(words: I) -> SuggestResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(words, SuggestConfig::default())
    }

    /// Matching words in dictionary order, capped at `config.max_results`
    pub fn suggest(&self, query: &str, mode: MatchMode) -> SuggestResult<Vec<&str>> {
        Ok(self
            .suggest_indices(query, mode)?
            .into_iter()
            .filter_map(|id| self.word(id))
            .collect())
    }

    /// Matching word indices in ascending order, capped at `config.max_results`
    pub fn suggest_indices(&self, query: &str, mode: MatchMode) -> SuggestResult<Vec<WordId>> {
        self.executor().search(query, mode)
    }

    /// Query executor sharing this suggester's automaton and configuration
    pub fn executor(&self) -> QueryExecutor<'_> {
        QueryExecutor::with_config(&self.automaton, self.config.clone())
    }

    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id as usize).map(String::as_str)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn automaton(&self) -> &SuffixAutomaton {
        &self.automaton
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn stats(&self) -> AutomatonStats {
        self.automaton.stats()
    }
}
