use crate::error::SuggestResult;
use crate::index::automaton::SuffixAutomaton;
use crate::index::types::{ROOT, StateId, SuggestConfig, WordId};
use crate::query::collector::collect_occurrences;
use crate::utils::alphabet::{SEPARATOR, validate_symbols};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// How a query is matched against dictionary words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Word contains the query anywhere
    #[default]
    Substring,
    /// Word starts with the query
    Prefix,
}

/// Find the words containing `substring`
///
/// Returns at most `max_results` word indices in ascending order. A query
/// that does not occur in the dictionary yields an empty result; a query
/// with bytes outside the alphabet is an error.
pub fn by_substring(
    automaton: &SuffixAutomaton,
    substring: &str,
    max_results: usize,
) -> SuggestResult<Vec<WordId>> {
    check_query(substring)?;
    Ok(collect_from(
        automaton,
        automaton.walk(ROOT, substring.as_bytes()),
        max_results,
    ))
}

/// Find the words starting with `prefix`
///
/// Same as [`by_substring`] with the query anchored right after a word
/// separator.
pub fn by_prefix(
    automaton: &SuffixAutomaton,
    prefix: &str,
    max_results: usize,
) -> SuggestResult<Vec<WordId>> {
    check_query(prefix)?;
    let anchored = automaton
        .walk(ROOT, &[SEPARATOR])
        .and_then(|start| automaton.walk(start, prefix.as_bytes()));
    Ok(collect_from(automaton, anchored, max_results))
}

fn check_query(query: &str) -> SuggestResult<()> {
    validate_symbols(query).inspect_err(|err| trace!(%err, "rejected query"))
}

fn collect_from(
    automaton: &SuffixAutomaton,
    node: Option<StateId>,
    max_results: usize,
) -> Vec<WordId> {
    match node {
        Some(node) => collect_occurrences(automaton, node, max_results)
            .iter()
            .collect(),
        None => Vec::new(),
    }
}

/// Query executor
pub struct QueryExecutor<'a> {
    automaton: &'a SuffixAutomaton,
    config: SuggestConfig,
}

impl<'a> QueryExecutor<'a> {
    pub fn new(automaton: &'a SuffixAutomaton) -> Self {
        Self {
            automaton,
            config: SuggestConfig::default(),
        }
    }

    /// Create executor with custom configuration
    pub fn with_config(automaton: &'a SuffixAutomaton, config: SuggestConfig) -> Self {
        Self { automaton, config }
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Execute a query capped at the configured `max_results`
    pub fn search(&self, query: &str, mode: MatchMode) -> SuggestResult<Vec<WordId>> {
        self.search_with_limit(query, mode, self.config.max_results)
    }

    /// Execute a query with an explicit cap
    pub fn search_with_limit(
        &self,
        query: &str,
        mode: MatchMode,
        max_results: usize,
    ) -> SuggestResult<Vec<WordId>> {
        match mode {
            MatchMode::Substring => by_substring(self.automaton, query, max_results),
            MatchMode::Prefix => by_prefix(self.automaton, query, max_results),
        }
    }

    /// Execute many queries, one result per query in input order
    ///
    /// Batches of at least `parallel_batch_threshold` queries are spread over
    /// the rayon thread pool.
    pub fn search_batch<S>(&self, queries: &[S], mode: MatchMode) -> Vec<SuggestResult<Vec<WordId>>>
    where
        S: AsRef<str> + Sync,
    {
        if queries.len() >= self.config.parallel_batch_threshold {
            queries
                .par_iter()
                .map(|q| self.search(q.as_ref(), mode))
                .collect()
        } else {
            queries
                .iter()
                .map(|q| self.search(q.as_ref(), mode))
                .collect()
        }
    }
}
