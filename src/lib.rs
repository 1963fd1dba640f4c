//! # suggest - substring and prefix suggestions
//!
//! `suggest` indexes a fixed dictionary of short ASCII strings so that a
//! query resolves to the words containing it (or starting with it) in time
//! proportional to the query and the answer, never to the dictionary size.
//! It targets suggestion boxes, command palettes and similar autocomplete
//! surfaces over small-to-medium vocabularies.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`index`] - Generalized suffix automaton construction and the immutable automaton
//! - [`query`] - Substring and prefix search over a built automaton
//! - [`suggest`] - Word-returning convenience layer over an owned dictionary
//! - [`utils`] - Alphabet boundary and validation
//! - [`error`] - Error types
//!
//! ## Quick Start
//!
//! ```
//! use suggest::{build_automaton, by_prefix, by_substring, MAX_RESULTS_UNLIMITED};
//!
//! let automaton = build_automaton(["ab", "tab", "abab", "azb", "abz"]).unwrap();
//!
//! assert_eq!(by_substring(&automaton, "z", MAX_RESULTS_UNLIMITED).unwrap(), vec![3, 4]);
//! assert_eq!(by_substring(&automaton, "ab", MAX_RESULTS_UNLIMITED).unwrap(), vec![0, 1, 2, 4]);
//! assert_eq!(by_prefix(&automaton, "ab", MAX_RESULTS_UNLIMITED).unwrap(), vec![0, 2, 4]);
//! ```
//!
//! ## How it works
//!
//! Words are joined into one corpus, each prefixed with a `0x00` separator,
//! and a suffix automaton is built over it online. Every state created while
//! scanning a byte is tagged with the word being scanned. A query walks the
//! automaton to the state of the query string; the words in that state's
//! suffix-link subtree are exactly the words containing the query. Prefix
//! queries anchor the walk behind the separator.
//!
//! The automaton is immutable once built and can be queried concurrently.

pub mod error;
pub mod index;
pub mod query;
pub mod suggest;
pub mod utils;

pub use error::{SuggestError, SuggestResult};
pub use index::{
    AutomatonBuilder, AutomatonStats, MAX_RESULTS_UNLIMITED, State, StateId, SuffixAutomaton,
    SuggestConfig, WordId, build_automaton,
};
pub use query::{MatchMode, QueryExecutor, by_prefix, by_substring};
pub use suggest::Suggester;
