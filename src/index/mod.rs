pub mod automaton;
pub mod builder;
pub mod types;

pub use automaton::SuffixAutomaton;
pub use builder::{AutomatonBuilder, build_automaton};
pub use types::*;
