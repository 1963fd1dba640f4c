pub(crate) mod collector;
pub mod executor;

pub use executor::{MatchMode, QueryExecutor, by_prefix, by_substring};
