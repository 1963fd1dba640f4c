//! Occurrence collection over the suffix-link tree
//!
//! The subtree of a state covers every corpus end position of the strings
//! that state represents. Collecting the origin word of each primary state in
//! that subtree yields exactly the words containing the query.

use crate::index::automaton::SuffixAutomaton;
use crate::index::types::StateId;
use roaring::RoaringBitmap;

/// Collect origin words from the suffix-link subtree rooted at `start`
///
/// Visits the state itself, then each child in creation order, depth first.
/// Before each visit the cap is checked, so when it truncates the result the
/// kept words are the first `max_results` distinct ones in that order.
pub(crate) fn collect_occurrences(
    automaton: &SuffixAutomaton,
    start: StateId,
    max_results: usize,
) -> RoaringBitmap {
    let cap = max_results as u64;
    let mut occurrences = RoaringBitmap::new();
    let mut stack = vec![start];

    while let Some(node) = stack.pop() {
        if occurrences.len() >= cap {
            break;
        }

        let Some(state) = automaton.state(node) else {
            continue;
        };

        if let Some(word) = state.origin_word() {
            occurrences.insert(word);
        }

        // Reverse so the first child is popped first
        stack.extend(state.inverse_suffix_links().iter().rev().copied());
    }

    occurrences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::builder::build_automaton;
    use crate::index::types::{ROOT, WordId};

    /// Straightforward recursive form of the traversal
    fn collect_recursive(
        automaton: &SuffixAutomaton,
        node: StateId,
        max_results: usize,
        out: &mut Vec<WordId>,
    ) {
        if out.len() == max_results {
            return;
        }
        let state = automaton.state(node).unwrap();
        if let Some(word) = state.origin_word() {
            if !out.contains(&word) {
                out.push(word);
            }
        }
        for &child in state.inverse_suffix_links() {
            collect_recursive(automaton, child, max_results, out);
        }
    }

    #[test]
    fn test_matches_recursive_traversal_for_every_cap() {
        let words = ["ab", "tab", "abab", "azb", "abz", "", "bab", "zz"];
        let automaton = build_automaton(words).unwrap();

        for start in 0..automaton.state_count() as StateId {
            for cap in 0..=words.len() + 1 {
                let mut expected = Vec::new();
                collect_recursive(&automaton, start, cap, &mut expected);
                expected.sort_unstable();

                let got: Vec<WordId> = collect_occurrences(&automaton, start, cap)
                    .iter()
                    .collect();
                assert_eq!(got, expected, "start={} cap={}", start, cap);
            }
        }
    }

    #[test]
    fn test_zero_cap_collects_nothing() {
        let automaton = build_automaton(["a", "b"]).unwrap();
        assert!(collect_occurrences(&automaton, ROOT, 0).is_empty());
    }

    #[test]
    fn test_root_collects_every_word() {
        let automaton = build_automaton(["a", "", "a", "xyz"]).unwrap();
        let all: Vec<WordId> = collect_occurrences(&automaton, ROOT, usize::MAX)
            .iter()
            .collect();
        assert_eq!(all, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        // A single long run of one letter makes the suffix-link tree a path
        let word = "a".repeat(50_000);
        let automaton = build_automaton([word.as_str()]).unwrap();
        let found = collect_occurrences(&automaton, ROOT, usize::MAX);
        assert_eq!(found.len(), 1);
    }
}
