#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    words: Vec<String>,
    query: String,
    max_results: u8,
    prefix: bool,
}

fuzz_target!(|input: Input| {
    // Words outside the alphabet must be rejected, never misindexed
    let Ok(automaton) = suggest::build_automaton(&input.words) else {
        return;
    };

    let result = if input.prefix {
        suggest::by_prefix(&automaton, &input.query, input.max_results as usize)
    } else {
        suggest::by_substring(&automaton, &input.query, input.max_results as usize)
    };
    let Ok(found) = result else {
        return;
    };

    let expected: Vec<u32> = input
        .words
        .iter()
        .enumerate()
        .filter(|(_, w)| {
            if input.prefix {
                w.starts_with(&input.query)
            } else {
                w.contains(&input.query)
            }
        })
        .map(|(i, _)| i as u32)
        .collect();

    assert_eq!(found.len(), expected.len().min(input.max_results as usize));
    assert!(found.iter().all(|w| expected.contains(w)));
});
