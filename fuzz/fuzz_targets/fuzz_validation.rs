#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Validation must agree with a byte-by-byte check
    let valid = data.bytes().all(suggest::utils::is_word_symbol);
    assert_eq!(suggest::utils::validate_symbols(data).is_ok(), valid);
});
