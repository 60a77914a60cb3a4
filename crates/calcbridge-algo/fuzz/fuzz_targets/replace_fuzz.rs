//! Byte replacement fuzzer
//!
//! Splits the input into haystack / pattern / replacement and checks that
//! `ReplaceMode::None` is the identity and `ReplaceMode::All` never panics.

#![no_main]

use calcbridge_algo::{replace_with_mode, ReplaceMode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let old_len = (data[0] as usize) % 4;
    let new_len = (data[1] as usize) % 4;
    let rest = &data[2..];
    if rest.len() < old_len + new_len {
        return;
    }
    let (old, rest) = rest.split_at(old_len);
    let (new, haystack) = rest.split_at(new_len);

    assert_eq!(replace_with_mode(haystack, old, new, ReplaceMode::None), haystack);
    let _ = replace_with_mode(haystack, old, new, ReplaceMode::All);
    let _ = replace_with_mode(haystack, old, new, ReplaceMode::First);
});
