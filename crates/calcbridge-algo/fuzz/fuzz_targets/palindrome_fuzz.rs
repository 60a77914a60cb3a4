//! Palindrome checker fuzzer
//!
//! Contract:
//! - `is_palindrome` never panics on valid UTF-8
//! - a positive answer means the filtered letters are symmetric

#![no_main]

use calcbridge_algo::is_palindrome;
use calcbridge_algo::text::letters;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    if is_palindrome(input) {
        let forward = letters(input);
        assert!(
            forward.iter().eq(forward.iter().rev()),
            "reported palindrome for {:?} but letters are not symmetric",
            input
        );
    }
});
