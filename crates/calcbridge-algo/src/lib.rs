//! Small, self-contained algorithms
//!
//! - `arrays`: two-sum, three-sum, quicksort, Kadane, merge, dedup, rotate,
//!   plus-one, move-zeroes, intersection
//! - `text`: letter-only palindrome check and byte-slice replacement

pub mod arrays;
pub mod text;

pub use text::{is_palindrome, replace_with_mode, ReplaceMode};
