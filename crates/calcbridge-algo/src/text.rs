//! Text and byte helpers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_properties::{GeneralCategoryGroup, UnicodeGeneralCategory};

/// The letters of `s`, lowercased, with everything else dropped
///
/// Each char is lowercased on its own (no final-sigma context), and only the
/// Unicode Letter categories (Lu, Ll, Lt, Lm, Lo) are kept. Marks and letter
/// numbers are dropped.
///
/// This is the form `is_palindrome` compares against its reverse.
pub fn letters(s: &str) -> Vec<char> {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.general_category_group() == GeneralCategoryGroup::Letter)
        .collect()
}

/// Whether `s` reads the same backwards, ignoring case and non-letters
///
/// Letters are Unicode aware; digits, spaces and punctuation are ignored.
///
/// ```
/// # use calcbridge_algo::is_palindrome;
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(is_palindrome("aA"));
/// assert!(!is_palindrome("hello"));
/// ```
pub fn is_palindrome(s: &str) -> bool {
    let letters = letters(s);
    letters.iter().eq(letters.iter().rev())
}

/// How many occurrences `replace_with_mode` rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplaceMode {
    /// Every non-overlapping occurrence
    #[default]
    All,
    /// Only the first occurrence
    First,
    /// Nothing; the input is returned as is
    None,
}

impl ReplaceMode {
    fn limit(self) -> Option<usize> {
        match self {
            ReplaceMode::All => None,
            ReplaceMode::First => Some(1),
            ReplaceMode::None => Some(0),
        }
    }
}

impl fmt::Display for ReplaceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReplaceMode::All => "all",
            ReplaceMode::First => "first",
            ReplaceMode::None => "none",
        })
    }
}

impl FromStr for ReplaceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(ReplaceMode::All),
            "first" => Ok(ReplaceMode::First),
            "none" => Ok(ReplaceMode::None),
            other => Err(format!(
                "unknown replace mode '{}' (expected 'all', 'first' or 'none')",
                other
            )),
        }
    }
}

/// Replace occurrences of `old` in `s` with `new`, scanning left to right
///
/// An empty `old` matches at the start and after every UTF-8 sequence.
///
/// ```
/// # use calcbridge_algo::{replace_with_mode, ReplaceMode};
/// assert_eq!(replace_with_mode(b"go gopher go", b"go", b"Go", ReplaceMode::First), b"Go gopher go");
/// ```
pub fn replace_with_mode(s: &[u8], old: &[u8], new: &[u8], mode: ReplaceMode) -> Vec<u8> {
    let mut remaining = mode.limit();
    let mut out = Vec::with_capacity(s.len());
    let mut i = 0;

    loop {
        if remaining == Some(0) {
            break;
        }
        let Some(at) = find(s, old, i) else {
            break;
        };
        out.extend_from_slice(&s[i..at]);
        out.extend_from_slice(new);
        if let Some(n) = remaining.as_mut() {
            *n -= 1;
        }

        if old.is_empty() {
            if at == s.len() {
                return out;
            }
            let next = next_boundary(s, at);
            out.extend_from_slice(&s[at..next]);
            i = next;
        } else {
            i = at + old.len();
        }
    }

    out.extend_from_slice(&s[i..]);
    out
}

/// Position of the first occurrence of `needle` in `haystack[from..]`
fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() {
        return (from <= haystack.len()).then_some(from);
    }
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|p| p + from)
}

/// End of the UTF-8 sequence starting at `i`; an invalid byte counts as one
fn next_boundary(s: &[u8], i: usize) -> usize {
    let width = match s[i] {
        0x00..=0x7F => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    };
    let end = (i + width).min(s.len());
    if std::str::from_utf8(&s[i..end]).is_ok() {
        end
    } else {
        i + 1
    }
}
