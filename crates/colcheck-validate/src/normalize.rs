//! Column header normalization.
//!
//! Headers are folded to a canonical lowercase, `_`-delimited form:
//!
//! 1. lowercase
//! 2. every non-word character becomes `_`
//! 3. `_` is stripped from both ends
//! 4. runs of `_` collapse to one
//!
//! Word characters follow the Unicode definition of `\w` (letters, digits,
//! connector punctuation), so accented letters survive normalization.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// Separator that replaces non-word characters.
pub const SEPARATOR: char = '_';

static NON_WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w]").expect("Invalid non-word regex"));

static SEPARATOR_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| run_regex(SEPARATOR));

/// Normalizes a single column header.
///
/// Total and idempotent: `normalize_header(normalize_header(s)) ==
/// normalize_header(s)` for every input, and a header made only of
/// punctuation normalizes to the empty string.
///
/// # Examples
///
/// ```
/// use colcheck_validate::normalize_header;
///
/// assert_eq!(normalize_header("A--b__C"), "a_b_c");
/// assert_eq!(normalize_header(" Customer Name "), "customer_name");
/// assert_eq!(normalize_header("___"), "");
/// ```
pub fn normalize_header(name: &str) -> String {
    let lowered = name.to_lowercase();
    let separated = NON_WORD_REGEX.replace_all(&lowered, "_");
    let trimmed = separated.trim_matches(SEPARATOR);
    replace_consecutive_chars(trimmed, SEPARATOR)
}

/// Normalizes every header in order.
pub fn normalize_headers<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| normalize_header(name.as_ref()))
        .collect()
}

/// Collapses runs of two or more `ch` into a single occurrence.
///
/// Runs of any length collapse; other characters are left untouched.
///
/// # Examples
///
/// ```
/// use colcheck_validate::replace_consecutive_chars;
///
/// assert_eq!(replace_consecutive_chars("a___b", '_'), "a_b");
/// assert_eq!(replace_consecutive_chars("abc", '_'), "abc");
/// assert_eq!(replace_consecutive_chars("x--y-z", '-'), "x-y-z");
/// ```
pub fn replace_consecutive_chars(input: &str, ch: char) -> String {
    let mut buf = [0u8; 4];
    let literal: &str = ch.encode_utf8(&mut buf);
    if ch == SEPARATOR {
        return SEPARATOR_RUN_REGEX
            .replace_all(input, NoExpand(literal))
            .into_owned();
    }
    run_regex(ch)
        .replace_all(input, NoExpand(literal))
        .into_owned()
}

/// Matches two or more consecutive `ch`.
fn run_regex(ch: char) -> Regex {
    let pattern = format!("(?:{}){{2,}}", regex::escape(&ch.to_string()));
    Regex::new(&pattern).expect("escaped literal is a valid pattern")
}

/// Returns true if `name` is already in canonical form.
pub fn is_normalized(name: &str) -> bool {
    normalize_header(name) == name
}
