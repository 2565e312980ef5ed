/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Primitive tokenizers for SWIFT field values.
//!
//! These functions know nothing about specific field grammars. They extract
//! character-class runs from either end of a value, and positional tokens
//! delimited by a repeating separator after an optional start marker.
//!
//! All functions are total: they never panic and report "no token" as `None`.
//! Returned slices always borrow from the input.

use memchr::memmem;

/// Returns the longest leading run of ASCII letters.
#[must_use]
pub fn alpha_prefix(s: &str) -> Option<&str> {
    let end = s
        .bytes()
        .position(|b| !b.is_ascii_alphabetic())
        .unwrap_or(s.len());
    non_empty(&s[..end])
}

/// Returns the longest trailing run of ASCII letters.
#[must_use]
pub fn alpha_suffix(s: &str) -> Option<&str> {
    let start = s
        .bytes()
        .rposition(|b| !b.is_ascii_alphabetic())
        .map_or(0, |i| i + 1);
    non_empty(&s[start..])
}

/// Returns the longest leading numeric run.
///
/// A run is one or more digits, optionally followed by a single decimal comma
/// and further digits: `"1234,56EUR"` yields `"1234,56"`, `"123,"` yields `"123,"`.
#[must_use]
pub fn numeric_prefix(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let int_end = digits_from(b, 0);
    if int_end == 0 {
        return None;
    }
    let end = if b.get(int_end) == Some(&b',') {
        digits_from(b, int_end + 1)
    } else {
        int_end
    };
    Some(&s[..end])
}

/// Returns the longest trailing numeric run.
///
/// Mirrors [`numeric_prefix`]: `"EUR1234,56"` yields `"1234,56"` and
/// `"EUR12,"` yields `"12,"`.
#[must_use]
pub fn numeric_suffix(s: &str) -> Option<&str> {
    let b = s.as_bytes();
    let frac_start = digits_back(b, b.len());
    let start = if frac_start > 0 && b[frac_start - 1] == b',' {
        let int_start = digits_back(b, frac_start - 1);
        if int_start < frac_start - 1 {
            int_start
        } else {
            frac_start
        }
    } else {
        frac_start
    };
    non_empty(&s[start..])
}

/// Splits a value into the segments between separators.
///
/// The start marker, if given, is stripped once. A run of characters that
/// only partially matches a multi-character separator stays inside its
/// segment, so `"a//b/c//d"` split by `"//"` yields `["a", "b/c", "d"]`.
/// Empty segments are kept so positions are preserved.
#[must_use]
pub fn split_components<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
) -> Vec<&'a str> {
    let v = strip_start(value, starting);
    if v.is_empty() {
        return Vec::new();
    }
    if separator.is_empty() {
        return vec![v];
    }
    v.split(separator).collect()
}

/// Returns the token before the first separator.
///
/// `token_first(":foo//abc/def////asdsd", Some(":"), "/")` yields `"foo"`.
#[must_use]
pub fn token_first<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
) -> Option<&'a str> {
    token_at(value, starting, separator, 0)
}

/// Returns the token between the first and second separators.
#[must_use]
pub fn token_second<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
) -> Option<&'a str> {
    token_at(value, starting, separator, 1)
}

/// Returns everything after the second separator, separators included.
///
/// `token_second_last("fff/ddd/foo/foo/foo//foo", None, "/")` yields
/// `"foo/foo/foo//foo"`.
#[must_use]
pub fn token_second_last<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
) -> Option<&'a str> {
    tail_after(value, starting, separator, 2)
}

/// Returns the token between the second and third separators.
#[must_use]
pub fn token_third<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
) -> Option<&'a str> {
    token_at(value, starting, separator, 2)
}

/// Returns everything after the third separator, separators included.
#[must_use]
pub fn token_third_last<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
) -> Option<&'a str> {
    tail_after(value, starting, separator, 3)
}

/// Returns the token between the third and fourth separators.
#[must_use]
pub fn token_fourth<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
) -> Option<&'a str> {
    token_at(value, starting, separator, 3)
}

/// Returns everything after the fourth separator, separators included.
#[must_use]
pub fn token_fourth_last<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
) -> Option<&'a str> {
    tail_after(value, starting, separator, 4)
}

/// Strips exactly one leading occurrence of `prefix`.
///
/// A doubled prefix keeps its second occurrence: `remove_prefix("//x", "/")` is `"/x"`.
#[must_use]
pub fn remove_prefix<'a>(value: &'a str, prefix: &str) -> &'a str {
    value.strip_prefix(prefix).unwrap_or(value)
}

/// Returns the byte offset of the `n`-th (0-based) separator occurrence.
fn nth_separator(v: &str, separator: &str, n: usize) -> Option<usize> {
    if separator.is_empty() {
        return None;
    }
    let finder = memmem::Finder::new(separator.as_bytes());
    let mut offset = 0;
    for _ in 0..n {
        let pos = finder.find(&v.as_bytes()[offset..])?;
        offset += pos + separator.len();
    }
    finder.find(&v.as_bytes()[offset..]).map(|pos| offset + pos)
}

fn token_at<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
    n: usize,
) -> Option<&'a str> {
    let v = strip_start(value, starting);
    let start = if n == 0 {
        0
    } else {
        nth_separator(v, separator, n - 1)? + separator.len()
    };
    let rest = &v[start..];
    let end = nth_separator(rest, separator, 0).unwrap_or(rest.len());
    non_empty(&rest[..end])
}

fn tail_after<'a>(
    value: &'a str,
    starting: Option<&str>,
    separator: &str,
    n: usize,
) -> Option<&'a str> {
    let v = strip_start(value, starting);
    let start = nth_separator(v, separator, n - 1)? + separator.len();
    non_empty(&v[start..])
}

fn strip_start<'a>(value: &'a str, starting: Option<&str>) -> &'a str {
    match starting {
        Some(marker) => remove_prefix(value, marker),
        None => value,
    }
}

fn digits_from(b: &[u8], from: usize) -> usize {
    from + b[from.min(b.len())..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count()
}

fn digits_back(b: &[u8], to: usize) -> usize {
    to - b[..to].iter().rev().take_while(|c| c.is_ascii_digit()).count()
}

#[inline]
fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_prefix_suffix() {
        assert_eq!(alpha_prefix("EUR1234,"), Some("EUR"));
        assert_eq!(alpha_prefix("1234EUR"), None);
        assert_eq!(alpha_prefix(""), None);
        assert_eq!(alpha_suffix("1234EUR"), Some("EUR"));
        assert_eq!(alpha_suffix("EUR1234"), None);
        assert_eq!(alpha_suffix("ABC"), Some("ABC"));
    }

    #[test]
    fn test_numeric_prefix() {
        assert_eq!(numeric_prefix("1234,56EUR"), Some("1234,56"));
        assert_eq!(numeric_prefix("123,"), Some("123,"));
        assert_eq!(numeric_prefix("123,4,5"), Some("123,4"));
        assert_eq!(numeric_prefix("123dss"), Some("123"));
        assert_eq!(numeric_prefix(",5"), None);
        assert_eq!(numeric_prefix("EUR"), None);
    }

    #[test]
    fn test_numeric_suffix() {
        assert_eq!(numeric_suffix("EUR1234,56"), Some("1234,56"));
        assert_eq!(numeric_suffix("EUR12,"), Some("12,"));
        assert_eq!(numeric_suffix("abc,5"), Some("5"));
        assert_eq!(numeric_suffix("abc123"), Some("123"));
        assert_eq!(numeric_suffix("abc"), None);
        assert_eq!(numeric_suffix(""), None);
    }

    #[test]
    fn test_split_components() {
        assert_eq!(
            split_components("a//b/c//d", None, "//"),
            vec!["a", "b/c", "d"]
        );
        assert_eq!(
            split_components(":QUAL//VALUE", Some(":"), "//"),
            vec!["QUAL", "VALUE"]
        );
        assert_eq!(split_components("a////b", None, "//"), vec!["a", "", "b"]);
        assert!(split_components("", None, "/").is_empty());
    }

    #[test]
    fn test_token_first() {
        assert_eq!(
            token_first(":foo//abc/def////asdsd", Some(":"), "/"),
            Some("foo")
        );
        assert_eq!(token_first("foo", None, "/"), Some("foo"));
        assert_eq!(token_first("/foo", None, "/"), None);
        assert_eq!(token_first("", None, "/"), None);
    }

    #[test]
    fn test_token_positions() {
        let v = ":QUAL/ISSR/VALUE/X";
        assert_eq!(token_second(v, Some(":"), "/"), Some("ISSR"));
        assert_eq!(token_third(v, Some(":"), "/"), Some("VALUE"));
        assert_eq!(token_fourth(v, Some(":"), "/"), Some("X"));
        assert_eq!(token_second(":QUAL//VALUE", Some(":"), "/"), None);
        assert_eq!(token_third("a/b", None, "/"), None);
    }

    #[test]
    fn test_token_last_variants_keep_separators() {
        assert_eq!(
            token_second_last("fff/ddd/foo/foo/foo//foo", None, "/"),
            Some("foo/foo/foo//foo")
        );
        assert_eq!(
            token_second_last(":QUAL//VALUE/WITH/SLASH", Some(":"), "/"),
            Some("VALUE/WITH/SLASH")
        );
        assert_eq!(token_third_last("a/b/c/d//e", None, "/"), Some("d//e"));
        assert_eq!(token_fourth_last("a/b/c/d/e/f", None, "/"), Some("e/f"));
        assert_eq!(token_fourth_last("a/b/c", None, "/"), None);
        assert_eq!(token_second_last("a/b/", None, "/"), None);
    }

    #[test]
    fn test_remove_prefix_once() {
        assert_eq!(remove_prefix("//x", "/"), "/x");
        assert_eq!(remove_prefix(":QUAL", ":"), "QUAL");
        assert_eq!(remove_prefix("QUAL", ":"), "QUAL");
        assert_eq!(remove_prefix("////x", "//"), "//x");
    }
}
