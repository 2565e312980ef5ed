/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Greedy word wrapping for narrative lines.

use std::borrow::Cow;

/// A word to place on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: Cow<'a, str>,
    /// Joined to the previous word without a space.
    pub glued: bool,
}

impl<'a> Token<'a> {
    pub fn word(text: &'a str) -> Self {
        Self {
            text: Cow::Borrowed(text),
            glued: false,
        }
    }

    pub fn glued(text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            text: text.into(),
            glued: true,
        }
    }
}

/// Splits text into words on whitespace.
pub(crate) fn words(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.split_whitespace().map(Token::word)
}

/// Splits text after each space, keeping the spaces.
///
/// Packed lines joined without a separator give back the text.
pub(crate) fn spaced_words(text: &str) -> impl Iterator<Item = Token<'_>> {
    text.split_inclusive(' ').map(Token::glued)
}

/// Packs tokens into lines.
///
/// The first line holds at most `first` characters, later lines at most
/// `next`; a first line with no room stays empty. A word that does not fit
/// moves to the next line and is split only when it is longer than any line
/// can hold. Always returns at least one, possibly empty, line.
pub(crate) fn pack<'a>(
    tokens: impl IntoIterator<Item = Token<'a>>,
    first: usize,
    next: usize,
) -> Vec<String> {
    let next = next.max(1);
    let mut lines = vec![String::new()];
    let mut capacity = first;
    let mut used = 0;

    for token in tokens {
        let mut text: &str = &token.text;
        let mut glued = token.glued;
        while !text.is_empty() {
            let len = text.chars().count();
            let gap = usize::from(used > 0 && !glued);
            if used + gap + len <= capacity {
                let Some(line) = lines.last_mut() else { break };
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(text);
                used += gap + len;
                break;
            }
            if used == 0 && capacity > 0 && len > capacity.max(next) {
                let split = text
                    .char_indices()
                    .nth(capacity)
                    .map_or(text.len(), |(i, _)| i);
                if let Some(line) = lines.last_mut() {
                    line.push_str(&text[..split]);
                }
                text = &text[split..];
                glued = true;
            }
            lines.push(String::new());
            capacity = next;
            used = 0;
        }
    }
    if lines.len() > 1 && lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_never_splits_words() {
        let text = "JOHN DOE HAS GONE TO AMSTERDAM AND FROM THERE HE GOES TO PARIS AND";
        let lines = pack(words(text), 30, 33);
        assert_eq!(
            lines,
            vec![
                "JOHN DOE HAS GONE TO AMSTERDAM",
                "AND FROM THERE HE GOES TO PARIS",
                "AND"
            ]
        );
    }

    #[test]
    fn test_pack_hard_splits_overlong_word() {
        let lines = pack(words("AB ABCDEFGHIJ"), 4, 4);
        assert_eq!(lines, vec!["AB", "ABCD", "EFGH", "IJ"]);
    }

    #[test]
    fn test_pack_glued_token() {
        let tokens = words("NARRATIVE").chain([Token::glued("//SUPP".to_string())]);
        assert_eq!(pack(tokens, 20, 20), vec!["NARRATIVE//SUPP"]);
        let tokens = words("NARRATIVE").chain([Token::glued("//SUPP".to_string())]);
        assert_eq!(pack(tokens, 10, 10), vec!["NARRATIVE", "//SUPP"]);
    }

    #[test]
    fn test_pack_moves_word_off_short_first_line() {
        let lines = pack(words("HTTPS://EXAMPLE.COM/ABCDEFGH"), 25, 33);
        assert_eq!(lines, vec!["", "HTTPS://EXAMPLE.COM/ABCDEFGH"]);
        let lines = pack(words("AB CDEFGH"), 5, 10);
        assert_eq!(lines, vec!["AB", "CDEFGH"]);
    }

    #[test]
    fn test_pack_first_line_without_room() {
        assert_eq!(pack(words("A B"), 0, 10), vec!["", "A B"]);
        assert_eq!(pack(words(""), 0, 10), vec![String::new()]);
    }

    #[test]
    fn test_pack_splits_word_longer_than_any_line() {
        let lines = pack(words("ABCDEFGHIJKL"), 3, 10);
        assert_eq!(lines, vec!["ABC", "DEFGHIJKL"]);
    }

    #[test]
    fn test_pack_spaced_words_keeps_spaces() {
        let text = "INVOICE NUMBER 1234";
        let lines = pack(spaced_words(text), 10, 10);
        assert_eq!(lines, vec!["INVOICE ", "NUMBER ", "1234"]);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_pack_empty() {
        assert_eq!(pack(words(""), 10, 10), vec![String::new()]);
    }
}
