/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Grammar-driven field value decoder.
//!
//! The decoder walks a field's [`Segment`] list over the value's lines and
//! fills one component per positional slot. Decoding never fails: anything the
//! grammar cannot place is folded into the nearest component so that the
//! encoder reproduces the original text.

use crate::field::Components;
use memchr::memchr_iter;
use smallvec::SmallVec;
use swiftfin_core::splitter::{
    alpha_prefix, numeric_prefix, token_first, token_second, token_second_last,
};
use swiftfin_dictionary::{FieldDef, Segment};
use tracing::debug;

/// Splits a value into lines, accepting both `\n` and `\r\n` terminators.
///
/// An empty value has no lines at all.
#[must_use]
pub fn split_lines(value: &str) -> SmallVec<[&str; 8]> {
    let mut lines = SmallVec::new();
    if value.is_empty() {
        return lines;
    }
    let mut start = 0;
    for end in memchr_iter(b'\n', value.as_bytes()) {
        let line = &value[start..end];
        lines.push(line.strip_suffix('\r').unwrap_or(line));
        start = end + 1;
    }
    lines.push(&value[start..]);
    lines
}

/// Decoder for one field value.
#[derive(Debug)]
pub struct Decoder<'a> {
    /// Grammar being applied.
    def: &'static FieldDef,
    /// Input lines, terminators removed.
    lines: SmallVec<[&'a str; 8]>,
    /// Index of the current line.
    line: usize,
    /// Byte offset inside the current line.
    col: usize,
    /// Index of the first component taken from the current line.
    line_start: Option<usize>,
    /// Components produced so far.
    components: Components,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder for a raw value.
    ///
    /// # Arguments
    /// * `def` - The grammar descriptor
    /// * `value` - The raw field value
    #[must_use]
    pub fn new(def: &'static FieldDef, value: &'a str) -> Self {
        Self {
            def,
            lines: split_lines(value),
            line: 0,
            col: 0,
            line_start: None,
            components: Components::new(),
        }
    }

    /// Decodes the value into exactly `def.arity()` components.
    #[must_use]
    pub fn decode(mut self) -> Components {
        for &segment in self.def.segments {
            if segment.starts_line() && self.line_touched() {
                self.end_line();
            }
            match segment {
                Segment::Fixed(n) => {
                    let token = self.current().map(|rest| take_chars(rest, n));
                    self.push_inline(token);
                }
                Segment::Alpha(n) => {
                    let token = self
                        .current()
                        .and_then(alpha_prefix)
                        .map(|p| &p[..p.len().min(n)]);
                    self.push_inline(token);
                }
                Segment::Number => {
                    let token = self.current().and_then(numeric_prefix);
                    self.push_inline(token);
                }
                Segment::Rest => {
                    let token = self.current();
                    self.push_inline(token);
                }
                Segment::Newline => self.end_line(),
                Segment::Account => self.decode_account(),
                Segment::Lines(n) => self.decode_lines(n),
                Segment::Qualified => self.decode_qualified(),
            }
        }
        self.finish();
        self.components
    }

    fn current(&self) -> Option<&'a str> {
        self.lines.get(self.line).map(|&l| &l[self.col..])
    }

    fn line_touched(&self) -> bool {
        self.line_start.is_some() || self.col > 0
    }

    fn open_line(&mut self) {
        if self.line_start.is_none() {
            self.line_start = Some(self.components.len());
        }
    }

    fn push_inline(&mut self, token: Option<&'a str>) {
        if self.line < self.lines.len() {
            self.open_line();
        }
        let token = token.filter(|t| !t.is_empty());
        if let Some(t) = token {
            self.col += t.len();
        }
        self.components.push(token.map(String::from));
    }

    fn decode_account(&mut self) {
        match self.current().and_then(|l| l.strip_prefix('/')) {
            Some(account) => {
                self.components.push(Some(account.to_string()));
                self.advance();
            }
            None => self.components.push(None),
        }
    }

    fn decode_lines(&mut self, n: usize) {
        for _ in 0..n {
            match self.current() {
                Some(line) => {
                    self.components.push(Some(line.to_string()));
                    self.advance();
                }
                None => self.components.push(None),
            }
        }
    }

    fn decode_qualified(&mut self) {
        let Some(rest) = self.current() else {
            self.components.extend([None, None, None]);
            return;
        };
        self.open_line();
        let structured = rest
            .strip_prefix(':')
            .is_some_and(|body| body.bytes().filter(|&b| b == b'/').count() >= 2);
        if structured {
            self.components.push(Some(
                token_first(rest, Some(":"), "/").unwrap_or("").to_string(),
            ));
            self.components
                .push(token_second(rest, Some(":"), "/").map(String::from));
            self.components.push(Some(
                token_second_last(rest, Some(":"), "/")
                    .unwrap_or("")
                    .to_string(),
            ));
        } else {
            debug!(field = self.def.id, line = rest, "qualified line without qualifier");
            self.components.extend([None, None, Some(rest.to_string())]);
        }
        self.col += rest.len();
    }

    /// Folds the unconsumed tail of the current line and moves to the next one.
    fn end_line(&mut self) {
        if let Some(&line) = self.lines.get(self.line) {
            let leftover = &line[self.col..];
            match self.line_start {
                Some(start) => {
                    let last = self.components[start..]
                        .iter_mut()
                        .rev()
                        .find_map(Option::as_mut);
                    match last {
                        Some(component) => component.push_str(leftover),
                        None => self.components[start] = Some(leftover.to_string()),
                    }
                }
                None if !leftover.is_empty() => {
                    debug!(field = self.def.id, leftover, "line outside grammar");
                    self.fold_trailing(leftover);
                }
                None => {}
            }
        }
        self.advance();
    }

    fn advance(&mut self) {
        self.line += 1;
        self.col = 0;
        self.line_start = None;
    }

    fn finish(&mut self) {
        if self.line < self.lines.len() && self.line_touched() {
            self.end_line();
        }
        if self.line < self.lines.len() {
            let overflow = self.lines[self.line..].join("\n");
            debug!(
                field = self.def.id,
                lines = self.lines.len() - self.line,
                "folding lines beyond grammar"
            );
            self.line = self.lines.len();
            self.fold_trailing(&overflow);
        }
    }

    /// Appends whole lines to the last present component.
    fn fold_trailing(&mut self, text: &str) {
        let last = self.components.iter_mut().rev().find_map(Option::as_mut);
        match last {
            Some(component) => {
                component.push('\n');
                component.push_str(text);
            }
            None => {
                if let Some(first) = self.components.first_mut() {
                    *first = Some(text.to_string());
                }
            }
        }
    }
}

fn take_chars(s: &str, n: usize) -> &str {
    let end = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfin_dictionary::fields::{
        FIELD_11R, FIELD_22F, FIELD_32A, FIELD_50K, FIELD_52A, FIELD_72,
    };

    fn decode(def: &'static FieldDef, value: &str) -> Vec<Option<String>> {
        Decoder::new(def, value).decode().into_vec()
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_split_lines() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\r\nb\nc").as_slice(), &["a", "b", "c"]);
        assert_eq!(split_lines("a\n").as_slice(), &["a", ""]);
        assert_eq!(split_lines("a\rb").as_slice(), &["a\rb"]);
    }

    #[test]
    fn test_decode_multiline_fixed() {
        assert_eq!(
            decode(&FIELD_11R, "100\n091019\n1234123456"),
            vec![some("100"), some("091019"), some("1234"), some("123456")]
        );
    }

    #[test]
    fn test_decode_date_currency_amount() {
        assert_eq!(
            decode(&FIELD_32A, "091019EUR1234,56"),
            vec![some("091019"), some("EUR"), some("1234,56")]
        );
        assert_eq!(
            decode(&FIELD_32A, "091019"),
            vec![some("091019"), None, None]
        );
    }

    #[test]
    fn test_unparsed_tail_is_kept() {
        let components = decode(&FIELD_32A, "091019EUR1234,56XYZ");
        assert_eq!(components[2], some("1234,56XYZ"));
    }

    #[test]
    fn test_decode_account_and_lines() {
        assert_eq!(
            decode(&FIELD_50K, "/12345678\nJOHN DOE\nMAIN STREET 1"),
            vec![some("12345678"), some("JOHN DOE"), some("MAIN STREET 1"), None, None]
        );
        assert_eq!(
            decode(&FIELD_50K, "JOHN DOE"),
            vec![None, some("JOHN DOE"), None, None, None]
        );
    }

    #[test]
    fn test_decode_party_identifier() {
        assert_eq!(
            decode(&FIELD_52A, "/D/123\nDEUTDEFF"),
            vec![some("D/123"), some("DEUTDEFF")]
        );
        assert_eq!(decode(&FIELD_52A, "DEUTDEFF"), vec![None, some("DEUTDEFF")]);
    }

    #[test]
    fn test_decode_qualified() {
        assert_eq!(
            decode(&FIELD_22F, ":SFRE//DAIL"),
            vec![some("SFRE"), None, some("DAIL")]
        );
        assert_eq!(
            decode(&FIELD_22F, ":SFRE/ISSR/A/B"),
            vec![some("SFRE"), some("ISSR"), some("A/B")]
        );
        assert_eq!(
            decode(&FIELD_22F, "FREE TEXT"),
            vec![None, None, some("FREE TEXT")]
        );
    }

    #[test]
    fn test_qualified_blank_lines_stay_in_value() {
        assert_eq!(decode(&FIELD_22F, "\n\nX"), vec![None, None, some("\n\nX")]);
        assert_eq!(
            decode(&FIELD_22F, ":SFRE//\nX"),
            vec![some("SFRE"), None, some("\nX")]
        );
    }

    #[test]
    fn test_lines_beyond_arity_fold_into_last() {
        let value = "a\nb\nc\nd\ne\nf\ng\nh";
        let components = decode(&FIELD_72, value);
        assert_eq!(components.len(), 6);
        assert_eq!(components[5], some("f\ng\nh"));
    }

    #[test]
    fn test_empty_value() {
        assert!(decode(&FIELD_72, "").iter().all(Option::is_none));
        assert!(decode(&FIELD_11R, "").iter().all(Option::is_none));
    }
}
