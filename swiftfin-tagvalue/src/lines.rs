/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Line addressing for multi-line field values.
//!
//! Lines are numbered from 1 over the serialized value. The `*_from`
//! variants restart numbering at a component: the first returned line begins
//! with that component's text, and delimiters rendered before it are dropped.

use crate::encoder::Encoder;
use crate::field::Field;

impl Field {
    /// Returns all lines of the value.
    ///
    /// An empty value has no lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let value = self.value();
        if value.is_empty() {
            return Vec::new();
        }
        value.split('\n').map(String::from).collect()
    }

    /// Returns the number of lines in the value.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines().len()
    }

    /// Returns the 1-based line `n`, or `None` if it does not exist.
    #[must_use]
    pub fn line(&self, n: usize) -> Option<String> {
        pick(self.lines(), n)
    }

    /// Returns line `n` counted from the 1-based component `offset`.
    #[must_use]
    pub fn line_from(&self, n: usize, offset: usize) -> Option<String> {
        pick(self.lines_starting_at(offset), n)
    }

    /// Returns lines `from` through `to`, both inclusive and 1-based.
    ///
    /// Lines past the end are skipped; an inverted range is empty.
    #[must_use]
    pub fn lines_between(&self, from: usize, to: usize) -> Vec<String> {
        slice(self.lines(), from, to)
    }

    /// Returns lines `from` through `to` counted from the 1-based component `offset`.
    #[must_use]
    pub fn lines_between_from(&self, from: usize, to: usize, offset: usize) -> Vec<String> {
        slice(self.lines_starting_at(offset), from, to)
    }

    fn lines_starting_at(&self, offset: usize) -> Vec<String> {
        let rendered = Encoder::new(self.def()).render(self.raw_components());
        let mut text: Option<String> = None;
        for line in &rendered {
            match text.as_mut() {
                Some(out) => {
                    out.push('\n');
                    line.iter().for_each(|p| out.push_str(&p.text));
                }
                None => {
                    let start = line
                        .iter()
                        .position(|p| p.component.is_some_and(|c| c >= offset));
                    if let Some(start) = start {
                        text = Some(line[start..].iter().map(|p| p.text.as_ref()).collect());
                    }
                }
            }
        }
        text.map(|t| t.split('\n').map(String::from).collect())
            .unwrap_or_default()
    }
}

fn pick(lines: Vec<String>, n: usize) -> Option<String> {
    n.checked_sub(1).and_then(|i| lines.into_iter().nth(i))
}

fn slice(lines: Vec<String>, from: usize, to: usize) -> Vec<String> {
    if from == 0 || from > to {
        return Vec::new();
    }
    lines.into_iter().skip(from - 1).take(to - from + 1).collect()
}

#[cfg(test)]
mod tests {
    use crate::field::Field;
    use swiftfin_dictionary::fields::{FIELD_20C, FIELD_50K, FIELD_72};

    const FIELD_72_VALUE: &str = "/INS/ABNANL2A\n//SECOND LINE\n/ACC/THIRD\n//FOURTH";

    #[test]
    fn test_line_access() {
        let field = Field::parse(&FIELD_72, FIELD_72_VALUE);
        assert_eq!(field.line_count(), 4);
        assert_eq!(field.line(1).as_deref(), Some("/INS/ABNANL2A"));
        assert_eq!(field.line(4).as_deref(), Some("//FOURTH"));
        assert_eq!(field.line(0), None);
        assert_eq!(field.line(5), None);
    }

    #[test]
    fn test_lines_between() {
        let field = Field::parse(&FIELD_72, FIELD_72_VALUE);
        assert_eq!(field.lines_between(2, 3), vec!["//SECOND LINE", "/ACC/THIRD"]);
        assert_eq!(field.lines_between(3, 10), vec!["/ACC/THIRD", "//FOURTH"]);
        assert!(field.lines_between(3, 2).is_empty());
        assert!(field.lines_between(0, 2).is_empty());
    }

    #[test]
    fn test_lines_from_component_offset() {
        let field = Field::parse(&FIELD_50K, "/12345\nJOHN DOE\nMAIN STREET");
        assert_eq!(field.line(1).as_deref(), Some("/12345"));
        assert_eq!(field.line_from(1, 1).as_deref(), Some("/12345"));
        assert_eq!(field.line_from(1, 2).as_deref(), Some("JOHN DOE"));
        assert_eq!(field.line_from(2, 2).as_deref(), Some("MAIN STREET"));
        assert_eq!(field.line_from(3, 2), None);
        assert_eq!(
            field.lines_between_from(1, 5, 3),
            vec!["MAIN STREET".to_string()]
        );
    }

    #[test]
    fn test_offset_strips_leading_delimiters() {
        let field = Field::parse(&FIELD_20C, ":SEME//REF");
        assert_eq!(field.line(1).as_deref(), Some(":SEME//REF"));
        assert_eq!(field.line_from(1, 1).as_deref(), Some("SEME//REF"));
        assert_eq!(field.line_from(1, 3).as_deref(), Some("REF"));
    }

    #[test]
    fn test_empty_field_has_no_lines() {
        let field = Field::new(&FIELD_72);
        assert_eq!(field.line_count(), 0);
        assert_eq!(field.line(1), None);
        assert_eq!(field.line_from(1, 2), None);
    }
}
