/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Field value encoder.
//!
//! The encoder is the inverse of the decoder: it walks the same segment list
//! and re-inserts every delimiter the grammar implies. Absent components
//! contribute nothing, and lines left empty are dropped.

use smallvec::{SmallVec, smallvec};
use std::borrow::Cow;
use swiftfin_core::types::SWIFT_EOL;
use swiftfin_dictionary::{FieldDef, Segment};

/// One rendered piece of a line: component text or a grammar delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece<'a> {
    /// 1-based component index, `None` for delimiters.
    pub component: Option<usize>,
    /// Text as it appears in the value.
    pub text: Cow<'a, str>,
}

impl<'a> Piece<'a> {
    fn component(n: usize, text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            component: Some(n),
            text: text.into(),
        }
    }

    const fn delimiter(text: &'static str) -> Self {
        Self {
            component: None,
            text: Cow::Borrowed(text),
        }
    }
}

/// A rendered line.
pub type RenderedLine<'a> = SmallVec<[Piece<'a>; 4]>;

/// Encoder for one field grammar.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    def: &'static FieldDef,
}

impl Encoder {
    /// Creates an encoder for a grammar.
    #[inline]
    #[must_use]
    pub const fn new(def: &'static FieldDef) -> Self {
        Self { def }
    }

    /// Renders components into lines of pieces.
    ///
    /// Components are 0-based in the slice; pieces carry 1-based indices.
    #[must_use]
    pub fn render<'a>(&self, components: &'a [Option<String>]) -> Vec<RenderedLine<'a>> {
        let get = |i: usize| components.get(i).and_then(Option::as_deref);
        let mut lines: Vec<RenderedLine<'a>> = Vec::new();
        let mut current = RenderedLine::new();
        let mut idx = 0;

        for &segment in self.def.segments {
            match segment {
                Segment::Fixed(_) | Segment::Alpha(_) | Segment::Number | Segment::Rest => {
                    if let Some(text) = get(idx) {
                        current.push(Piece::component(idx + 1, text));
                    }
                    idx += 1;
                }
                Segment::Newline => lines.push(std::mem::take(&mut current)),
                Segment::Account => {
                    flush(&mut lines, &mut current);
                    if let Some(account) = get(idx) {
                        lines.push(smallvec![Piece::component(idx + 1, format!("/{account}"))]);
                    }
                    idx += 1;
                }
                Segment::Lines(n) => {
                    flush(&mut lines, &mut current);
                    for k in idx..idx + n {
                        if let Some(text) = get(k) {
                            lines.push(smallvec![Piece::component(k + 1, text)]);
                        }
                    }
                    idx += n;
                }
                Segment::Qualified => {
                    let (qualifier, issuer, value) = (get(idx), get(idx + 1), get(idx + 2));
                    if qualifier.is_some() || issuer.is_some() {
                        current.push(Piece::delimiter(":"));
                        if let Some(q) = qualifier {
                            current.push(Piece::component(idx + 1, q));
                        }
                        current.push(Piece::delimiter("/"));
                        if let Some(i) = issuer {
                            current.push(Piece::component(idx + 2, i));
                        }
                        current.push(Piece::delimiter("/"));
                    }
                    if let Some(v) = value {
                        current.push(Piece::component(idx + 3, v));
                    }
                    idx += 3;
                }
            }
        }
        flush(&mut lines, &mut current);
        lines.retain(|line| !line.is_empty());
        lines
    }

    /// Encodes components using `\n` between lines.
    #[must_use]
    pub fn encode(&self, components: &[Option<String>]) -> String {
        self.encode_with(components, "\n")
    }

    /// Encodes components using the SWIFT line terminator.
    #[must_use]
    pub fn encode_wire(&self, components: &[Option<String>]) -> String {
        self.encode(components).replace('\n', SWIFT_EOL)
    }

    fn encode_with(&self, components: &[Option<String>], eol: &str) -> String {
        let mut out = String::new();
        for (i, line) in self.render(components).iter().enumerate() {
            if i > 0 {
                out.push_str(eol);
            }
            for piece in line {
                out.push_str(&piece.text);
            }
        }
        out
    }
}

fn flush<'a>(lines: &mut Vec<RenderedLine<'a>>, current: &mut RenderedLine<'a>) {
    if !current.is_empty() {
        lines.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;
    use swiftfin_dictionary::fields::{
        FIELD_11R, FIELD_20C, FIELD_22F, FIELD_32A, FIELD_50K, FIELD_52A, FIELD_72,
    };

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn test_encode_multiline() {
        let components = [some("100"), some("091019"), some("1234"), some("123456")];
        let encoder = Encoder::new(&FIELD_11R);
        assert_eq!(encoder.encode(&components), "100\n091019\n1234123456");
        assert_eq!(
            encoder.encode_wire(&components),
            "100\r\n091019\r\n1234123456"
        );
    }

    #[test]
    fn test_absent_components_contribute_nothing() {
        let encoder = Encoder::new(&FIELD_32A);
        assert_eq!(encoder.encode(&[some("091019"), None, some("1,")]), "0910191,");
        assert_eq!(encoder.encode(&[None, None, None]), "");
    }

    #[test]
    fn test_encode_account_lines() {
        let encoder = Encoder::new(&FIELD_50K);
        let components = [some("123"), some("JOHN"), None, some("CITY"), None];
        assert_eq!(encoder.encode(&components), "/123\nJOHN\nCITY");
        assert_eq!(
            Encoder::new(&FIELD_52A).encode(&[None, some("DEUTDEFF")]),
            "DEUTDEFF"
        );
    }

    #[test]
    fn test_encode_qualified() {
        let encoder = Encoder::new(&FIELD_20C);
        assert_eq!(
            encoder.encode(&[some("SEME"), None, some("REF")]),
            ":SEME//REF"
        );
        assert_eq!(encoder.encode(&[None, None, some("REF")]), "REF");
    }

    #[test]
    fn test_render_marks_delimiters() {
        let components = [some("SEME"), some("ISSR"), some("REF")];
        let lines = Encoder::new(&FIELD_20C).render(&components);
        assert_eq!(lines.len(), 1);
        let indices: Vec<_> = lines[0].iter().map(|p| p.component).collect();
        assert_eq!(
            indices,
            vec![None, Some(1), None, Some(2), None, Some(3)]
        );
    }

    #[test]
    fn test_round_trip_preserves_value() {
        let cases: [(&'static FieldDef, &str); 10] = [
            (&FIELD_11R, "100\n091019\n1234123456"),
            (&FIELD_32A, "091019EUR1234,56"),
            (&FIELD_32A, "091019EUR1234,56XYZ"),
            (&FIELD_50K, "/12345678\nJOHN DOE\nMAIN STREET 1"),
            (&FIELD_72, "/INS/ABNANL2A\n//MORE\n/ACC/X"),
            (&FIELD_20C, ":SEME//REF/1"),
            (&FIELD_20C, "\n"),
            (&FIELD_22F, "\n\nX"),
            (&FIELD_22F, "X\n\n"),
            (&FIELD_22F, ":SFRE//\nX"),
        ];
        for (def, value) in cases {
            let components = Decoder::new(def, value).decode();
            assert_eq!(Encoder::new(def).encode(&components), value, "{}", def.id);
        }
    }
}
