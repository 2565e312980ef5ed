/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Narrative decoding.
//!
//! The resolver is a single-pass, line-at-a-time state machine whose only
//! state is the currently open entry. Each line is one of:
//! - a codeword line `/CODEWORD/...`, which opens a new entry
//! - a `//` continuation, which extends the open entry
//! - anything else, classified by the layout's [`LinePolicy`]
//!
//! Nothing is dropped: text that does not fit the layout becomes narrative
//! or unstructured text.

use crate::narrative::model::{Narrative, StructuredNarrative};
use memchr::{memchr, memchr_iter, memmem};
use swiftfin_core::splitter::numeric_prefix;
use swiftfin_core::types::{
    CountryCode, CurrencyCode, DEFAULT_LINE_WIDTH, MAX_CODEWORD_LEN, parse_amount,
};
use swiftfin_dictionary::{CodewordCharset, FieldDef, LinePolicy, NarrativeLayout};
use swiftfin_tagvalue::{Field, split_lines};
use tracing::{debug, trace};

/// Continuation marker.
const CONTINUATION: &str = "//";

/// Narrative decoding and encoding settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeConfig {
    /// Layout the text follows.
    pub layout: NarrativeLayout,
    /// Maximum characters per line when building.
    pub line_width: usize,
    /// Classification of lines outside the codeword grammar.
    pub line_policy: LinePolicy,
}

impl NarrativeConfig {
    /// Creates a configuration with the layout's defaults.
    ///
    /// # Arguments
    /// * `layout` - The narrative layout
    #[must_use]
    pub const fn new(layout: NarrativeLayout) -> Self {
        Self {
            layout,
            line_width: DEFAULT_LINE_WIDTH,
            line_policy: layout.line_policy(),
        }
    }

    /// Creates the configuration declared by a field grammar.
    ///
    /// # Returns
    /// `None` if the field does not carry narrative text.
    #[must_use]
    pub fn for_field(def: &FieldDef) -> Option<Self> {
        def.narrative
            .map(|layout| Self::new(layout).with_line_width(def.line_width))
    }

    /// Sets the line width.
    #[must_use]
    pub const fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Overrides the layout's line policy.
    #[must_use]
    pub const fn with_line_policy(mut self, policy: LinePolicy) -> Self {
        self.line_policy = policy;
        self
    }
}

/// Decodes narrative text according to a layout.
#[derive(Debug, Clone, Copy)]
pub struct NarrativeResolver {
    config: NarrativeConfig,
}

impl NarrativeResolver {
    /// Creates a resolver.
    #[must_use]
    pub const fn new(config: NarrativeConfig) -> Self {
        Self { config }
    }

    /// Creates the resolver declared by a field grammar.
    #[must_use]
    pub fn for_field(def: &FieldDef) -> Option<Self> {
        NarrativeConfig::for_field(def).map(Self::new)
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &NarrativeConfig {
        &self.config
    }

    /// Decodes a field's value.
    #[must_use]
    pub fn resolve(&self, field: &Field) -> Narrative {
        self.parse(&field.value())
    }

    /// Decodes raw narrative text.
    ///
    /// Both `\n` and `\r\n` are accepted as line terminators.
    #[must_use]
    pub fn parse(&self, value: &str) -> Narrative {
        match self.config.layout {
            NarrativeLayout::Unstructured => Narrative {
                structured: Vec::new(),
                unstructured_fragments: split_lines(value)
                    .into_iter()
                    .map(String::from)
                    .collect(),
            },
            NarrativeLayout::CodewordPairs => parse_pairs(value),
            _ => self.parse_lines(value),
        }
    }

    fn parse_lines(&self, value: &str) -> Narrative {
        let mut narrative = Narrative::new();
        let mut open = false;
        let mut in_supplement = false;

        for line in split_lines(value) {
            if let Some((codeword, rest)) = split_codeword(line, self.config.layout.charset()) {
                let (entry, supplement) = self.open_entry(codeword, rest);
                narrative.structured.push(entry);
                open = true;
                in_supplement = supplement;
                continue;
            }

            let entry = if open {
                narrative.structured.last_mut()
            } else {
                None
            };
            match (line.strip_prefix(CONTINUATION), entry) {
                (Some(text), Some(entry)) => {
                    if in_supplement {
                        entry.push_supplement(text);
                    } else {
                        in_supplement = self.push_text(entry, text);
                    }
                }
                (None, Some(entry)) if self.config.line_policy == LinePolicy::Continue => {
                    trace!(layout = %self.config.layout, line, "line continues open entry");
                    if in_supplement {
                        entry.push_supplement(line);
                    } else {
                        in_supplement = self.push_text(entry, line);
                    }
                }
                _ => {
                    debug!(layout = %self.config.layout, line, "line kept as unstructured text");
                    narrative.unstructured_fragments.push(line.to_string());
                    open = false;
                    in_supplement = false;
                }
            }
        }
        narrative
    }

    /// Builds an entry from the text after the codeword.
    ///
    /// Returns the entry and whether later continuations belong to the supplement.
    fn open_entry(&self, codeword: &str, rest: &str) -> (StructuredNarrative, bool) {
        let mut entry = StructuredNarrative::new(codeword);
        let mut supplement = false;
        match self.config.layout {
            NarrativeLayout::CodewordCountry => match split_country(rest) {
                Some((country, text)) => {
                    entry.country = Some(country);
                    entry.push_narrative(text);
                }
                None => {
                    debug!(codeword, rest, "country token not recognized");
                    entry.push_narrative(rest);
                }
            },
            NarrativeLayout::CodewordAmount { bank_code } => {
                match split_currency_amount(rest, bank_code) {
                    Some(parts) => {
                        entry.bank_code = parts.bank_code;
                        entry.currency = Some(parts.currency);
                        entry.amount = Some(parts.amount);
                        entry.push_narrative(parts.narrative);
                    }
                    None => {
                        debug!(codeword, rest, "currency and amount not recognized");
                        entry.push_narrative(rest);
                    }
                }
            }
            NarrativeLayout::QueryNumber => supplement = self.push_text(&mut entry, rest),
            _ => entry.push_narrative(rest),
        }
        (entry, supplement)
    }

    /// Appends text to an entry, splitting off a supplement for query layouts.
    ///
    /// Returns true once the supplement has started.
    fn push_text(&self, entry: &mut StructuredNarrative, text: &str) -> bool {
        if self.config.layout != NarrativeLayout::QueryNumber {
            entry.push_narrative(text);
            return false;
        }
        match memmem::find(text.as_bytes(), CONTINUATION.as_bytes()) {
            Some(pos) => {
                entry.push_narrative(&text[..pos]);
                entry.push_supplement(&text[pos + CONTINUATION.len()..]);
                true
            }
            None => {
                entry.push_narrative(text);
                false
            }
        }
    }
}

/// Splits `/CODEWORD/rest` into the codeword and the rest.
///
/// The codeword must be 1 to 8 characters from the charset; a line starting
/// with `//` never opens an entry.
fn split_codeword(line: &str, charset: CodewordCharset) -> Option<(&str, &str)> {
    let body = line.strip_prefix('/')?;
    let end = memchr(b'/', body.as_bytes())?;
    let codeword = &body[..end];
    let valid = (1..=MAX_CODEWORD_LEN).contains(&codeword.len())
        && codeword.bytes().all(|b| charset.accepts(b));
    if !valid {
        if !codeword.is_empty() {
            debug!(codeword, "rejected codeword candidate");
        }
        return None;
    }
    Some((codeword, &body[end + 1..]))
}

/// Splits `CC[//narrative]` into the country and the narrative.
fn split_country(rest: &str) -> Option<(CountryCode, &str)> {
    let country = CountryCode::new(rest.get(..2)?)?;
    let tail = &rest[2..];
    if tail.is_empty() {
        return Some((country, tail));
    }
    tail.strip_prefix(CONTINUATION).map(|text| (country, text))
}

struct CurrencyAmount<'a> {
    bank_code: Option<char>,
    currency: CurrencyCode,
    amount: rust_decimal::Decimal,
    narrative: &'a str,
}

/// Splits `[B/]CCC123,45[//][narrative]`.
fn split_currency_amount(rest: &str, bank_code: bool) -> Option<CurrencyAmount<'_>> {
    let mut body = rest;
    let mut bank = None;
    if bank_code {
        let b = body.as_bytes();
        if b.len() >= 2 && b[0].is_ascii_uppercase() && b[1] == b'/' {
            bank = Some(char::from(b[0]));
            body = &body[2..];
        }
    }
    let currency = CurrencyCode::new(body.get(..3)?)?;
    let number = numeric_prefix(&body[3..])?;
    let amount = parse_amount(number)?;
    let tail = &body[3 + number.len()..];
    Some(CurrencyAmount {
        bank_code: bank,
        currency,
        amount,
        narrative: tail.strip_prefix(CONTINUATION).unwrap_or(tail),
    })
}

/// Decodes `/CODE/value` pairs found anywhere in the text.
///
/// Lines are joined without a separator first, since pairs may wrap across
/// lines. Text before the first codeword is unstructured.
fn parse_pairs(value: &str) -> Narrative {
    let text: String = split_lines(value).concat();
    let mut narrative = Narrative::new();
    let mut cursor = 0;
    let mut current: Option<StructuredNarrative> = None;

    while let Some((start, end)) = find_pair_codeword(&text, cursor) {
        let between = &text[cursor..start];
        match current.as_mut() {
            Some(entry) => entry.push_narrative(between),
            None if !between.is_empty() => {
                narrative.unstructured_fragments.push(between.to_string());
            }
            None => {}
        }
        if let Some(entry) = current.take() {
            narrative.structured.push(entry);
        }
        current = Some(StructuredNarrative::new(&text[start + 1..end]));
        cursor = end + 1;
    }

    let tail = &text[cursor..];
    match current {
        Some(mut entry) => {
            entry.push_narrative(tail);
            narrative.structured.push(entry);
        }
        None if !tail.is_empty() => narrative.unstructured_fragments.push(tail.to_string()),
        None => {}
    }
    narrative
}

/// Finds the next `/CODE/` at or after `from`, returning the byte offsets of both slashes.
fn find_pair_codeword(text: &str, from: usize) -> Option<(usize, usize)> {
    let b = text.as_bytes();
    memchr_iter(b'/', &b[from..])
        .map(|i| from + i)
        .find_map(|start| {
            let len = b[start + 1..]
                .iter()
                .take(MAX_CODEWORD_LEN + 1)
                .take_while(|c| c.is_ascii_uppercase())
                .count();
            let end = start + 1 + len;
            ((1..=MAX_CODEWORD_LEN).contains(&len) && b.get(end) == Some(&b'/'))
                .then_some((start, end))
        })
}

/// Narrative decoding for fields whose grammar declares a layout.
pub trait NarrativeField {
    /// Decodes the field's narrative.
    ///
    /// # Returns
    /// `None` if the grammar carries no narrative layout.
    fn narrative(&self) -> Option<Narrative>;
}

impl NarrativeField for Field {
    fn narrative(&self) -> Option<Narrative> {
        NarrativeResolver::for_field(self.def()).map(|r| r.resolve(self))
    }
}
