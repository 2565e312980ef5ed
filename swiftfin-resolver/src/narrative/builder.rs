/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Narrative encoding.
//!
//! The builder collects entries in call order and renders them as canonical
//! field text: each entry starts with `/CODEWORD/`, its text is word-wrapped
//! to the line width and continued on `//` lines. Free text follows the
//! entries. Entries sharing a codeword are kept apart.
//!
//! Text is re-wrapped on whitespace, so runs of spaces collapse to one and
//! leading or trailing spaces are dropped. The codeword-pairs layout keeps
//! its text as given.

use crate::narrative::model::{Narrative, StructuredNarrative};
use crate::narrative::resolver::{NarrativeConfig, NarrativeResolver};
use crate::narrative::wrap::{Token, pack, spaced_words, words};
use rust_decimal::Decimal;
use swiftfin_core::error::NarrativeError;
use swiftfin_core::types::{CountryCode, CurrencyCode, MAX_CODEWORD_LEN, format_amount};
use swiftfin_dictionary::{FieldDef, NarrativeLayout};
use swiftfin_tagvalue::Field;

const CONTINUATION: &str = "//";

/// Assembles a narrative and renders it as field text.
///
/// # Example
///
/// ```
/// use swiftfin_dictionary::fields::FIELD_72;
/// use swiftfin_resolver::NarrativeBuilder;
///
/// let mut builder = NarrativeBuilder::for_field(&FIELD_72).unwrap();
/// builder.add_codeword("INS", "ABNANL2A").unwrap();
/// assert_eq!(builder.to_value(), "/INS/ABNANL2A");
/// ```
#[derive(Debug, Clone)]
pub struct NarrativeBuilder {
    config: NarrativeConfig,
    entries: Vec<StructuredNarrative>,
    unstructured: Vec<String>,
}

impl NarrativeBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub const fn new(config: NarrativeConfig) -> Self {
        Self {
            config,
            entries: Vec::new(),
            unstructured: Vec::new(),
        }
    }

    /// Creates a builder for the layout and width a field grammar declares.
    ///
    /// # Returns
    /// `None` if the field does not carry narrative text.
    #[must_use]
    pub fn for_field(def: &FieldDef) -> Option<Self> {
        NarrativeConfig::for_field(def).map(Self::new)
    }

    /// Adds a codeword entry with optional narrative text.
    ///
    /// Outside the codeword-pairs layout the text is normalised on wrapping:
    /// `"A  B "` reads back as `"A B"`.
    ///
    /// # Errors
    /// Returns `NarrativeError::InvalidCodeword` for a codeword the layout
    /// rejects, or `NarrativeError::UnsupportedEntry` if the layout requires
    /// a country or has no codewords.
    pub fn add_codeword(
        &mut self,
        codeword: &str,
        narrative: &str,
    ) -> Result<&mut Self, NarrativeError> {
        match self.config.layout {
            NarrativeLayout::CodewordNarrative { .. }
            | NarrativeLayout::CodewordAmount { .. }
            | NarrativeLayout::QueryNumber
            | NarrativeLayout::CodewordPairs => {}
            layout => return Err(unsupported("codeword", layout)),
        }
        let mut entry = self.entry(codeword)?;
        entry.push_narrative(narrative);
        self.entries.push(entry);
        Ok(self)
    }

    /// Adds a codeword entry carrying a currency and amount.
    ///
    /// # Arguments
    /// * `codeword` - The codeword
    /// * `bank_code` - Bank code letter, only for layouts that allow one
    /// * `currency` - Currency of the amount
    /// * `amount` - The amount
    /// * `narrative` - Text following the amount, may be empty
    ///
    /// # Errors
    /// Returns `NarrativeError::UnsupportedEntry` outside the codeword-amount
    /// layouts, or for a bank code the layout does not allow.
    pub fn add_codeword_with_amount(
        &mut self,
        codeword: &str,
        bank_code: Option<char>,
        currency: CurrencyCode,
        amount: Decimal,
        narrative: &str,
    ) -> Result<&mut Self, NarrativeError> {
        let layout = self.config.layout;
        let NarrativeLayout::CodewordAmount { bank_code: allowed } = layout else {
            return Err(unsupported("amount", layout));
        };
        if (bank_code.is_some() && !allowed)
            || bank_code.is_some_and(|c| !c.is_ascii_uppercase())
        {
            return Err(unsupported("bank code", layout));
        }
        let mut entry = self.entry(codeword)?;
        entry.bank_code = bank_code;
        entry.currency = Some(currency);
        entry.amount = Some(amount);
        entry.push_narrative(narrative);
        self.entries.push(entry);
        Ok(self)
    }

    /// Adds a codeword entry carrying a country code.
    ///
    /// # Errors
    /// Returns `NarrativeError::UnsupportedEntry` outside the codeword-country layout.
    pub fn add_codeword_with_country(
        &mut self,
        codeword: &str,
        country: CountryCode,
        narrative: &str,
    ) -> Result<&mut Self, NarrativeError> {
        if self.config.layout != NarrativeLayout::CodewordCountry {
            return Err(unsupported("country", self.config.layout));
        }
        let mut entry = self.entry(codeword)?;
        entry.country = Some(country);
        entry.push_narrative(narrative);
        self.entries.push(entry);
        Ok(self)
    }

    /// Adds a query entry with narrative and supplementary text.
    ///
    /// # Errors
    /// Returns `NarrativeError::UnsupportedEntry` outside the query-number layout.
    pub fn add_codeword_with_supplement(
        &mut self,
        codeword: &str,
        narrative: &str,
        supplement: &str,
    ) -> Result<&mut Self, NarrativeError> {
        if self.config.layout != NarrativeLayout::QueryNumber {
            return Err(unsupported("supplement", self.config.layout));
        }
        let mut entry = self.entry(codeword)?;
        entry.push_narrative(narrative);
        entry.push_supplement(supplement);
        self.entries.push(entry);
        Ok(self)
    }

    /// Adds free text, emitted after all entries.
    pub fn add_unstructured(&mut self, text: &str) -> &mut Self {
        self.unstructured.push(text.to_string());
        self
    }

    /// Returns the narrative as it reads back from the rendered text.
    ///
    /// Entry fragments are the wrapped lines, with markers removed.
    #[must_use]
    pub fn build(&self) -> Narrative {
        let resolver = NarrativeResolver::new(self.config);
        if self.config.layout == NarrativeLayout::CodewordPairs {
            return resolver.parse(&self.to_value());
        }
        let mut narrative = Narrative::new();
        for entry in &self.entries {
            let lines = self.render_entry(entry);
            narrative
                .structured
                .extend(resolver.parse(&lines.join("\n")).structured);
        }
        for text in &self.unstructured {
            narrative
                .unstructured_fragments
                .extend(self.render_unstructured(text));
        }
        narrative
    }

    /// Renders the canonical lines.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        if self.config.layout == NarrativeLayout::CodewordPairs {
            return self.render_pairs();
        }
        let mut lines: Vec<String> = self
            .entries
            .iter()
            .flat_map(|e| self.render_entry(e))
            .collect();
        for text in &self.unstructured {
            lines.extend(self.render_unstructured(text));
        }
        lines
    }

    /// Renders the canonical text with `\n` between lines.
    #[must_use]
    pub fn to_value(&self) -> String {
        self.to_lines().join("\n")
    }

    /// Renders the text into a field of the given grammar.
    #[must_use]
    pub fn into_field(self, def: &'static FieldDef) -> Field {
        Field::parse(def, &self.to_value())
    }

    fn entry(&self, codeword: &str) -> Result<StructuredNarrative, NarrativeError> {
        let charset = self.config.layout.charset();
        let valid = (1..=MAX_CODEWORD_LEN).contains(&codeword.len())
            && codeword.bytes().all(|b| charset.accepts(b));
        if valid {
            Ok(StructuredNarrative::new(codeword))
        } else {
            Err(NarrativeError::InvalidCodeword(codeword.to_string()))
        }
    }

    fn render_entry(&self, entry: &StructuredNarrative) -> Vec<String> {
        let mut header = format!("/{}/", entry.codeword);
        let narrative = entry.narrative_fragments.concat();
        let supplement = entry.narrative_supplement_fragments.concat();
        let mut marked = false;
        if let Some(country) = entry.country {
            header.push_str(country.as_str());
            marked = true;
        }
        if let Some(code) = entry.bank_code {
            header.push(code);
            header.push('/');
        }
        if let (Some(currency), Some(amount)) = (entry.currency, entry.amount) {
            header.push_str(currency.as_str());
            header.push_str(&format_amount(amount));
            marked = narrative.starts_with(|c: char| c.is_ascii_digit() || c == ',');
        }

        let width = self.config.line_width;
        let mut first = width.saturating_sub(header.chars().count());
        let next = width.saturating_sub(CONTINUATION.len());

        let mut tokens: Vec<Token<'_>> = Vec::new();
        let mut narrative_words = words(&narrative);
        if marked && let Some(word) = narrative_words.next() {
            let glued = format!("{CONTINUATION}{}", word.text);
            if glued.chars().count() <= first {
                tokens.push(Token::glued(glued));
            } else {
                // A continuation line needs no marker after the header.
                first = 0;
                tokens.push(word);
            }
        }
        tokens.extend(narrative_words);
        let mut supplement_words = words(&supplement);
        if let Some(word) = supplement_words.next() {
            tokens.push(Token::glued(format!("{CONTINUATION}{}", word.text)));
        }
        tokens.extend(supplement_words);

        let mut lines = pack(tokens, first, next).into_iter();
        let mut out = vec![header + &lines.next().unwrap_or_default()];
        out.extend(lines.map(|l| format!("{CONTINUATION}{l}")));
        out
    }

    fn render_unstructured(&self, text: &str) -> Vec<String> {
        let width = self.config.line_width;
        pack(words(text), width, width)
    }

    fn render_pairs(&self) -> Vec<String> {
        let mut text = self.unstructured.concat();
        for entry in &self.entries {
            text.push_str(&pair_text(entry));
        }
        if text.is_empty() {
            return Vec::new();
        }
        let width = self.config.line_width;
        pack(spaced_words(&text), width, width)
    }
}

fn pair_text(entry: &StructuredNarrative) -> String {
    format!("/{}/{}", entry.codeword, entry.narrative_fragments.concat())
}

fn unsupported(entry: &'static str, layout: NarrativeLayout) -> NarrativeError {
    NarrativeError::UnsupportedEntry {
        entry,
        layout: layout.name(),
    }
}
