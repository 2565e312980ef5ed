/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Grammar descriptors for SWIFT FIN fields.
//!
//! This module defines the structures that describe how a field value is laid out:
//! - [`FieldId`]: Field identifier such as `32A` or `20`
//! - [`Segment`]: One positional piece of a field grammar
//! - [`ComponentType`]: Semantic type letter of a component
//! - [`NarrativeLayout`]: Narrative layout a field follows
//! - [`FieldDef`]: Complete immutable descriptor for one field kind
//! - [`Dictionary`]: Lookup table from identifier to descriptor

use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use swiftfin_core::error::FieldError;
use swiftfin_core::types::{Capability, DEFAULT_LINE_WIDTH};

/// SWIFT field identifier: two digits and an optional option letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct FieldId(ArrayString<3>);

impl FieldId {
    /// Creates a field identifier.
    ///
    /// # Returns
    /// `Some(FieldId)` for `NN` or `NNa` forms, `None` otherwise.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        let digits = b.len() >= 2 && b[..2].iter().all(u8::is_ascii_digit);
        let letter = match b.len() {
            2 => true,
            3 => b[2].is_ascii_uppercase(),
            _ => false,
        };
        if digits && letter {
            ArrayString::from(s).ok().map(Self)
        } else {
            None
        }
    }

    /// Returns the identifier as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the numeric part of the identifier.
    #[must_use]
    pub fn number(&self) -> u8 {
        self.0[..2].parse().unwrap_or(0)
    }

    /// Returns the option letter, if any.
    #[must_use]
    pub fn letter(&self) -> Option<char> {
        self.0.chars().nth(2)
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for FieldId {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or_else(|| FieldError::InvalidFieldId(s.to_string()))
    }
}

/// One positional piece of a field grammar.
///
/// `Account` and `Lines` always start on a fresh line; the other segments
/// consume from the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Segment {
    /// Up to `n` characters.
    Fixed(usize),
    /// Leading letters, at most `n`.
    Alpha(usize),
    /// Leading digits with an optional decimal comma.
    Number,
    /// Remainder of the current line.
    Rest,
    /// Line break.
    Newline,
    /// Optional line starting with `/`, stored without the slash.
    Account,
    /// Up to `n` lines, one component each.
    Lines(usize),
    /// `:qualifier/[issuer]/value`, three components.
    Qualified,
}

impl Segment {
    /// Returns how many components this segment contributes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Fixed(_) | Self::Alpha(_) | Self::Number | Self::Rest | Self::Account => 1,
            Self::Newline => 0,
            Self::Lines(n) => n,
            Self::Qualified => 3,
        }
    }

    /// Returns true if the segment begins on its own line.
    #[must_use]
    pub const fn starts_line(self) -> bool {
        matches!(self, Self::Account | Self::Lines(_))
    }
}

/// Semantic type of a component, one letter per component in a type pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentType {
    /// `S`: free text.
    String,
    /// `N`: integer number.
    Number,
    /// `I`: decimal amount with comma separator.
    Amount,
    /// `C`: currency code.
    Currency,
    /// `D`: date as `YYMMDD`.
    Date,
    /// `E`: date as `YYYYMMDD`.
    LongDate,
    /// `B`: BIC.
    Bic,
    /// `K`: country code.
    Country,
}

impl ComponentType {
    /// Creates a component type from its pattern letter.
    ///
    /// Unknown letters read as [`ComponentType::String`].
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            'N' => Self::Number,
            'I' => Self::Amount,
            'C' => Self::Currency,
            'D' => Self::Date,
            'E' => Self::LongDate,
            'B' => Self::Bic,
            'K' => Self::Country,
            _ => Self::String,
        }
    }

    /// Returns the pattern letter for this type.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::String => 'S',
            Self::Number => 'N',
            Self::Amount => 'I',
            Self::Currency => 'C',
            Self::Date => 'D',
            Self::LongDate => 'E',
            Self::Bic => 'B',
            Self::Country => 'K',
        }
    }

    /// Returns true for both date forms.
    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::Date | Self::LongDate)
    }
}

/// Characters accepted in a narrative codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodewordCharset {
    /// Uppercase letters only.
    Alpha,
    /// Uppercase letters and digits.
    Alphanumeric,
    /// Digits only.
    Numeric,
}

impl CodewordCharset {
    /// Returns true if `c` belongs to the charset.
    #[must_use]
    pub const fn accepts(self, c: u8) -> bool {
        match self {
            Self::Alpha => c.is_ascii_uppercase(),
            Self::Alphanumeric => c.is_ascii_uppercase() || c.is_ascii_digit(),
            Self::Numeric => c.is_ascii_digit(),
        }
    }
}

/// What happens to a line that is neither a codeword line nor a `//` continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LinePolicy {
    /// Appended to the open entry's narrative, or unstructured if none is open.
    Continue,
    /// Always unstructured.
    Unstructured,
}

/// Narrative layouts a field grammar can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NarrativeLayout {
    /// Free text only.
    Unstructured,
    /// `/8c/[narrative]` with `//` continuations.
    CodewordNarrative {
        /// Charset of the codeword.
        charset: CodewordCharset,
    },
    /// `/8a/2!a[//narrative]`.
    CodewordCountry,
    /// `/8a/[1!a/][3!a15d][narrative]`; the bank code letter only when `bank_code` is set.
    CodewordAmount {
        /// Whether a single-letter bank code may precede the currency.
        bank_code: bool,
    },
    /// `/2n/[narrative][//supplement]`.
    QueryNumber,
    /// Several `/code/value` pairs anywhere in the text.
    CodewordPairs,
}

impl NarrativeLayout {
    /// Returns the codeword charset for the layout.
    #[must_use]
    pub const fn charset(self) -> CodewordCharset {
        match self {
            Self::CodewordNarrative { charset } => charset,
            Self::QueryNumber => CodewordCharset::Numeric,
            Self::Unstructured
            | Self::CodewordCountry
            | Self::CodewordAmount { .. }
            | Self::CodewordPairs => CodewordCharset::Alpha,
        }
    }

    /// Returns how lines outside the codeword grammar are classified.
    #[must_use]
    pub const fn line_policy(self) -> LinePolicy {
        match self {
            Self::CodewordNarrative { .. } | Self::CodewordCountry | Self::QueryNumber => {
                LinePolicy::Continue
            }
            Self::Unstructured | Self::CodewordAmount { .. } | Self::CodewordPairs => {
                LinePolicy::Unstructured
            }
        }
    }

    /// Returns a short name for messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unstructured => "unstructured",
            Self::CodewordNarrative { .. } => "codeword-narrative",
            Self::CodewordCountry => "codeword-country",
            Self::CodewordAmount { bank_code: false } => "codeword-amount",
            Self::CodewordAmount { bank_code: true } => "codeword-amount-score",
            Self::QueryNumber => "query-number",
            Self::CodewordPairs => "codeword-pairs",
        }
    }
}

impl fmt::Display for NarrativeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Immutable grammar descriptor for one field kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FieldDef {
    /// Field identifier.
    pub id: &'static str,
    /// Field name.
    pub name: &'static str,
    /// Positional layout of the value.
    pub segments: &'static [Segment],
    /// Component type letters; components past the end read as `S`.
    pub types: &'static str,
    /// Narrative layout, for fields that carry narrative text.
    pub narrative: Option<NarrativeLayout>,
    /// Maximum characters per line.
    pub line_width: usize,
}

impl FieldDef {
    /// Creates a field descriptor without narrative support.
    ///
    /// # Arguments
    /// * `id` - The field identifier
    /// * `name` - The field name
    /// * `segments` - Positional layout
    /// * `types` - Component type pattern
    #[must_use]
    pub const fn new(
        id: &'static str,
        name: &'static str,
        segments: &'static [Segment],
        types: &'static str,
    ) -> Self {
        Self {
            id,
            name,
            segments,
            types,
            narrative: None,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }

    /// Declares the narrative layout.
    #[must_use]
    pub const fn with_narrative(mut self, layout: NarrativeLayout) -> Self {
        self.narrative = Some(layout);
        self
    }

    /// Overrides the line width.
    #[must_use]
    pub const fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    /// Returns the number of components.
    #[must_use]
    pub const fn arity(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.segments.len() {
            total += self.segments[i].arity();
            i += 1;
        }
        total
    }

    /// Returns the semantic type of the 1-based component `n`.
    #[must_use]
    pub fn component_type(&self, n: usize) -> ComponentType {
        n.checked_sub(1)
            .and_then(|i| self.types.chars().nth(i))
            .map_or(ComponentType::String, ComponentType::from_char)
    }

    /// Returns true if the grammar exposes the capability.
    #[must_use]
    pub fn has_capability(&self, capability: Capability) -> bool {
        let has = |t: ComponentType| self.types.contains(t.as_char());
        match capability {
            Capability::Amount => has(ComponentType::Amount),
            Capability::Currency => has(ComponentType::Currency),
            Capability::Date => self
                .types
                .chars()
                .map(ComponentType::from_char)
                .any(ComponentType::is_date),
            Capability::Bic => has(ComponentType::Bic),
            Capability::MonetaryAmount => {
                has(ComponentType::Currency) && has(ComponentType::Amount)
            }
        }
    }
}

/// Lookup table of field descriptors.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Field definitions indexed by identifier.
    pub fields: HashMap<&'static str, &'static FieldDef>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dictionary of standard fields.
    #[must_use]
    pub fn standard() -> &'static Self {
        static STANDARD: LazyLock<Dictionary> = LazyLock::new(|| {
            let mut dict = Dictionary::new();
            for def in crate::fields::ALL.iter().copied() {
                dict.add_field(def);
            }
            dict
        });
        &STANDARD
    }

    /// Adds a field definition, replacing any previous one with the same identifier.
    pub fn add_field(&mut self, field: &'static FieldDef) {
        self.fields.insert(field.id, field);
    }

    /// Gets a field definition by identifier.
    #[must_use]
    pub fn get_field(&self, id: &str) -> Option<&'static FieldDef> {
        self.fields.get(id).copied()
    }

    /// Gets a field definition, failing for unknown identifiers.
    ///
    /// # Errors
    /// Returns `FieldError::UnknownField` if no grammar is registered.
    pub fn require_field(&self, id: &str) -> Result<&'static FieldDef, FieldError> {
        self.get_field(id)
            .ok_or_else(|| FieldError::UnknownField(id.to_string()))
    }

    /// Returns an iterator over all field definitions.
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDef> + '_ {
        self.fields.values().copied()
    }
}
