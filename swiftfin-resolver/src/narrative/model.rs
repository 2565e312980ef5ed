/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Decoded narrative representation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use swiftfin_core::types::{CountryCode, CurrencyCode};

/// One codeword entry of a structured narrative.
///
/// An entry with only a codeword is a marker such as `/HOLD/`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredNarrative {
    /// Codeword without the surrounding slashes.
    pub codeword: String,
    /// Country code, for codeword-country layouts.
    pub country: Option<CountryCode>,
    /// Bank code letter preceding the currency.
    pub bank_code: Option<char>,
    /// Currency of the amount.
    pub currency: Option<CurrencyCode>,
    /// Amount following the currency.
    pub amount: Option<Decimal>,
    /// Narrative text, one fragment per line.
    pub narrative_fragments: Vec<String>,
    /// Supplementary text, one fragment per line.
    pub narrative_supplement_fragments: Vec<String>,
}

impl StructuredNarrative {
    /// Creates an entry with only a codeword.
    #[must_use]
    pub fn new(codeword: impl Into<String>) -> Self {
        Self {
            codeword: codeword.into(),
            ..Self::default()
        }
    }

    /// Returns the narrative fragments joined without a separator.
    ///
    /// # Returns
    /// `None` if the entry has no narrative text.
    #[must_use]
    pub fn narrative(&self) -> Option<String> {
        self.narrative_with("")
    }

    /// Returns the narrative fragments joined with `separator`.
    #[must_use]
    pub fn narrative_with(&self, separator: &str) -> Option<String> {
        join(&self.narrative_fragments, separator)
    }

    /// Returns the supplement fragments joined without a separator.
    #[must_use]
    pub fn supplement(&self) -> Option<String> {
        join(&self.narrative_supplement_fragments, "")
    }

    /// Returns true if the entry carries nothing but its codeword.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.country.is_none()
            && self.bank_code.is_none()
            && self.currency.is_none()
            && self.amount.is_none()
            && self.narrative_fragments.is_empty()
            && self.narrative_supplement_fragments.is_empty()
    }

    pub(crate) fn push_narrative(&mut self, fragment: &str) {
        if !fragment.is_empty() {
            self.narrative_fragments.push(fragment.to_string());
        }
    }

    pub(crate) fn push_supplement(&mut self, fragment: &str) {
        if !fragment.is_empty() {
            self.narrative_supplement_fragments.push(fragment.to_string());
        }
    }
}

/// A decoded narrative: codeword entries plus free text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Narrative {
    /// Codeword entries in encounter order.
    pub structured: Vec<StructuredNarrative>,
    /// Lines not associated with any codeword.
    pub unstructured_fragments: Vec<String>,
}

impl Narrative {
    /// Creates an empty narrative.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if there are neither entries nor free text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structured.is_empty() && self.unstructured_fragments.is_empty()
    }

    /// Returns the first entry with the codeword.
    #[must_use]
    pub fn structured_first(&self, codeword: &str) -> Option<&StructuredNarrative> {
        self.structured.iter().find(|e| e.codeword == codeword)
    }

    /// Returns every entry with the codeword, in encounter order.
    pub fn structured_all<'a>(
        &'a self,
        codeword: &'a str,
    ) -> impl Iterator<Item = &'a StructuredNarrative> + 'a {
        self.structured.iter().filter(move |e| e.codeword == codeword)
    }

    /// Returns the narrative of the first entry with the codeword.
    #[must_use]
    pub fn narrative_of(&self, codeword: &str) -> Option<String> {
        self.structured_first(codeword)
            .and_then(StructuredNarrative::narrative)
    }

    /// Returns the free text joined without a separator.
    #[must_use]
    pub fn unstructured(&self) -> Option<String> {
        self.unstructured_with("")
    }

    /// Returns the free text joined with `separator`.
    #[must_use]
    pub fn unstructured_with(&self, separator: &str) -> Option<String> {
        join(&self.unstructured_fragments, separator)
    }
}

fn join(fragments: &[String], separator: &str) -> Option<String> {
    if fragments.is_empty() {
        None
    } else {
        Some(fragments.join(separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(codeword: &str, fragments: &[&str]) -> StructuredNarrative {
        let mut entry = StructuredNarrative::new(codeword);
        for f in fragments {
            entry.push_narrative(f);
        }
        entry
    }

    #[test]
    fn test_narrative_join() {
        let e = entry("INS", &["JOHN DOE", " AND SONS"]);
        assert_eq!(e.narrative().as_deref(), Some("JOHN DOE AND SONS"));
        assert_eq!(e.narrative_with("|").as_deref(), Some("JOHN DOE| AND SONS"));
        assert_eq!(entry("HOLD", &[]).narrative(), None);
    }

    #[test]
    fn test_marker_entry() {
        assert!(entry("HOLD", &[]).is_marker());
        assert!(!entry("INS", &["X"]).is_marker());
        let mut e = entry("INS", &[""]);
        e.push_supplement("");
        assert!(e.is_marker());
    }

    #[test]
    fn test_lookup_by_codeword() {
        let narrative = Narrative {
            structured: vec![entry("INS", &["A"]), entry("ACC", &["B"]), entry("INS", &["C"])],
            unstructured_fragments: vec!["FREE".to_string(), "TEXT".to_string()],
        };
        assert_eq!(narrative.narrative_of("INS").as_deref(), Some("A"));
        assert_eq!(narrative.structured_all("INS").count(), 2);
        assert!(narrative.structured_first("BNF").is_none());
        assert_eq!(narrative.unstructured_with(" ").as_deref(), Some("FREE TEXT"));
        assert!(!narrative.is_empty());
        assert!(Narrative::new().is_empty());
    }

    #[test]
    fn test_serialize_json() {
        let mut e = entry("ACC", &["PAY"]);
        e.currency = CurrencyCode::new("EUR");
        e.amount = Some(Decimal::new(150, 2));
        let json = serde_json::to_string(&e).unwrap();
        let back: StructuredNarrative = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}
