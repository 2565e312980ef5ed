/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The generic field value type.
//!
//! A [`Field`] is a fixed-arity list of nullable components plus a reference
//! to the immutable grammar descriptor that knows how to split and re-join
//! them. Every field kind shares this one type; behaviour differences live in
//! the [`FieldDef`] data.

use crate::decoder::Decoder;
use crate::encoder::Encoder;
use rust_decimal::Decimal;
use smallvec::SmallVec;
use std::fmt;
use swiftfin_core::error::FieldError;
use swiftfin_core::types::{SWIFT_EOL, parse_amount};
use swiftfin_dictionary::{Dictionary, FieldDef};

/// Inline storage for components; most grammars have eight or fewer.
pub type Components = SmallVec<[Option<String>; 8]>;

/// One field instance: its grammar and its components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Grammar descriptor for this field kind.
    def: &'static FieldDef,
    /// Components, 0-based internally, always `def.arity()` long.
    components: Components,
}

impl Field {
    /// Creates a field with every component absent.
    ///
    /// # Arguments
    /// * `def` - The grammar descriptor
    #[must_use]
    pub fn new(def: &'static FieldDef) -> Self {
        let mut components = Components::new();
        components.resize(def.arity(), None);
        Self { def, components }
    }

    /// Parses a raw value according to the grammar.
    ///
    /// Both `\n` and `\r\n` are accepted as line terminators. Parsing never
    /// fails; characters the grammar cannot place are kept in the nearest
    /// component so that [`Field::value`] reproduces the input.
    ///
    /// # Arguments
    /// * `def` - The grammar descriptor
    /// * `value` - The raw field value
    #[must_use]
    pub fn parse(def: &'static FieldDef, value: &str) -> Self {
        let components = Decoder::new(def, value).decode();
        Self { def, components }
    }

    /// Creates a field from a standard field identifier and an optional raw value.
    ///
    /// A `None` value yields a field with every component absent.
    ///
    /// # Errors
    /// Returns `FieldError::UnknownField` if the identifier has no grammar.
    pub fn from_tag(id: &str, value: Option<&str>) -> Result<Self, FieldError> {
        let def = Dictionary::standard().require_field(id)?;
        Ok(match value {
            Some(v) => Self::parse(def, v),
            None => Self::new(def),
        })
    }

    /// Creates a field from components in order.
    ///
    /// Missing trailing components are absent.
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if more components are given than the arity.
    pub fn from_components<I, S>(def: &'static FieldDef, components: I) -> Result<Self, FieldError>
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        let mut field = Self::new(def);
        for (i, component) in components.into_iter().enumerate() {
            let slot = field.slot_mut(i + 1)?;
            *slot = component.map(Into::into);
        }
        Ok(field)
    }

    /// Returns the grammar descriptor.
    #[inline]
    #[must_use]
    pub const fn def(&self) -> &'static FieldDef {
        self.def
    }

    /// Returns the field identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> &'static str {
        self.def.id
    }

    /// Returns the declared number of components.
    #[inline]
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Returns the 1-based component `n`.
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if `n` is 0 or beyond the arity.
    pub fn component(&self, n: usize) -> Result<Option<&str>, FieldError> {
        n.checked_sub(1)
            .and_then(|i| self.components.get(i))
            .map(Option::as_deref)
            .ok_or_else(|| self.out_of_range(n))
    }

    /// Returns the 1-based component `n` parsed as a SWIFT amount.
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if `n` is 0 or beyond the arity.
    pub fn component_as_decimal(&self, n: usize) -> Result<Option<Decimal>, FieldError> {
        Ok(self.component(n)?.and_then(parse_amount))
    }

    /// Sets the 1-based component `n`.
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if `n` is 0 or beyond the arity.
    pub fn set_component(&mut self, n: usize, value: impl Into<String>) -> Result<(), FieldError> {
        *self.slot_mut(n)? = Some(value.into());
        Ok(())
    }

    /// Makes the 1-based component `n` absent.
    ///
    /// # Errors
    /// Returns `FieldError::OutOfRange` if `n` is 0 or beyond the arity.
    pub fn clear_component(&mut self, n: usize) -> Result<(), FieldError> {
        *self.slot_mut(n)? = None;
        Ok(())
    }

    /// Returns an iterator over all components in order.
    pub fn components(&self) -> impl Iterator<Item = Option<&str>> {
        self.components.iter().map(Option::as_deref)
    }

    /// Returns true if every component is absent or empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components
            .iter()
            .all(|c| c.as_deref().is_none_or(str::is_empty))
    }

    /// Concatenates components from the 1-based `from` without separators.
    ///
    /// # Arguments
    /// * `from` - First component to include
    /// * `trim_trailing_empty` - Drop trailing absent or empty components
    #[must_use]
    pub fn join_components(&self, from: usize, trim_trailing_empty: bool) -> String {
        self.join_components_with(from, "", trim_trailing_empty)
    }

    /// Joins components from the 1-based `from` with a separator.
    ///
    /// Absent components inside the range read as empty strings.
    #[must_use]
    pub fn join_components_with(
        &self,
        from: usize,
        separator: &str,
        trim_trailing_empty: bool,
    ) -> String {
        let start = from.max(1) - 1;
        let mut parts: Vec<&str> = self
            .components
            .iter()
            .skip(start)
            .map(|c| c.as_deref().unwrap_or(""))
            .collect();
        if trim_trailing_empty {
            while parts.last().is_some_and(|p| p.is_empty()) {
                parts.pop();
            }
        }
        parts.join(separator)
    }

    /// Returns the first component whose text starts with `prefix`.
    #[must_use]
    pub fn find_component_starting_with(&self, prefix: &str) -> Option<&str> {
        self.components()
            .flatten()
            .find(|c| c.starts_with(prefix))
    }

    /// Returns the value associated with a codeword.
    ///
    /// A component written as `/CODEWORD/value` yields `value`; a component
    /// equal to the codeword yields the next present component.
    #[must_use]
    pub fn value_by_codeword(&self, codeword: &str) -> Option<&str> {
        let marker = format!("/{codeword}/");
        let mut components = self.components().flatten();
        while let Some(component) = components.next() {
            if let Some(value) = component.strip_prefix(marker.as_str()) {
                if !value.is_empty() {
                    return Some(value);
                }
            } else if component == codeword {
                return components.next();
            }
        }
        None
    }

    /// Serializes the components using `\n` between lines.
    #[must_use]
    pub fn value(&self) -> String {
        Encoder::new(self.def).encode(&self.components)
    }

    /// Serializes the components using the SWIFT line terminator.
    #[must_use]
    pub fn wire_value(&self) -> String {
        self.value().replace('\n', SWIFT_EOL)
    }

    pub(crate) fn raw_components(&self) -> &[Option<String>] {
        &self.components
    }

    fn slot_mut(&mut self, n: usize) -> Result<&mut Option<String>, FieldError> {
        let err = self.out_of_range(n);
        n.checked_sub(1)
            .and_then(|i| self.components.get_mut(i))
            .ok_or(err)
    }

    fn out_of_range(&self, n: usize) -> FieldError {
        FieldError::OutOfRange {
            field: self.def.id.to_string(),
            index: n,
            arity: self.components.len(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}:{}", self.def.id, self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfin_dictionary::fields::{
        FIELD_11R, FIELD_20, FIELD_22F, FIELD_32A, FIELD_70, FIELD_72,
    };

    #[test]
    fn test_new_field_is_absent() {
        let field = Field::new(&FIELD_32A);
        assert_eq!(field.component_count(), 3);
        assert!(field.components().all(|c| c.is_none()));
        assert!(field.is_empty());
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_component_out_of_range() {
        let mut field = Field::new(&FIELD_32A);
        assert!(matches!(
            field.set_component(4, "X"),
            Err(FieldError::OutOfRange { index: 4, arity: 3, .. })
        ));
        assert!(field.component(0).is_err());
        assert!(field.component(4).is_err());
        assert_eq!(field.component(3), Ok(None));
    }

    #[test]
    fn test_set_and_get_component() {
        let mut field = Field::new(&FIELD_32A);
        field.set_component(1, "091019").unwrap();
        field.set_component(2, "EUR").unwrap();
        field.set_component(3, "1234,56").unwrap();
        assert_eq!(field.component(2), Ok(Some("EUR")));
        assert_eq!(field.value(), "091019EUR1234,56");
        assert_eq!(
            field.component_as_decimal(3),
            Ok(Some(Decimal::new(123456, 2)))
        );

        field.clear_component(2).unwrap();
        assert_eq!(field.component(2), Ok(None));
    }

    #[test]
    fn test_empty_value_yields_absent_components() {
        let field = Field::parse(&FIELD_70, "");
        assert!(field.components().all(|c| c.is_none()));
    }

    #[test]
    fn test_short_value_leaves_trailing_components_absent() {
        let field = Field::parse(&FIELD_70, "aaaaaa");
        assert_eq!(field.component(1), Ok(Some("aaaaaa")));
        assert_eq!(field.component(2), Ok(None));
        assert_eq!(field.component(3), Ok(None));
        assert_eq!(field.component(4), Ok(None));
    }

    #[test]
    fn test_from_tag() {
        let field = Field::from_tag("20", Some("REF123")).unwrap();
        assert_eq!(field.component(1), Ok(Some("REF123")));
        let empty = Field::from_tag("20", None).unwrap();
        assert_eq!(empty.component(1), Ok(None));
        assert_eq!(
            Field::from_tag("99Z", Some("x")),
            Err(FieldError::UnknownField("99Z".to_string()))
        );
    }

    #[test]
    fn test_from_components() {
        let field =
            Field::from_components(&FIELD_11R, [Some("100"), Some("091019"), None]).unwrap();
        assert_eq!(field.component(2), Ok(Some("091019")));
        assert_eq!(field.component(3), Ok(None));
        assert!(Field::from_components(&FIELD_20, [Some("a"), Some("b")]).is_err());
    }

    #[test]
    fn test_join_components() {
        let field = Field::from_components(&FIELD_70, [Some("AB"), Some("CD"), Some(""), None])
            .unwrap();
        assert_eq!(field.join_components(1, false), "ABCD");
        assert_eq!(field.join_components(2, true), "CD");
        assert_eq!(field.join_components_with(1, "|", true), "AB|CD");
        assert_eq!(field.join_components_with(1, "|", false), "AB|CD||");
    }

    #[test]
    fn test_find_component_starting_with() {
        let field = Field::parse(&FIELD_72, "/INS/ABNANL2A\n/ACC/INSTRUCTION");
        assert_eq!(
            field.find_component_starting_with("/ACC/"),
            Some("/ACC/INSTRUCTION")
        );
        assert_eq!(field.find_component_starting_with("/BNF/"), None);
    }

    #[test]
    fn test_value_by_codeword() {
        let field = Field::parse(&FIELD_72, "/INS/ABNANL2A\n/ACC/\n/REC/PAY NOW");
        assert_eq!(field.value_by_codeword("INS"), Some("ABNANL2A"));
        assert_eq!(field.value_by_codeword("REC"), Some("PAY NOW"));
        assert_eq!(field.value_by_codeword("ACC"), None);
        assert_eq!(field.value_by_codeword("BNF"), None);

        let generic = Field::parse(&FIELD_22F, ":SFRE//DAIL");
        assert_eq!(generic.value_by_codeword("SFRE"), Some("DAIL"));
    }

    #[test]
    fn test_wire_value_and_display() {
        let field = Field::parse(&FIELD_11R, "100\r\n091019\r\n1234123456");
        assert_eq!(field.value(), "100\n091019\n1234123456");
        assert_eq!(field.wire_value(), "100\r\n091019\r\n1234123456");
        assert_eq!(field.to_string(), ":11R:100\n091019\n1234123456");
    }
}
