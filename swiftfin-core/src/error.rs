/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Error types for SwiftFin.
//!
//! Absence of a value is never an error here: missing components, missing
//! lines and unparsable amounts are reported as `None`. The variants below
//! cover programmer errors only (bad indices, unknown grammars, calling a
//! resolver on a field that cannot answer it).

use crate::types::Capability;
use thiserror::Error;

/// Result type alias using [`SwiftError`] as the error type.
pub type Result<T> = std::result::Result<T, SwiftError>;

/// Top-level error type for all SwiftFin operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SwiftError {
    /// Error while addressing or building a field.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Error while resolving a typed value from a field.
    #[error("resolve error: {0}")]
    Resolve(#[from] ResolveError),

    /// Error while building a narrative.
    #[error("narrative error: {0}")]
    Narrative(#[from] NarrativeError),
}

/// Errors raised by the field component API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Component index outside the field's declared arity.
    #[error("component {index} out of range for field {field}: arity is {arity}")]
    OutOfRange {
        /// Field identifier.
        field: String,
        /// The 1-based index requested.
        index: usize,
        /// Number of components the field declares.
        arity: usize,
    },

    /// No grammar is registered for the field identifier.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// The field identifier is not 2 digits followed by an optional letter.
    #[error("invalid field identifier: {0}")]
    InvalidFieldId(String),
}

/// Errors raised by the capability resolvers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The field's grammar does not carry the requested capability.
    #[error("field {field} lacks the {capability} capability")]
    MissingCapability {
        /// Field identifier.
        field: String,
        /// Capability that was required.
        capability: Capability,
    },
}

/// Errors raised while assembling a narrative.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NarrativeError {
    /// Codeword is empty, longer than eight characters or not alphanumeric.
    #[error("invalid codeword: {0}")]
    InvalidCodeword(String),

    /// The entry kind cannot be expressed in the builder's layout.
    #[error("{entry} entries are not supported by the {layout} layout")]
    UnsupportedEntry {
        /// Kind of entry that was added.
        entry: &'static str,
        /// Name of the layout in use.
        layout: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = FieldError::OutOfRange {
            field: "32A".to_string(),
            index: 4,
            arity: 3,
        };
        assert_eq!(
            err.to_string(),
            "component 4 out of range for field 32A: arity is 3"
        );
    }

    #[test]
    fn test_swift_error_from_field() {
        let err: SwiftError = FieldError::UnknownField("99Z".to_string()).into();
        assert!(matches!(err, SwiftError::Field(FieldError::UnknownField(_))));
    }

    #[test]
    fn test_missing_capability_display() {
        let err = ResolveError::MissingCapability {
            field: "20".to_string(),
            capability: Capability::Amount,
        };
        assert_eq!(err.to_string(), "field 20 lacks the amount capability");
    }

    #[test]
    fn test_unsupported_entry_display() {
        let err = NarrativeError::UnsupportedEntry {
            entry: "country",
            layout: "codeword-amount",
        };
        assert_eq!(
            err.to_string(),
            "country entries are not supported by the codeword-amount layout"
        );
    }
}
