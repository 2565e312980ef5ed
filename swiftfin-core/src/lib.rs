/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SwiftFin Core
//!
//! Core types, error definitions and string primitives for decoding SWIFT FIN
//! field values.
//!
//! This crate provides the fundamental building blocks used across all SwiftFin crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Value types**: `CurrencyCode`, `CountryCode`, `Bic`, SWIFT dates and amounts
//! - **Splitter**: Pure tokenizers for prefixes, suffixes and separator-delimited tokens
//!
//! ## Borrowed Results
//!
//! The splitter functions return slices of their input. Absence is always
//! `None`, never an empty string standing in for "no token".

pub mod error;
pub mod splitter;
pub mod types;

pub use error::{FieldError, NarrativeError, ResolveError, Result, SwiftError};
pub use types::{
    Bic, Capability, CountryCode, CurrencyCode, DEFAULT_LINE_WIDTH, MAX_CODEWORD_LEN, SWIFT_EOL,
    format_amount, parse_amount, parse_date,
};
