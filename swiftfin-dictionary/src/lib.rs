/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SwiftFin Dictionary
//!
//! Field grammar descriptors and the standard field table for SwiftFin.
//!
//! This crate provides:
//! - **Schema definitions**: Segments, component type patterns and narrative layouts
//! - **Field descriptors**: One immutable [`FieldDef`] per field kind
//! - **Standard table**: Descriptors for common MT fields, looked up by identifier

pub mod fields;
pub mod schema;

pub use schema::{
    CodewordCharset, ComponentType, Dictionary, FieldDef, FieldId, LinePolicy, NarrativeLayout,
    Segment,
};
