/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SwiftFin Resolver
//!
//! Typed values and structured narratives on top of decoded fields.
//!
//! ## Capability resolvers
//!
//! Free functions that read amounts, currencies, dates and BICs from any
//! field whose grammar carries the matching component types. They return
//! `None` or an empty list for absent or unparsable values, and fail only
//! when the grammar lacks the capability altogether.
//!
//! ## Narratives
//!
//! [`NarrativeResolver`] decodes codeword text such as field 72 into
//! [`Narrative`] entries; [`NarrativeBuilder`] renders entries back to
//! wrapped field text.

pub mod amount;
pub mod bic;
pub mod capability;
pub mod currency;
pub mod date;
pub mod narrative;

pub use amount::{MonetaryAmount, amount, amounts, monetary_amount, monetary_amounts};
pub use bic::{bic, bics};
pub use capability::{require, resolve_components_pattern};
pub use currency::{currencies, currency};
pub use date::{date, dates};
pub use narrative::{
    Narrative, NarrativeBuilder, NarrativeConfig, NarrativeField, NarrativeResolver,
    StructuredNarrative,
};
