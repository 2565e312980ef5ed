/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Structured narrative decoding and encoding.
//!
//! - [`NarrativeResolver`]: classifies field text against a layout
//! - [`NarrativeBuilder`]: renders entries back to wrapped field text
//! - [`Narrative`] and [`StructuredNarrative`]: the decoded form

pub mod builder;
pub mod model;
pub mod resolver;
mod wrap;

pub use builder::NarrativeBuilder;
pub use model::{Narrative, StructuredNarrative};
pub use resolver::{NarrativeConfig, NarrativeField, NarrativeResolver};
