/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SwiftFin Tag-Value
//!
//! Grammar-driven decoding and encoding of SWIFT FIN field values.
//!
//! This crate turns the raw text of a field (`:32A:091019EUR1234,56`) into a
//! fixed list of nullable components and back, using the descriptors from
//! `swiftfin-dictionary`.
//!
//! ## Features
//!
//! - **Lossless**: `parse` followed by `value` reproduces well-formed input
//! - **Line addressing**: 1-based line access, optionally from a component
//! - **Both terminators**: `\n` and `\r\n` are accepted on input

pub mod decoder;
pub mod encoder;
pub mod field;
pub mod lines;

pub use decoder::{Decoder, split_lines};
pub use encoder::{Encoder, Piece, RenderedLine};
pub use field::{Components, Field};
