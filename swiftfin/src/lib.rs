/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # SwiftFin
//!
//! Decoding and encoding of SWIFT FIN field values.
//!
//! SwiftFin takes the raw value of one field of an MT message, splits it into
//! components according to the field's grammar, and offers typed access on
//! top: amounts, currencies, dates, BICs and structured codeword narratives.
//! Every decoded field serializes back to its original text.
//!
//! ## Features
//!
//! - **Lossless**: text the grammar cannot place is kept, never dropped
//! - **Data-driven grammars**: one generic field type, one descriptor per field kind
//! - **Narratives**: codeword layouts of fields 70, 71B, 71D, 72, 75, 76, 77B and more
//! - **Serde**: decoded narratives and value types serialize with serde
//!
//! ## Quick Start
//!
//! ```rust
//! use swiftfin::prelude::*;
//!
//! let field = Field::from_tag("72", Some("/INS/ABNANL2A\n//SECOND LINE")).unwrap();
//! let narrative = field.narrative().unwrap();
//! assert_eq!(narrative.narrative_of("INS").as_deref(), Some("ABNANL2ASECOND LINE"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Value types, string primitives and error definitions
//! - [`dictionary`]: Field grammar descriptors
//! - [`tagvalue`]: Field decoding, encoding and line addressing
//! - [`resolver`]: Typed resolvers and structured narratives

pub mod core {
    //! Value types, string primitives and error definitions.
    pub use swiftfin_core::*;
}

pub mod dictionary {
    //! Field grammar descriptors.
    pub use swiftfin_dictionary::*;
}

pub mod tagvalue {
    //! Field decoding, encoding and line addressing.
    pub use swiftfin_tagvalue::*;
}

pub mod resolver {
    //! Typed resolvers and structured narratives.
    pub use swiftfin_resolver::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use swiftfin_core::{
        Bic, Capability, CountryCode, CurrencyCode, FieldError, NarrativeError, ResolveError,
        Result, SWIFT_EOL, SwiftError,
    };

    // Dictionary
    pub use swiftfin_dictionary::{Dictionary, FieldDef, FieldId, LinePolicy, NarrativeLayout};

    // Tag-value
    pub use swiftfin_tagvalue::{Decoder, Encoder, Field};

    // Resolvers
    pub use swiftfin_resolver::{
        MonetaryAmount, Narrative, NarrativeBuilder, NarrativeConfig, NarrativeField,
        NarrativeResolver, StructuredNarrative,
    };
}
