/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Date resolvers.

use crate::capability::{require, typed_components};
use chrono::NaiveDate;
use swiftfin_core::error::ResolveError;
use swiftfin_core::types::{Capability, parse_date};
use swiftfin_dictionary::ComponentType;
use swiftfin_tagvalue::Field;
use tracing::trace;

/// Returns the first date component that parses.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar has no date component.
pub fn date(field: &Field) -> Result<Option<NaiveDate>, ResolveError> {
    Ok(dates(field)?.into_iter().flatten().next())
}

/// Returns one slot per date component, in component order.
///
/// A slot is `None` when the component is absent or not a valid calendar date.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar has no date component.
pub fn dates(field: &Field) -> Result<Vec<Option<NaiveDate>>, ResolveError> {
    require(field, Capability::Date)?;
    Ok(
        typed_components(field, &[ComponentType::Date, ComponentType::LongDate])
            .map(|text| {
                let parsed = text.and_then(parse_date);
                if parsed.is_none() {
                    trace!(field = field.id(), ?text, "date slot did not parse");
                }
                parsed
            })
            .collect(),
    )
}
