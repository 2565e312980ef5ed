/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Currency resolvers.

use crate::capability::{require, typed_components};
use swiftfin_core::error::ResolveError;
use swiftfin_core::types::{Capability, CurrencyCode};
use swiftfin_dictionary::ComponentType;
use swiftfin_tagvalue::Field;

/// Returns the first valid currency code.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar has no currency component.
pub fn currency(field: &Field) -> Result<Option<CurrencyCode>, ResolveError> {
    Ok(currencies(field)?.into_iter().next())
}

/// Returns every valid currency code, in component order.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar has no currency component.
pub fn currencies(field: &Field) -> Result<Vec<CurrencyCode>, ResolveError> {
    require(field, Capability::Currency)?;
    Ok(typed_components(field, &[ComponentType::Currency])
        .flatten()
        .filter_map(CurrencyCode::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfin_dictionary::fields::{FIELD_32A, FIELD_71F, FIELD_72};

    #[test]
    fn test_currency() {
        let field = Field::parse(&FIELD_32A, "091019EUR1234,56");
        assert_eq!(currency(&field), Ok(CurrencyCode::new("EUR")));
        let charges = Field::parse(&FIELD_71F, "CHF25,");
        assert_eq!(currencies(&charges).unwrap(), vec![CurrencyCode::new("CHF").unwrap()]);
    }

    #[test]
    fn test_currency_absent() {
        let field = Field::parse(&FIELD_32A, "091019");
        assert_eq!(currency(&field), Ok(None));
    }

    #[test]
    fn test_currency_requires_capability() {
        let field = Field::parse(&FIELD_72, "/INS/EUR");
        assert!(currency(&field).is_err());
    }
}
