/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! BIC resolvers.

use crate::capability::{require, typed_components};
use swiftfin_core::error::ResolveError;
use swiftfin_core::types::{Bic, Capability};
use swiftfin_dictionary::ComponentType;
use swiftfin_tagvalue::Field;

/// Returns the first valid BIC.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar has no BIC component.
pub fn bic(field: &Field) -> Result<Option<Bic>, ResolveError> {
    Ok(bics(field)?.into_iter().next())
}

/// Returns every valid BIC, in component order.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar has no BIC component.
pub fn bics(field: &Field) -> Result<Vec<Bic>, ResolveError> {
    require(field, Capability::Bic)?;
    Ok(typed_components(field, &[ComponentType::Bic])
        .flatten()
        .filter_map(Bic::new)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfin_dictionary::fields::{FIELD_20, FIELD_57A};

    #[test]
    fn test_bic_with_account() {
        let field = Field::parse(&FIELD_57A, "/12345\nDEUTDEFF500");
        let bic = bic(&field).unwrap().unwrap();
        assert_eq!(bic.as_str(), "DEUTDEFF500");
        assert_eq!(bic.branch(), Some("500"));
    }

    #[test]
    fn test_invalid_bic_is_none() {
        let field = Field::parse(&FIELD_57A, "NOT A BIC");
        assert_eq!(bic(&field), Ok(None));
    }

    #[test]
    fn test_bic_requires_capability() {
        assert!(bics(&Field::parse(&FIELD_20, "DEUTDEFF")).is_err());
    }
}
