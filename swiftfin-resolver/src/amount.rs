/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Amount and monetary amount resolvers.

use crate::capability::{require, resolve_components_pattern, typed_components};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use swiftfin_core::error::ResolveError;
use swiftfin_core::types::{Capability, CurrencyCode, format_amount, parse_amount};
use swiftfin_dictionary::ComponentType;
use swiftfin_tagvalue::Field;

/// A currency code and the amount tied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonetaryAmount {
    /// Currency of the amount.
    pub currency: CurrencyCode,
    /// The amount.
    pub amount: Decimal,
}

impl MonetaryAmount {
    /// Creates a monetary amount.
    #[must_use]
    pub const fn new(currency: CurrencyCode, amount: Decimal) -> Self {
        Self { currency, amount }
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency, format_amount(self.amount))
    }
}

/// Returns the first amount component that parses as a decimal.
///
/// Trailing text after the numeric run is ignored, so `"123dss"` yields `123`.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar has no amount component.
pub fn amount(field: &Field) -> Result<Option<Decimal>, ResolveError> {
    Ok(amounts(field)?.into_iter().next())
}

/// Returns every amount component that parses, in component order.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` if the grammar has no amount component.
pub fn amounts(field: &Field) -> Result<Vec<Decimal>, ResolveError> {
    require(field, Capability::Amount)?;
    Ok(typed_components(field, &[ComponentType::Amount])
        .flatten()
        .filter_map(parse_amount)
        .collect())
}

/// Returns currency and amount pairs.
///
/// Each currency component is tied to the next amount component before the
/// following currency. Pairs where either side is absent or does not parse
/// are skipped.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` unless the grammar has both
/// currency and amount components.
pub fn monetary_amounts(field: &Field) -> Result<Vec<MonetaryAmount>, ResolveError> {
    require(field, Capability::MonetaryAmount)?;
    let positions = resolve_components_pattern(
        field.def().types,
        field.components(),
        &[ComponentType::Currency, ComponentType::Amount],
    );
    let mut pairs = Vec::new();
    let mut currency: Option<Option<CurrencyCode>> = None;
    for n in positions {
        let text = field.component(n).ok().flatten();
        match field.def().component_type(n) {
            ComponentType::Currency => currency = Some(text.and_then(CurrencyCode::new)),
            _ => {
                if let Some(ccy) = currency.take().flatten()
                    && let Some(amount) = text.and_then(parse_amount)
                {
                    pairs.push(MonetaryAmount::new(ccy, amount));
                }
            }
        }
    }
    Ok(pairs)
}

/// Returns the first currency and amount pair.
///
/// # Errors
/// Returns `ResolveError::MissingCapability` unless the grammar has both
/// currency and amount components.
pub fn monetary_amount(field: &Field) -> Result<Option<MonetaryAmount>, ResolveError> {
    Ok(monetary_amounts(field)?.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftfin_dictionary::fields::{FIELD_19, FIELD_20, FIELD_32A, FIELD_32B};

    #[test]
    fn test_amount_tolerates_suffix() {
        let field = Field::parse(&FIELD_19, "123dss");
        assert_eq!(amount(&field), Ok(Some(Decimal::from(123))));
    }

    #[test]
    fn test_amount_from_date_currency_amount() {
        let field = Field::parse(&FIELD_32A, "091019EUR1234,56");
        assert_eq!(amount(&field), Ok(Some(Decimal::new(123456, 2))));
        assert_eq!(amounts(&field).unwrap().len(), 1);
    }

    #[test]
    fn test_amount_absent() {
        let field = Field::parse(&FIELD_32A, "091019EUR");
        assert_eq!(amount(&field), Ok(None));
        assert!(amounts(&field).unwrap().is_empty());
    }

    #[test]
    fn test_amount_requires_capability() {
        let field = Field::parse(&FIELD_20, "123");
        assert!(matches!(
            amount(&field),
            Err(ResolveError::MissingCapability {
                capability: Capability::Amount,
                ..
            })
        ));
    }

    #[test]
    fn test_monetary_amount() {
        let field = Field::parse(&FIELD_32B, "USD100,");
        let expected = MonetaryAmount::new(CurrencyCode::new("USD").unwrap(), Decimal::from(100));
        assert_eq!(monetary_amount(&field), Ok(Some(expected)));
        assert_eq!(expected.to_string(), "USD100,");
    }

    #[test]
    fn test_monetary_amount_needs_both_sides() {
        let field = Field::parse(&FIELD_32B, "USD");
        assert_eq!(monetary_amounts(&field), Ok(Vec::new()));
        assert!(monetary_amount(&Field::parse(&FIELD_19, "1,")).is_err());
    }
}
