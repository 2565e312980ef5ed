/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Core value types for SWIFT field values.
//!
//! This module provides fundamental types used throughout SwiftFin:
//! - [`CurrencyCode`]: ISO 4217 three-letter currency code
//! - [`CountryCode`]: ISO 3166 two-letter country code
//! - [`Bic`]: Business Identifier Code (8 or 11 characters)
//! - [`Capability`]: Typed values a field grammar can expose
//! - Amount and date conversions using the SWIFT conventions

use crate::splitter::numeric_prefix;
use arrayvec::ArrayString;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Line terminator used inside field values on the wire.
pub const SWIFT_EOL: &str = "\r\n";

/// Standard narrative line width unless a field overrides it.
pub const DEFAULT_LINE_WIDTH: usize = 35;

/// Maximum length of a narrative codeword.
pub const MAX_CODEWORD_LEN: usize = 8;

/// ISO 4217 currency code.
///
/// Always three uppercase ASCII letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CurrencyCode(ArrayString<3>);

impl CurrencyCode {
    /// Creates a currency code.
    ///
    /// # Returns
    /// `Some(CurrencyCode)` if `s` is exactly three uppercase letters, `None` otherwise.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_uppercase()) {
            ArrayString::from(s).ok().map(Self)
        } else {
            None
        }
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ISO 3166 country code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CountryCode(ArrayString<2>);

impl CountryCode {
    /// Creates a country code from exactly two uppercase letters.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        if s.len() == 2 && s.bytes().all(|b| b.is_ascii_uppercase()) {
            ArrayString::from(s).ok().map(Self)
        } else {
            None
        }
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Business Identifier Code (ISO 9362).
///
/// Layout is `4!a2!a2!c[3!c]`: institution, country, location and an optional branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct Bic(ArrayString<11>);

impl Bic {
    /// Creates a BIC from an 8 or 11 character string.
    ///
    /// # Returns
    /// `Some(Bic)` if the string has a valid BIC layout, `None` otherwise.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        let b = s.as_bytes();
        if b.len() != 8 && b.len() != 11 {
            return None;
        }
        let letters = b[..6].iter().all(|c| c.is_ascii_uppercase());
        let rest = b[6..]
            .iter()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        if letters && rest {
            ArrayString::from(s).ok().map(Self)
        } else {
            None
        }
    }

    /// Returns the BIC as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the four letter institution code.
    #[must_use]
    pub fn institution(&self) -> &str {
        &self.0[..4]
    }

    /// Returns the country code.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.0[4..6]
    }

    /// Returns the location code.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.0[6..8]
    }

    /// Returns the branch code, if present.
    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        if self.0.len() == 11 {
            Some(&self.0[8..])
        } else {
            None
        }
    }

    /// Returns true if the BIC designates a primary office (no branch or `XXX`).
    #[must_use]
    pub fn is_primary_office(&self) -> bool {
        self.branch().is_none_or(|b| b == "XXX")
    }
}

impl fmt::Display for Bic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Bic {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s).ok_or(())
    }
}

/// Typed values a field grammar can expose to the resolvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    /// Decimal amount components.
    Amount,
    /// Currency code components.
    Currency,
    /// Date components.
    Date,
    /// BIC components.
    Bic,
    /// Currency and amount components tied together.
    MonetaryAmount,
}

impl Capability {
    /// Returns the lowercase capability name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Amount => "amount",
            Self::Currency => "currency",
            Self::Date => "date",
            Self::Bic => "bic",
            Self::MonetaryAmount => "monetary amount",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parses a SWIFT amount using `,` as the decimal separator.
///
/// Only the leading numeric run is considered, so trailing text is ignored
/// (`"123dss"` yields `123`). A bare trailing comma (`"123,"`) is accepted.
///
/// # Returns
/// The parsed decimal, or `None` if the value does not start with a digit.
#[must_use]
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let number = numeric_prefix(s.trim_start())?;
    let normalized = number.trim_end_matches(',').replace(',', ".");
    Decimal::from_str(&normalized).ok()
}

/// Formats a decimal using the SWIFT conventions.
///
/// The fractional separator is `,` and a value without fraction keeps a bare
/// trailing comma: `123` becomes `"123,"`, `1.50` becomes `"1,50"`.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let text = amount.to_string();
    if text.contains('.') {
        text.replace('.', ",")
    } else {
        let mut text = text;
        text.push(',');
        text
    }
}

/// Parses a SWIFT date in `YYMMDD` or `YYYYMMDD` form.
///
/// Two-digit years below 80 map to 20xx, the rest to 19xx.
///
/// # Returns
/// The calendar date, or `None` if the token is not a valid date.
#[must_use]
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let (year, rest) = match s.len() {
        6 => {
            let yy: i32 = s[..2].parse().ok()?;
            let year = if yy < 80 { 2000 + yy } else { 1900 + yy };
            (year, &s[2..])
        }
        8 => (s[..4].parse().ok()?, &s[4..]),
        _ => return None,
    };
    let month: u32 = rest[..2].parse().ok()?;
    let day: u32 = rest[2..].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code() {
        let eur = CurrencyCode::new("EUR").unwrap();
        assert_eq!(eur.as_str(), "EUR");
        assert!(CurrencyCode::new("eur").is_none());
        assert!(CurrencyCode::new("EURO").is_none());
        assert!(CurrencyCode::new("E1R").is_none());
    }

    #[test]
    fn test_country_code() {
        assert_eq!(CountryCode::new("BE").unwrap().as_str(), "BE");
        assert!(CountryCode::new("B").is_none());
        assert!(CountryCode::new("be").is_none());
    }

    #[test]
    fn test_bic_parts() {
        let bic = Bic::new("DEUTDEFF500").unwrap();
        assert_eq!(bic.institution(), "DEUT");
        assert_eq!(bic.country(), "DE");
        assert_eq!(bic.location(), "FF");
        assert_eq!(bic.branch(), Some("500"));
        assert!(!bic.is_primary_office());

        let head = Bic::new("DEUTDEFF").unwrap();
        assert_eq!(head.branch(), None);
        assert!(head.is_primary_office());
        assert!(Bic::new("DEUTDEFFXXX").unwrap().is_primary_office());
    }

    #[test]
    fn test_bic_invalid() {
        assert!(Bic::new("DEUT").is_none());
        assert!(Bic::new("DEU1DEFF").is_none());
        assert!(Bic::new("deutdeff").is_none());
        assert!("DEUTDEFF5".parse::<Bic>().is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1234,56"), Some(Decimal::new(123456, 2)));
        assert_eq!(parse_amount("123,"), Some(Decimal::from(123)));
        assert_eq!(parse_amount("123dss"), Some(Decimal::from(123)));
        assert_eq!(parse_amount("1,00Fees"), Some(Decimal::new(100, 2)));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(Decimal::from(123)), "123,");
        assert_eq!(format_amount(Decimal::new(150, 2)), "1,50");
        assert_eq!(format_amount(Decimal::new(1, 1)), "0,1");
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("091019"), NaiveDate::from_ymd_opt(2009, 10, 19));
        assert_eq!(parse_date("991231"), NaiveDate::from_ymd_opt(1999, 12, 31));
        assert_eq!(parse_date("20240229"), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(parse_date("091332"), None);
        assert_eq!(parse_date("0910"), None);
        assert_eq!(parse_date("09101A"), None);
    }

    #[test]
    fn test_capability_display() {
        assert_eq!(Capability::Bic.to_string(), "bic");
        assert_eq!(Capability::MonetaryAmount.to_string(), "monetary amount");
    }
}
