//! Shared traits and the currency code newtype.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Code of the currency every exchange rate is quoted against.
pub const BASE_CURRENCY: &str = "USD";

/// Exposes a stable identifier for entities kept in the history.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Provides read-only access to an entity's display name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Converts an entity into a user-facing display label.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for the USD base every rate table is quoted against.
    pub fn is_base(&self) -> bool {
        self.0.eq_ignore_ascii_case(BASE_CURRENCY)
    }

    /// Three ASCII letters, the only shape the rate provider understands.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 3 && self.0.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new(BASE_CURRENCY)
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_is_normalised_to_uppercase() {
        let code = CurrencyCode::new(" eur ");
        assert_eq!(code.as_str(), "EUR");
        assert!(code.is_well_formed());
        assert!(!code.is_base());
    }

    #[test]
    fn currency_code_serializes_as_plain_string() {
        let json = serde_json::to_string(&CurrencyCode::new("gbp")).unwrap();
        assert_eq!(json, "\"GBP\"");
    }

    #[test]
    fn malformed_codes_are_flagged() {
        assert!(!CurrencyCode::new("US").is_well_formed());
        assert!(!CurrencyCode::new("U5D").is_well_formed());
        assert!(CurrencyCode::default().is_base());
    }
}
