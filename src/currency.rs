//! Currency codes accepted by the reference rate queries
//!
//! The set mirrors the currencies the ECB publishes in its daily feed. It is
//! built once per query object and never mutated.

use std::collections::HashSet;

use crate::error::{FxRefError, Result};

/// Currency every published rate is quoted against
pub const BASE_CURRENCY: &str = "EUR";

/// Codes published in the daily reference feed, excluding the base currency
const REFERENCE_CODES: [&str; 30] = [
    "USD", "JPY", "BGN", "CZK", "DKK", "GBP", "HUF", "PLN", "RON", "SEK", "CHF", "ISK", "NOK",
    "TRY", "AUD", "BRL", "CAD", "CNY", "HKD", "IDR", "ILS", "INR", "KRW", "MXN", "MYR", "NZD",
    "PHP", "SGD", "THB", "ZAR",
];

/// Immutable set of three-letter codes the system is willing to query
#[derive(Debug, Clone)]
pub struct CurrencySet {
    codes: HashSet<&'static str>,
}

impl Default for CurrencySet {
    fn default() -> Self {
        Self::new()
    }
}

impl CurrencySet {
    /// Creates the set of ECB reference currencies
    pub fn new() -> Self {
        Self {
            codes: REFERENCE_CODES.into_iter().collect(),
        }
    }

    /// Returns true if the upper-case `code` is part of the set
    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Number of queryable codes
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if no code can be queried
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Checks that `code` can be queried and returns it upper-cased
    ///
    /// # Returns
    /// * `Ok(String)` - the normalised code
    /// * `Err(FxRefError::InvalidInput)` - empty, wrong length or unknown code
    /// * `Err(FxRefError::BaseCurrency)` - the code names the euro itself
    pub fn validate(&self, code: &str) -> Result<String> {
        if code.is_empty() {
            return Err(FxRefError::InvalidInput(
                "no currency code specified".to_string(),
            ));
        }

        if code.chars().count() != 3 {
            return Err(FxRefError::InvalidInput(format!(
                "the \"{}\" currency code has a wrong number of characters",
                code
            )));
        }

        let upper = code.to_uppercase();
        if !self.contains(&upper) {
            if is_base_currency(&upper) {
                return Err(FxRefError::BaseCurrency);
            }
            return Err(FxRefError::InvalidInput(format!(
                "the currency code \"{}\" is not part of the reference list",
                code
            )));
        }

        Ok(upper)
    }
}

/// Returns true if `code` names the base currency, ignoring case
pub fn is_base_currency(code: &str) -> bool {
    code.eq_ignore_ascii_case(BASE_CURRENCY)
}
