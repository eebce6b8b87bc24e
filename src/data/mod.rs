//! Data models for the daily reference rate feed
//!
//! This module contains the parsed representation of the feed and the result
//! type returned by rate queries.

pub mod feed;

pub use feed::Feed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One currency/rate pair as published in the feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    /// Three-letter currency code
    pub currency: String,
    /// Decimal rate string against the euro
    pub rate: String,
}

/// Answer to a single rate query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// Publication date of the rate (midnight UTC), or the query instant for the base currency
    pub last_update: DateTime<Utc>,
    /// Units of the queried currency per euro
    pub rate: f64,
}

impl QueryResult {
    /// Synthetic result for the base currency quoted against itself
    pub fn base_currency() -> Self {
        Self {
            last_update: Utc::now(),
            rate: 1.00,
        }
    }
}
