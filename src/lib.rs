//! Daily euro foreign exchange reference rates
//!
//! Retrieves the ECB daily reference feed, keeps the raw document in a local
//! cache for reuse during the same calendar day, and answers single-currency
//! rate queries against the euro.
//!
//! ```no_run
//! use eurofxref::EuroFxRef;
//!
//! let fxref = EuroFxRef::new("eurofxref_cache", true, false);
//! let usd = fxref.query("USD")?;
//! println!("{} USD per EUR as of {}", usd.rate, usd.last_update.date_naive());
//! # Ok::<(), eurofxref::FxRefError>(())
//! ```

pub mod cache;
pub mod client;
pub mod config;
pub mod currency;
pub mod data;
pub mod error;
pub mod fxref;

pub use config::{BaseCurrencyPolicy, FxRefConfig};
pub use currency::{CurrencySet, BASE_CURRENCY};
pub use data::{Feed, QueryResult, RateEntry};
pub use error::{ErrorKind, FxRefError, Result};
pub use fxref::EuroFxRef;
