//! Query facade for daily euro reference rates
//!
//! `EuroFxRef` validates the requested code, resolves the document through
//! the disk cache or the network, and extracts the matching rate.

use log::{debug, info, warn};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::cache::CacheManager;
use crate::client::FeedClient;
use crate::config::{default_cache_dir, BaseCurrencyPolicy, FxRefConfig};
use crate::currency::{is_base_currency, CurrencySet};
use crate::data::{Feed, QueryResult};
use crate::error::Result;

/// Answers "what is today's reference rate for currency X"
///
/// The configuration and currency set are fixed once the first query is made;
/// the builder methods consume `self` and are meant for construction only.
#[derive(Debug, Clone)]
pub struct EuroFxRef {
    config: FxRefConfig,
    currencies: CurrencySet,
}

impl EuroFxRef {
    /// Creates a query object using `cache_dir` (empty disables caching)
    pub fn new(cache_dir: impl Into<PathBuf>, create_cache_dir: bool, debug: bool) -> Self {
        Self::from_config(FxRefConfig::new(cache_dir, create_cache_dir, debug))
    }

    /// Creates a query object caching in the platform cache directory
    ///
    /// Parents of the platform directory are created here; the cache creates
    /// only the last level. Falls back to no caching when no cache directory
    /// can be determined or its parents cannot be created.
    pub fn with_default_cache(debug: bool) -> Self {
        let cache_dir = default_cache_dir()
            .filter(|dir| match dir.parent() {
                Some(parent) => match fs::create_dir_all(parent) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("caching disabled, cannot create {}: {}", parent.display(), e);
                        false
                    }
                },
                None => true,
            })
            .unwrap_or_default();
        Self::new(cache_dir, true, debug)
    }

    /// Creates a query object from a prepared configuration
    pub fn from_config(config: FxRefConfig) -> Self {
        Self {
            config,
            currencies: CurrencySet::new(),
        }
    }

    /// Overrides the document location
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Overrides the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Chooses how queries for the base currency are answered
    pub fn with_base_currency_policy(mut self, policy: BaseCurrencyPolicy) -> Self {
        self.config.base_currency_policy = policy;
        self
    }

    /// Returns the configuration queries run with
    pub fn config(&self) -> &FxRefConfig {
        &self.config
    }

    /// Returns the codes accepted by [`EuroFxRef::query`]
    pub fn currencies(&self) -> &CurrencySet {
        &self.currencies
    }

    /// Checks that `code` names a queryable currency
    ///
    /// The base currency is rejected with `FxRefError::BaseCurrency`, distinct
    /// from the error for unknown codes.
    pub fn validate_currency_code(&self, code: &str) -> Result<()> {
        self.currencies.validate(code).map(|_| ())
    }

    /// Returns today's reference rate for `code`
    ///
    /// # Returns
    /// * `Ok(QueryResult)` - publication date and rate, or a synthetic 1.00
    ///   result for the base currency under `BaseCurrencyPolicy::Synthetic`
    /// * `Err(FxRefError)` - validation, cache, network, decode or data failure
    pub fn query(&self, code: &str) -> Result<QueryResult> {
        let code = match self.currencies.validate(code) {
            Ok(code) => code,
            Err(err) => {
                if is_base_currency(code)
                    && self.config.base_currency_policy == BaseCurrencyPolicy::Synthetic
                {
                    return Ok(QueryResult::base_currency());
                }
                return Err(err);
            }
        };

        self.feed()?.rate_for(&code)
    }

    /// Same as [`EuroFxRef::query`]
    pub fn daily(&self, code: &str) -> Result<QueryResult> {
        self.query(code)
    }

    /// Returns the whole parsed document, using the cache when fresh
    pub fn feed(&self) -> Result<Feed> {
        let document = self.document()?;
        Feed::parse(&document)
    }

    /// Resolves the raw document bytes from the cache or the network
    fn document(&self) -> Result<Vec<u8>> {
        let cache = CacheManager::new(&self.config.cache_dir, self.config.create_cache_dir);
        let path = cache.cache_path(&self.config.url)?;

        let document = match cache.lookup(&path)? {
            Some(cached) => cached,
            None => {
                let fetched = FeedClient::new(self.config.timeout).fetch(&self.config.url)?;
                cache.store(&path, &fetched)?;
                info!("fetched reference document from {}", self.config.url);
                fetched
            }
        };

        if self.config.debug {
            debug!("{}", String::from_utf8_lossy(&document));
        }

        Ok(document)
    }
}
