//! Query configuration
//!
//! All settings are passed explicitly at construction; no environment
//! variables are consulted.

use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

/// Location of the ECB daily reference rates
pub const DEFAULT_URL: &str = "https://www.ecb.europa.eu/stats/eurofxref/eurofxref-daily.xml";

/// Request timeout used unless overridden
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// How queries for the base currency itself are answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseCurrencyPolicy {
    /// Answer with a rate of exactly 1.00 and the current instant, without I/O
    #[default]
    Synthetic,
    /// Reject the query with `FxRefError::BaseCurrency`
    Reject,
}

/// Settings shared by every query made through one `EuroFxRef`
#[derive(Debug, Clone)]
pub struct FxRefConfig {
    /// Remote document location
    pub url: String,
    /// Upper bound for one HTTP request
    pub timeout: Duration,
    /// Cache directory; empty disables caching
    pub cache_dir: PathBuf,
    /// Whether a missing cache directory is created
    pub create_cache_dir: bool,
    /// Emit the raw document at debug log level
    pub debug: bool,
    pub base_currency_policy: BaseCurrencyPolicy,
}

impl FxRefConfig {
    /// Creates a configuration for the ECB feed with the default timeout
    pub fn new(cache_dir: impl Into<PathBuf>, create_cache_dir: bool, debug: bool) -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_dir: cache_dir.into(),
            create_cache_dir,
            debug,
            base_currency_policy: BaseCurrencyPolicy::default(),
        }
    }
}

/// Returns the platform cache directory for this crate
///
/// Uses `~/.cache/eurofxref/` on Linux, or the equivalent on other platforms.
/// Returns `None` if no home directory can be determined.
pub fn default_cache_dir() -> Option<PathBuf> {
    let project_dirs = ProjectDirs::from("", "", "eurofxref")?;
    Some(project_dirs.cache_dir().to_path_buf())
}
