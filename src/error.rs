//! Error types for reference rate queries

use std::io;
use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Broad category of a failure, independent of the concrete variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty, malformed or unknown currency code
    InvalidInput,
    /// Cache directory or file could not be created, read, removed or written
    CacheIo,
    /// Request construction, transport failure or non-2xx status
    Network,
    /// The document does not have the expected XML shape
    Decode,
    /// The document decoded but lacks the requested data or holds bad values
    Data,
}

/// Errors that can occur while answering a query
#[derive(Debug, Error)]
pub enum FxRefError {
    /// The currency code was rejected before any I/O happened
    #[error("{0}")]
    InvalidInput(String),

    /// The code names the base currency itself
    #[error("all currencies quoted against the euro (base currency)")]
    BaseCurrency,

    /// A filesystem operation on the cache failed
    #[error("error {action} {}: {source}", .path.display())]
    CacheIo {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The request could not be built from the configured location
    #[error("client could not create request: {0}")]
    InvalidUrl(String),

    /// HTTP request failed
    #[error("error making http request: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("the request get \"{url}\" returned an error with status code {status}")]
    Status { url: String, status: u16 },

    /// Failed to decode the XML document
    #[error("error decoding the XML document: {0}")]
    Decode(#[from] quick_xml::de::DeError),

    /// The document has no entry for the requested currency
    #[error("no conversion rate value was returned for \"{0}\" currency code")]
    RateNotFound(String),

    /// The published rate is not a number
    #[error("invalid rate \"{value}\": {source}")]
    InvalidRate {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// The publication date does not match YYYY-MM-DD
    #[error("invalid publication date \"{value}\": {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

impl FxRefError {
    /// Returns the category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            FxRefError::InvalidInput(_) | FxRefError::BaseCurrency => ErrorKind::InvalidInput,
            FxRefError::CacheIo { .. } => ErrorKind::CacheIo,
            FxRefError::InvalidUrl(_) | FxRefError::Http(_) | FxRefError::Status { .. } => {
                ErrorKind::Network
            }
            FxRefError::Decode(_) => ErrorKind::Decode,
            FxRefError::RateNotFound(_)
            | FxRefError::InvalidRate { .. }
            | FxRefError::InvalidDate { .. } => ErrorKind::Data,
        }
    }

    pub(crate) fn cache_io(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        FxRefError::CacheIo {
            action,
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, FxRefError>;
