//! Blocking HTTP retrieval of the reference document

use log::debug;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::error::{FxRefError, Result};

/// Client for downloading the raw reference feed
#[derive(Debug, Clone)]
pub struct FeedClient {
    timeout: Duration,
}

impl FeedClient {
    /// Create a new FeedClient bounding every request by `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Performs a GET against `url` and returns the full body
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - the response body of a 2xx answer
    /// * `Err(FxRefError::Http)` - client construction, transport failure or timeout
    /// * `Err(FxRefError::Status)` - the server answered with a non-2xx status
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let client = Client::builder().timeout(self.timeout).build()?;

        debug!("fetching {}", url);
        let response = client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FxRefError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes()?;
        debug!("received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}
