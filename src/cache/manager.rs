//! Cache manager for persisting the reference document to disk
//!
//! Freshness is decided per local calendar day rather than by a rolling TTL,
//! matching the publisher's once-per-business-day update cadence.

use chrono::{DateTime, Local, NaiveDate};
use log::{debug, info};
use reqwest::Url;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{FxRefError, Result};

/// Returns true if a cached file must not be trusted on `today`
///
/// A file is stale when it is empty or when its modification time falls on a
/// different local calendar day than `today`.
pub fn is_stale(metadata: &Metadata, today: NaiveDate) -> bool {
    if metadata.len() == 0 {
        return true;
    }

    match metadata.modified() {
        Ok(modified) => DateTime::<Local>::from(modified).date_naive() != today,
        Err(_) => true,
    }
}

/// Manages the single cached copy of the reference document
///
/// An empty cache directory path disables the cache entirely: nothing is read
/// from or written to disk.
#[derive(Debug, Clone)]
pub struct CacheManager {
    /// Directory where the document is stored
    cache_dir: PathBuf,
    /// Whether a missing cache directory may be created
    create_dir: bool,
}

impl CacheManager {
    /// Creates a new CacheManager for the given directory
    pub fn new(cache_dir: impl Into<PathBuf>, create_dir: bool) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            create_dir,
        }
    }

    /// Returns true when no cache directory is configured
    pub fn is_disabled(&self) -> bool {
        self.cache_dir.as_os_str().is_empty()
    }

    /// Returns the path of the cached copy of the document at `url`
    ///
    /// The file is named after the last segment of the URL path.
    pub fn cache_path(&self, url: &str) -> Result<PathBuf> {
        let parsed =
            Url::parse(url).map_err(|e| FxRefError::InvalidUrl(format!("{}: {}", url, e)))?;
        let filename = parsed
            .path_segments()
            .and_then(|segments| segments.last())
            .filter(|name| !name.is_empty())
            .ok_or_else(|| {
                FxRefError::InvalidUrl(format!("\"{}\" does not name a document", url))
            })?;

        Ok(self.cache_dir.join(filename))
    }

    /// Reads the cached document at `path` if it is fresh
    ///
    /// # Returns
    /// * `Ok(Some(bytes))` on a cache hit
    /// * `Ok(None)` on a miss: caching disabled, directory absent (created when
    ///   allowed), file absent, or a stale file that has just been removed
    /// * `Err(FxRefError::CacheIo)` if creating the directory, removing a stale
    ///   file or reading a fresh one fails
    pub fn lookup(&self, path: &Path) -> Result<Option<Vec<u8>>> {
        if self.is_disabled() {
            return Ok(None);
        }

        match fs::metadata(&self.cache_dir) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if self.create_dir {
                    fs::create_dir(&self.cache_dir).map_err(|e| {
                        FxRefError::cache_io("creating cache directory", &self.cache_dir, e)
                    })?;
                    info!("created cache directory {}", self.cache_dir.display());
                }
                return Ok(None);
            }
            Err(e) => {
                return Err(FxRefError::cache_io(
                    "inspecting cache directory",
                    &self.cache_dir,
                    e,
                ))
            }
            Ok(_) => {}
        }

        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(FxRefError::cache_io("inspecting cached xml file", path, e))
            }
        };

        if is_stale(&metadata, Local::now().date_naive()) {
            fs::remove_file(path)
                .map_err(|e| FxRefError::cache_io("removing cached xml file", path, e))?;
            debug!("removed stale cache file {}", path.display());
            return Ok(None);
        }

        let data = fs::read(path)
            .map_err(|e| FxRefError::cache_io("reading the cached xml file", path, e))?;
        debug!("cache hit for {} ({} bytes)", path.display(), data.len());
        Ok(Some(data))
    }

    /// Writes `data` to `path`, replacing any previous content
    ///
    /// Does nothing when caching is disabled.
    pub fn store(&self, path: &Path, data: &[u8]) -> Result<()> {
        if self.is_disabled() {
            return Ok(());
        }

        fs::write(path, data)
            .map_err(|e| FxRefError::cache_io("writing the cached xml file", path, e))?;
        debug!("cached {} bytes to {}", data.len(), path.display());
        Ok(())
    }
}
