//! Cache module for storing the reference document on disk
//!
//! This module provides a cache manager that keeps the raw feed in a local
//! directory for reuse during the same calendar day. A cached copy written on a
//! previous day, or an empty one, is removed before the feed is fetched again.

mod manager;

pub use manager::{is_stale, CacheManager};
