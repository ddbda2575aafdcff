//! Cache-aside access to extracted records.
//!
//! Records are stored as JSON strings under namespaced keys (see [`CacheKey`]).
//! A failing or corrupt cache never fails a lookup: the record is recomputed
//! from the site instead.

mod key;
mod memory;

use std::future::Future;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

pub use key::{CacheKey, Resource, NAMESPACE};
pub use memory::MemoryStore;

use crate::error::{CacheError, Result};

/// A string key/value store with optional per-entry expiry.
pub trait CacheStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = std::result::Result<Option<String>, CacheError>> + Send;

    /// Store `value`, replacing any previous entry. `None` never expires.
    fn set(
        &self,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> impl Future<Output = std::result::Result<(), CacheError>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = std::result::Result<(), CacheError>> + Send;

    /// Drop every entry.
    fn invalidate(&self) -> impl Future<Output = std::result::Result<(), CacheError>> + Send;
}

/// Return the record stored under `key`, or compute, store and return it.
///
/// Undecodable entries and store failures are logged and treated as misses.
/// Concurrent misses on one key may each run `compute`; the last write wins.
pub async fn get_or_compute<S, T, F, Fut>(store: &S, key: &CacheKey, ttl: Option<Duration>, compute: F) -> Result<T>
where
    S: CacheStore,
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let key = key.as_str();
    match store.get(key).await {
        Ok(Some(raw)) => match decode(&raw) {
            Ok(value) => {
                debug!(key, "cache hit");
                return Ok(value);
            }
            Err(error) => warn!(key, %error, "discarding undecodable cache entry"),
        },
        Ok(None) => debug!(key, "cache miss"),
        Err(error) => warn!(key, %error, "cache read failed"),
    }

    let value = compute().await?;

    match encode(&value) {
        Ok(raw) => {
            if let Err(error) = store.set(key, raw, ttl).await {
                warn!(key, %error, "cache write failed");
            }
        }
        Err(error) => warn!(key, %error, "record could not be encoded for the cache"),
    }
    Ok(value)
}

fn decode<T: DeserializeOwned>(raw: &str) -> std::result::Result<T, CacheError> {
    Ok(serde_json::from_str(raw)?)
}

fn encode<T: Serialize>(value: &T) -> std::result::Result<String, CacheError> {
    Ok(serde_json::to_string(value)?)
}
