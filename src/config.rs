use std::time::Duration;

use crate::cache::Resource;
use crate::error::{Result, VlrError};

const DEFAULT_MAX_CAPACITY: u64 = 10_000;
const DEFAULT_LIVE_MATCHES_TTL: Duration = Duration::from_secs(60 * 60);
const DEFAULT_AGGREGATE_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// Cache sizing and expiry policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of cached records.
    pub max_capacity: u64,
    /// Expiry of the live matches snapshot.
    pub live_matches_ttl: Duration,
    /// Expiry of the events and stats listings.
    pub aggregate_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            live_matches_ttl: DEFAULT_LIVE_MATCHES_TTL,
            aggregate_ttl: DEFAULT_AGGREGATE_TTL,
        }
    }
}

impl CacheConfig {
    /// Read configuration from environment variables.
    ///
    /// - `VLR_CACHE_MAX_CAPACITY` (optional, defaults to 10000)
    /// - `VLR_LIVE_MATCHES_TTL_SECS` (optional, defaults to one hour)
    /// - `VLR_AGGREGATE_TTL_SECS` (optional, defaults to six hours)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            max_capacity: positive(&lookup, "VLR_CACHE_MAX_CAPACITY")?.unwrap_or(defaults.max_capacity),
            live_matches_ttl: positive(&lookup, "VLR_LIVE_MATCHES_TTL_SECS")?
                .map_or(defaults.live_matches_ttl, Duration::from_secs),
            aggregate_ttl: positive(&lookup, "VLR_AGGREGATE_TTL_SECS")?
                .map_or(defaults.aggregate_ttl, Duration::from_secs),
        })
    }

    /// Expiry for a resource kind. `None` keeps the record until it is
    /// evicted or the cache is invalidated.
    pub fn ttl_for(&self, resource: Resource) -> Option<Duration> {
        match resource {
            Resource::LiveMatches => Some(self.live_matches_ttl),
            Resource::Events | Resource::Stats => Some(self.aggregate_ttl),
            _ => None,
        }
    }
}

fn positive(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<u64>> {
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    let parsed: u64 = raw
        .trim()
        .parse()
        .map_err(|_| VlrError::Config(format!("invalid {name} '{raw}': must be a positive integer")))?;
    if parsed == 0 {
        return Err(VlrError::Config(format!("{name} must be at least 1")));
    }
    Ok(Some(parsed))
}
