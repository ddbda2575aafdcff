use std::fmt;

use strum_macros::{AsRefStr, EnumIter};

/// Namespace prefixed to every key this crate writes.
pub const NAMESPACE: &str = "vlr";

/// The kinds of records the service caches, one key prefix each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Resource {
    UpcomingMatches,
    CompletedMatches,
    MatchesByRegion,
    MatchesByEvent,
    LiveMatches,
    MatchStreams,
    MatchDetails,
    Events,
    EventDetail,
    EventDetailUrl,
    Stats,
    News,
    NewsDetail,
    Transfers,
    Team,
    Player,
    SearchTeams,
    SearchPlayers,
    GlobalRankings,
    RankingsByRegion,
}

/// A cache key rendered as `vlr:<resource>:<param>:<param>...`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    resource: Resource,
    rendered: String,
}

impl CacheKey {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            rendered: format!("{NAMESPACE}:{}", resource.as_ref()),
        }
    }

    /// Append a parameter segment.
    pub fn param(mut self, value: impl fmt::Display) -> Self {
        self.rendered.push(':');
        self.rendered.push_str(&value.to_string());
        self
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn as_str(&self) -> &str {
        &self.rendered
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rendered)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.rendered
    }
}
