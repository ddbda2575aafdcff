use serde::{Deserialize, Serialize};

/// A team's position in a rankings table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRanking {
    /// Rank as displayed, ties included (e.g. `T3`).
    pub rank: String,
    pub team_name: String,
    pub region: String,
    pub points: String,
    pub url: String,
    pub logo_url: Option<String>,
}

/// Rankings grouped under one region header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionRankings {
    pub region: String,
    pub rankings: Vec<TeamRanking>,
}
