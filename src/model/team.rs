use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A team profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub tag: Option<String>,
    pub logo_url: Option<String>,
    pub region: Option<String>,
    /// Platform name to profile URL.
    pub social_links: BTreeMap<String, String>,
    pub total_winnings: Option<String>,
    pub roster: Vec<TeamPlayer>,
    pub recent_matches: Vec<TeamMatch>,
    pub upcoming_matches: Vec<TeamMatch>,
    pub event_placements: Vec<EventPlacement>,
    pub rating_history: Vec<RatingHistoryEntry>,
    pub form_rating: Vec<FormRating>,
    pub ranking_history: Vec<RankingHistoryEntry>,
    pub url: String,
}

/// A roster member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamPlayer {
    pub alias: String,
    pub real_name: Option<String>,
    pub url: String,
    pub image_url: Option<String>,
    /// Role tags such as `SUB`, `INACTIVE` or `head coach`.
    pub roles: Vec<String>,
}

/// A match on the team page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMatch {
    pub event_name: String,
    pub event_stage: Option<String>,
    pub opponent: String,
    pub score: Option<String>,
    pub date: String,
    pub url: String,
    pub is_upcoming: bool,
}

/// The team's result at one event, possibly across several stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPlacement {
    pub event_name: String,
    pub year: String,
    pub results: Vec<PlacementResult>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementResult {
    pub stage: String,
    pub rank: String,
    pub prize: Option<String>,
}

/// Current rank of the team in one region's rankings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingHistoryEntry {
    pub rank: String,
    pub region: String,
    pub url: String,
}

/// A match-result entry of the rating timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormRating {
    pub date: String,
    pub opponent: String,
    pub event: String,
    pub result: String,
    pub current_rating: Option<i32>,
    pub opponent_rating: Option<i32>,
    pub core_id: String,
}

/// A rank-update entry of the rating timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingHistoryEntry {
    pub date: String,
    pub event: String,
    pub rank: String,
    pub core_id: String,
}
