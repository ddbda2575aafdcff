use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// A single esports event (tournament/league) from the events listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub status: EventStatus,
    pub dates: String,
    pub region: String,
    pub prize_pool: String,
    pub image: Option<String>,
    pub url: String,
}

/// The current status of an event.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    EnumString,
    strum_macros::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Ongoing,
    Upcoming,
    Completed,
    #[default]
    Unknown,
}

/// Full event page: participants and bracket structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventDetail {
    pub id: String,
    pub name: String,
    pub dates: String,
    pub prize_pool: Option<String>,
    pub teams: Vec<EventTeam>,
    pub brackets: Vec<EventBracketGroup>,
    pub location: Option<String>,
    pub format: Option<String>,
    pub logo_url: Option<String>,
    pub region: Option<String>,
    pub url: String,
}

/// A team participating in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventTeam {
    pub name: String,
    pub tag: Option<String>,
    /// Placement such as `#1` or `3rd`.
    pub standing: Option<String>,
    pub logo_url: Option<String>,
    pub url: String,
}

/// One bracket path, e.g. `Upper`, `Middle` or `Lower`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBracketGroup {
    pub name: String,
    pub rounds: Vec<EventBracketRound>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBracketRound {
    pub name: String,
    pub matches: Vec<EventBracketMatch>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBracketMatch {
    pub team1: EventBracketTeam,
    pub team2: EventBracketTeam,
    pub status: Option<String>,
    pub url: Option<String>,
}

/// A team slot in a bracket match. Unfilled slots are named [`EventBracketTeam::TBD`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventBracketTeam {
    pub name: String,
    pub score: Option<String>,
    pub is_winner: bool,
    pub logo_url: Option<String>,
}

impl EventBracketTeam {
    pub const TBD: &'static str = "TBD";

    pub fn tbd() -> Self {
        Self {
            name: Self::TBD.to_string(),
            score: None,
            is_winner: false,
            logo_url: None,
        }
    }
}
