use serde::{Deserialize, Serialize};

/// A match as listed on the schedule and results pages.
///
/// `score1`/`score2` are absent for matches that have not been played yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub team1: String,
    pub team2: String,
    pub time: String,
    pub event: String,
    pub score1: Option<String>,
    pub score2: Option<String>,
    pub url: String,
    pub team1_country_flag: Option<String>,
    pub team2_country_flag: Option<String>,
    pub event_icon: Option<String>,
}

impl Match {
    pub fn is_played(&self) -> bool {
        self.score1.is_some() && self.score2.is_some()
    }
}

/// A match currently being played, as shown on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveMatch {
    pub team1: String,
    pub team2: String,
    pub score1: String,
    pub score2: String,
    pub event: String,
    /// Status label such as `LIVE` or the current map.
    pub status: String,
    pub team1_country_flag: Option<String>,
    pub team2_country_flag: Option<String>,
    pub event_icon: Option<String>,
    pub url: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
pub enum StreamPlatform {
    Twitch,
    YouTube,
    Other,
}

impl StreamPlatform {
    pub fn from_url(url: &str) -> Self {
        let url = url.to_lowercase();
        if url.contains("twitch.tv") {
            Self::Twitch
        } else if url.contains("youtube.com") || url.contains("youtu.be") {
            Self::YouTube
        } else {
            Self::Other
        }
    }
}

/// A stream link offered on a match page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamLink {
    pub platform: StreamPlatform,
    pub url: String,
    pub language: Option<String>,
}
