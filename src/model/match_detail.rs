use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

/// Full details of a single match page, including per-map statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetail {
    pub event_name: String,
    pub event_image: Option<String>,
    pub match_subtitle: String,
    pub date: String,
    pub time: String,
    pub patch: Option<String>,
    pub team1: TeamInfo,
    pub team2: TeamInfo,
    pub status: MatchStatus,
    /// Countdown such as `2h 8m`, only for matches that have not started.
    pub time_until_match: Option<String>,
    /// Series length such as `Bo3`.
    pub format: String,
    pub bans_picks_info: Option<String>,
    pub streams: Vec<StreamInfo>,
    pub maps: Vec<MapResult>,
    pub map_stats: MapStats,
}

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
pub enum MatchStatus {
    #[default]
    Upcoming,
    Live,
    Completed,
}

/// One of the two sides of a match, in page order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum_macros::Display,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TeamSlot {
    Team1,
    Team2,
}

impl TeamSlot {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Team1),
            1 => Some(Self::Team2),
            _ => None,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Team1 => Self::Team2,
            Self::Team2 => Self::Team1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub name: String,
    pub logo: Option<String>,
    pub link: Option<String>,
    pub score: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamInfo {
    pub name: String,
    pub url: String,
}

/// Map score of one team, split into attack and defense halves when shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamScore {
    pub total: String,
    pub attack: Option<String>,
    pub defend: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapResult {
    pub map_name: String,
    pub team1_score: TeamScore,
    pub team2_score: TeamScore,
    pub winner: Option<TeamSlot>,
    pub picked_by: Option<TeamSlot>,
    /// Map length such as `51:55`.
    pub duration: Option<String>,
}

/// Per-map statistics. `all_maps` holds the series aggregate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStats {
    pub all_maps: Option<MapStatsData>,
    pub map1: Option<MapStatsData>,
    pub map2: Option<MapStatsData>,
    pub map3: Option<MapStatsData>,
    pub map4: Option<MapStatsData>,
    pub map5: Option<MapStatsData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStatsData {
    pub map_name: String,
    pub player_stats: Vec<PlayerMatchStat>,
    pub rounds: Vec<Round>,
}

/// A value reported as a combined figure plus attack and defense halves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideStat {
    pub all: String,
    pub attack: String,
    pub defend: String,
}

impl Default for SideStat {
    fn default() -> Self {
        Self {
            all: "0".to_string(),
            attack: "0".to_string(),
            defend: "0".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMatchStat {
    pub player_name: String,
    pub team: String,
    pub agents: Vec<String>,
    pub rating: SideStat,
    pub acs: SideStat,
    pub kills: SideStat,
    pub deaths: SideStat,
    pub assists: SideStat,
    pub kd_diff: SideStat,
    pub kast: SideStat,
    pub adr: SideStat,
    pub hs: SideStat,
    pub fk: SideStat,
    pub fd: SideStat,
    pub fk_diff: SideStat,
}

/// One round of a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub number: String,
    /// Running score after the round, e.g. `7-5`.
    pub score: String,
    pub winner: TeamSlot,
    /// Team on the attacking side, absent when the winning square carries no
    /// side class.
    pub t: Option<TeamSlot>,
    /// Team on the defending side.
    pub ct: Option<TeamSlot>,
    pub win_condition: WinCondition,
    pub win_icon_url: Option<String>,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum WinCondition {
    Elimination,
    BombExploded,
    BombDefused,
    TimeRanOut,
    Unknown,
}

impl WinCondition {
    /// Classify by the round icon path, first match wins.
    pub fn from_icon(src: &str) -> Self {
        if src.contains("elim") {
            Self::Elimination
        } else if src.contains("boom") {
            Self::BombExploded
        } else if src.contains("defuse") {
            Self::BombDefused
        } else if src.contains("time") {
            Self::TimeRanOut
        } else {
            Self::Unknown
        }
    }
}
