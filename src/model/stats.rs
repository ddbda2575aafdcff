use serde::{Deserialize, Serialize};

/// Aggregate statistics of one player from the stats table.
///
/// Values are kept exactly as displayed, percent signs included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub player: String,
    pub team: String,
    pub agents: Vec<String>,
    pub maps_played: String,
    pub rating: String,
    pub acs: String,
    pub kd: String,
    pub kast: String,
    pub adr: String,
    pub kpr: String,
    pub apr: String,
    pub fkpr: String,
    pub fdpr: String,
    pub hs_percentage: String,
    pub cl_percentage: String,
    pub clutches: String,
    pub max_kills: String,
    pub kills: String,
    pub deaths: String,
    pub assists: String,
    pub first_kills: String,
    pub first_deaths: String,
}
