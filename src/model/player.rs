use serde::{Deserialize, Serialize};

/// A player profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub real_name: Option<String>,
    pub country: Option<String>,
    pub country_flag: Option<String>,
    pub team: Option<String>,
    pub agents: Vec<String>,
    pub past_teams: Vec<PastTeam>,
    pub url: String,
}

/// A team the player was on before, with the period shown on the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PastTeam {
    pub name: String,
    pub period: Option<String>,
    pub url: String,
}
