use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub player: String,
    pub from_team: String,
    pub to_team: String,
    pub date: String,
    /// Player profile URL.
    pub url: String,
}
