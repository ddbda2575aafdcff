use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSearchResult {
    pub id: String,
    pub name: String,
    pub tag: String,
    pub region: String,
    pub logo: Option<String>,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSearchResult {
    pub id: String,
    pub name: String,
    pub real_name: Option<String>,
    pub team: Option<String>,
    pub country: Option<String>,
    pub url: String,
}
