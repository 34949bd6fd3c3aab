//! Response shapes for the vlrggapi `/stats` endpoint.
//!
//! The API quotes every stat as a string ("1.18", "72%"), so the segment
//! keeps string fields; the engine normalizer owns parsing and validation.

use serde::{Deserialize, Serialize};

/// Top-level envelope for `/stats`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsResponse {
    pub data: StatsData,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsData {
    #[serde(default)]
    pub segments: Vec<StatsSegment>,
}

/// One player row as returned by vlrggapi. Everything is optional; the
/// normalizer decides which absences are fatal for a player.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatsSegment {
    #[serde(default)]
    pub player: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
    #[serde(default)]
    pub agents: Option<AgentsField>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub average_combat_score: Option<String>,
    #[serde(default)]
    pub kill_deaths: Option<String>,
    #[serde(rename = "kill_assists_survived_traded", default)]
    pub kast: Option<String>,
    #[serde(default)]
    pub average_damage_per_round: Option<String>,
    #[serde(default)]
    pub kills_per_round: Option<String>,
    #[serde(default)]
    pub assists_per_round: Option<String>,
    #[serde(default)]
    pub first_kills_per_round: Option<String>,
    #[serde(default)]
    pub first_deaths_per_round: Option<String>,
    #[serde(default)]
    pub headshot_percentage: Option<String>,
    #[serde(default)]
    pub clutch_success_percentage: Option<String>,
    #[serde(default)]
    pub rounds_played: Option<String>,
}

/// The API has shipped agents both as a comma/slash separated string and
/// as a list; accept either.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AgentsField {
    Csv(String),
    List(Vec<String>),
}

impl AgentsField {
    /// Agent names, trimmed and lowercased.
    pub fn names(&self) -> Vec<String> {
        match self {
            AgentsField::Csv(s) => s
                .split([',', '/'])
                .map(|p| p.trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
            AgentsField::List(v) => v
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}
