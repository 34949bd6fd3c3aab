//! Core data model for the pick engine.
//!
//! Raw vlr.gg rows are validated into [`PlayerStat`] at the normalizer
//! boundary; everything downstream works with these strongly-typed values.

use serde::Serialize;
use std::fmt;

/// Stable, machine-friendly player identifier.
///
/// Built from the org tag + handle, lowercased with non-alphanumerics
/// stripped, so the same player maps to the same id across runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Slug an org tag and handle into an id. Falls back to the handle
    /// alone when the combined slug comes out empty.
    pub fn from_org_handle(org: &str, handle: &str) -> Self {
        let slug: String = format!("{}_{}", org, handle)
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        if slug.is_empty() {
            Self(handle.to_lowercase())
        } else {
            Self(slug)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stat market a pick is quoted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Kills,
    Assists,
}

impl StatKind {
    /// All markets the engine quotes, in pipeline order.
    pub const ALL: [StatKind; 2] = [StatKind::Kills, StatKind::Assists];

    pub fn as_str(&self) -> &'static str {
        match self {
            StatKind::Kills => "kills",
            StatKind::Assists => "assists",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tactical role inferred from the agents a player has been on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Duelist,
    Controller,
    Initiator,
    Sentinel,
    /// Plays agents across more than one role.
    Flex,
    Unknown,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Duelist => "duelist",
            Role::Controller => "controller",
            Role::Initiator => "initiator",
            Role::Sentinel => "sentinel",
            Role::Flex => "flex",
            Role::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-map snapshot for one player, derived from per-round rates.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerStat {
    pub player_id: PlayerId,
    pub handle: String,
    pub team: String,
    pub role: Role,
    /// Expected kills in a typical map; always >= 0.
    pub kills_per_map: f64,
    /// Expected assists in a typical map; always >= 0.
    pub assists_per_map: f64,
    /// Overall rating, centered near 1.0.
    pub rating: f64,
    /// KAST percentage in [0, 100].
    pub kast: f64,
    /// Approximate maps in this window; `None` when the source omitted
    /// rounds played (unknown, deliberately not zero).
    pub maps_played: Option<u32>,
    /// Blended rating/KAST score, clamped to [0, 1].
    pub consistency: f64,
}

impl PlayerStat {
    /// Baseline per-map rate for a stat market.
    pub fn per_map(&self, stat: StatKind) -> f64 {
        match stat {
            StatKind::Kills => self.kills_per_map,
            StatKind::Assists => self.assists_per_map,
        }
    }
}

/// Expected per-map count for one `(player, stat)` pair.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Projection {
    pub stat: StatKind,
    /// Expected per-map count; always >= 0.
    pub value: f64,
    /// Uncertainty in stat units; lower consistency widens it.
    pub variance_hint: f64,
}

/// Synthesized prop-style reference line. Always a half-step, never an
/// integer, never negative.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Line {
    pub value: f64,
}

/// Which side of the line a projection falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Over,
    Under,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Over => write!(f, "over"),
            Direction::Under => write!(f, "under"),
        }
    }
}

/// Normalized, signed edge between projection and line.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EdgeResult {
    /// Rough z-score: `(projection - line) / scale`.
    pub edge_score: f64,
    pub direction: Direction,
}

/// Actionable side of a pick, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    LeanOver,
    LeanUnder,
    StayAway,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::LeanOver => "Lean Over",
            Recommendation::LeanUnder => "Lean Under",
            Recommendation::StayAway => "Stay Away",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Qualitative confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    /// Numeric tier rank used for ordering (High > Medium > Low).
    pub fn rank(&self) -> u8 {
        match self {
            Confidence::Low => 0,
            Confidence::Medium => 1,
            Confidence::High => 2,
        }
    }

    /// Drop one tier; Low stays Low.
    pub fn downgrade(&self) -> Self {
        match self {
            Confidence::High => Confidence::Medium,
            Confidence::Medium | Confidence::Low => Confidence::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ranked pick for a single player/stat combination.
#[derive(Debug, Clone, Serialize)]
pub struct Pick {
    pub player_id: PlayerId,
    pub handle: String,
    pub team: String,
    pub role: Role,
    pub stat: StatKind,
    pub projection: f64,
    pub line: f64,
    pub edge_score: f64,
    /// Approximate probability the player clears the line; strictly in (0, 1).
    pub p_over: f64,
    pub recommendation: Recommendation,
    pub confidence: Confidence,
    pub explanation: String,
}

/// A player dropped from the batch, with the reason.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedPlayer {
    pub player_id: PlayerId,
    pub reason: String,
}

/// Output of one pipeline run: ranked picks plus the players that could
/// not be scored. One bad record never aborts the batch.
#[derive(Debug, Clone, Serialize)]
pub struct PickBatch {
    pub picks: Vec<Pick>,
    pub skipped: Vec<SkippedPlayer>,
    /// Number of players that produced picks.
    pub players_scored: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_slug_strips_non_alphanumerics() {
        let id = PlayerId::from_org_handle("100T", "Asuna ");
        assert_eq!(id.as_str(), "100tasuna");
    }

    #[test]
    fn test_player_id_falls_back_to_handle() {
        let id = PlayerId::from_org_handle("???", "тенз");
        assert_eq!(id.as_str(), "тенз");
    }

    #[test]
    fn test_confidence_rank_ordering() {
        assert!(Confidence::High.rank() > Confidence::Medium.rank());
        assert!(Confidence::Medium.rank() > Confidence::Low.rank());
    }

    #[test]
    fn test_confidence_downgrade_saturates_at_low() {
        assert_eq!(Confidence::High.downgrade(), Confidence::Medium);
        assert_eq!(Confidence::Medium.downgrade(), Confidence::Low);
        assert_eq!(Confidence::Low.downgrade(), Confidence::Low);
    }

    #[test]
    fn test_recommendation_display_strings() {
        assert_eq!(Recommendation::LeanOver.to_string(), "Lean Over");
        assert_eq!(Recommendation::LeanUnder.to_string(), "Lean Under");
        assert_eq!(Recommendation::StayAway.to_string(), "Stay Away");
    }
}
