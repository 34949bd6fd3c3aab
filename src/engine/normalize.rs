//! StatRecord normalizer: raw vlr.gg segments into [`PlayerStat`] values.
//!
//! This is the only place raw, stringly-typed API data is touched. A
//! player missing any required stat fails here with a per-player error;
//! the batch entry point collects those instead of aborting the run.

use crate::engine::config::PickConfig;
use crate::engine::types::{PlayerId, PlayerStat, Role, SkippedPlayer};
use crate::error::PickError;
use crate::vlr::types::{AgentsField, StatsSegment};
use crate::Result;

/// Validate and convert one raw segment.
///
/// Fails with [`PickError::MissingStat`] when `kills_per_round`,
/// `assists_per_round`, `rating`, or `kast` is absent or non-numeric.
/// `rounds_played` is optional; without it `maps_played` stays unknown
/// rather than being reported as zero.
pub fn normalize_segment(seg: &StatsSegment, cfg: &PickConfig) -> Result<PlayerStat> {
    let handle = seg
        .player
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(PickError::MissingStat {
            player: "<unnamed>".to_string(),
            field: "player",
        })?
        .to_string();

    let team = seg
        .org
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Unknown")
        .to_string();

    let kills_per_round = required_f64(&seg.kills_per_round, &handle, "kills_per_round")?;
    let assists_per_round = required_f64(&seg.assists_per_round, &handle, "assists_per_round")?;
    let rating = required_f64(&seg.rating, &handle, "rating")?;
    let kast = required_kast(&seg.kast, &handle)?;

    let kills_per_map = (kills_per_round * cfg.rounds_per_map).max(0.0);
    let assists_per_map = (assists_per_round * cfg.rounds_per_map).max(0.0);

    let maps_played = seg
        .rounds_played
        .as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .map(|rounds| ((rounds / cfg.rounds_per_map).round() as u32).max(1));

    let consistency = consistency_score(rating, kast, cfg);

    Ok(PlayerStat {
        player_id: PlayerId::from_org_handle(&team, &handle),
        handle,
        team,
        role: infer_role(seg.agents.as_ref()),
        kills_per_map,
        assists_per_map,
        rating,
        kast,
        maps_played,
        consistency,
    })
}

/// Normalize a whole fetch, isolating per-player failures.
///
/// Players are ordered by descending rating (ties by id) and optionally
/// cut to the strongest `limit` to keep output manageable, matching how
/// the stats site itself presents leaderboards.
pub fn normalize_batch(
    segments: &[StatsSegment],
    limit: Option<usize>,
    cfg: &PickConfig,
) -> (Vec<PlayerStat>, Vec<SkippedPlayer>) {
    let mut players = Vec::new();
    let mut skipped = Vec::new();

    for seg in segments {
        match normalize_segment(seg, cfg) {
            Ok(p) => players.push(p),
            Err(e) => skipped.push(SkippedPlayer {
                player_id: skipped_id(seg),
                reason: e.to_string(),
            }),
        }
    }

    players.sort_by(|a, b| {
        b.rating
            .partial_cmp(&a.rating)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.player_id.as_str().cmp(b.player_id.as_str()))
    });
    if let Some(n) = limit {
        players.truncate(n);
    }

    (players, skipped)
}

/// Blend rating and KAST into a [0, 1] consistency score.
///
/// The rating half runs through a linear ramp (`rating_ramp_start` maps
/// to 0, start + span to 1) so extreme ratings cannot push the blend out
/// of range.
pub fn consistency_score(rating: f64, kast: f64, cfg: &PickConfig) -> f64 {
    let rating_part = ((rating - cfg.rating_ramp_start) / cfg.rating_ramp_span).clamp(0.0, 1.0);
    let kast_part = (kast / 100.0).clamp(0.0, 1.0);
    (cfg.w_rating * rating_part + cfg.w_kast * kast_part).clamp(0.0, 1.0)
}

/// Infer a tactical role from the agents a player has been on: a single
/// recognized role wins, several distinct roles read as Flex.
pub fn infer_role(agents: Option<&AgentsField>) -> Role {
    let Some(agents) = agents else {
        return Role::Unknown;
    };

    let mut seen: Vec<Role> = Vec::new();
    for name in agents.names() {
        if let Some(role) = agent_role(&name) {
            if !seen.contains(&role) {
                seen.push(role);
            }
        }
    }

    match seen.len() {
        0 => Role::Unknown,
        1 => seen[0],
        _ => Role::Flex,
    }
}

fn agent_role(agent: &str) -> Option<Role> {
    match agent {
        "jett" | "neon" | "raze" | "yoru" | "iso" | "reyna" | "waylay" | "phoenix" => {
            Some(Role::Duelist)
        }
        "omen" | "clove" | "viper" | "brimstone" | "harbor" | "astra" => Some(Role::Controller),
        "gekko" | "sova" | "fade" | "kayo" | "breach" | "skye" | "tejo" => Some(Role::Initiator),
        "cypher" | "killjoy" | "vyse" | "deadlock" | "sage" | "chamber" | "veto" => {
            Some(Role::Sentinel)
        }
        _ => None,
    }
}

fn required_f64(raw: &Option<String>, player: &str, field: &'static str) -> Result<f64> {
    raw.as_deref()
        .and_then(|s| s.trim().parse::<f64>().ok())
        .ok_or_else(|| PickError::MissingStat {
            player: player.to_string(),
            field,
        })
}

/// KAST arrives as "72%"; strip the suffix and keep the 0-100 scale.
fn required_kast(raw: &Option<String>, player: &str) -> Result<f64> {
    raw.as_deref()
        .and_then(|s| s.trim().trim_end_matches('%').trim().parse::<f64>().ok())
        .ok_or_else(|| PickError::MissingStat {
            player: player.to_string(),
            field: "kast",
        })
}

/// Best-effort id for a segment that failed normalization.
fn skipped_id(seg: &StatsSegment) -> PlayerId {
    let handle = seg.player.as_deref().map(str::trim).unwrap_or("<unnamed>");
    let team = seg.org.as_deref().map(str::trim).unwrap_or("Unknown");
    PlayerId::from_org_handle(team, handle)
}
