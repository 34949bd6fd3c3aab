//! The pick engine: projection-and-edge-scoring pipeline.
//!
//! Raw stat segments flow through five pure stages, leaf-first:
//! normalize into [`types::PlayerStat`], project a per-map expectation,
//! synthesize a half-step line, score the normalized edge between the
//! two, and map that edge to a verdict. [`build_picks`] runs the whole
//! batch and hands back a deterministically ranked [`types::PickBatch`].
//!
//! Every stage is synchronous computation over in-memory values; the
//! engine performs no I/O and holds no state between runs.

pub mod config;
pub mod edge;
pub mod line;
pub mod normalize;
pub mod projection;
pub mod rank;
pub mod recommend;
pub mod types;

pub use config::PickConfig;
pub use types::{PickBatch, PlayerStat, SkippedPlayer};

use crate::vlr::types::StatsSegment;
use crate::Result;
use types::{Pick, StatKind};

/// Run the full pipeline over a fetched batch of raw segments.
///
/// Players that fail normalization are collected into the batch's
/// `skipped` list instead of aborting the run; each surviving player
/// produces one pick per stat market. Line and edge invariant violations
/// are programming errors, not bad input, and propagate to the caller.
///
/// The line is anchored on the player's baseline per-map rate (the
/// market-style number a book would quote from), while the projection
/// layers rating and KAST adjustments on top; the distance between the
/// two is what the edge measures.
pub fn build_picks(
    segments: &[StatsSegment],
    pool_limit: Option<usize>,
    cfg: &PickConfig,
) -> Result<PickBatch> {
    let (players, skipped) = normalize::normalize_batch(segments, pool_limit, cfg);

    let mut picks = Vec::with_capacity(players.len() * StatKind::ALL.len());
    for player in &players {
        for stat in StatKind::ALL {
            let projection = projection::project(stat, player, cfg);
            let line = line::synthesize_line(player.per_map(stat))?;
            let edge = edge::score_edge(&projection, &line, cfg)?;
            let assessment = recommend::assess(&edge, projection.variance_hint, cfg);
            let explanation = recommend::explain(player, &projection, &line, &edge, &assessment);

            picks.push(Pick {
                player_id: player.player_id.clone(),
                handle: player.handle.clone(),
                team: player.team.clone(),
                role: player.role,
                stat,
                projection: projection.value,
                line: line.value,
                edge_score: edge.edge_score,
                p_over: assessment.p_over,
                recommendation: assessment.recommendation,
                confidence: assessment.confidence,
                explanation,
            });
        }
    }

    Ok(PickBatch {
        picks: rank::rank_picks(picks),
        skipped,
        players_scored: players.len(),
    })
}
