//! Projection builder: per-map expectation for one player/stat pair.

use crate::engine::config::PickConfig;
use crate::engine::types::{PlayerStat, Projection, StatKind};

/// Project a per-map count for one stat market.
///
/// Starts from the player's baseline per-map rate and adds linear
/// adjustments for how far their rating and KAST sit from an average
/// player. Kills react more strongly to both signals than assists.
/// The result is floored at zero.
pub fn project(stat: StatKind, player: &PlayerStat, cfg: &PickConfig) -> Projection {
    let base = player.per_map(stat);
    let dr = player.rating - cfg.baseline_rating;
    let dk = player.kast / 100.0 - cfg.baseline_kast;

    let (rating_weight, kast_weight, spread) = match stat {
        StatKind::Kills => (cfg.kill_rating_weight, cfg.kill_kast_weight, cfg.kill_spread),
        StatKind::Assists => (
            cfg.assist_rating_weight,
            cfg.assist_kast_weight,
            cfg.assist_spread,
        ),
    };

    let value = (base + rating_weight * dr + kast_weight * dk).max(0.0);

    // Consistent players get a tighter spread; we trust their mean more.
    let variance_hint = (spread * (1.0 - cfg.spread_shrink * player.consistency)).max(0.0);

    Projection {
        stat,
        value,
        variance_hint,
    }
}
