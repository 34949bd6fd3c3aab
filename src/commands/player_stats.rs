//! Player stats command implementation: normalized per-map table without
//! scoring picks.

use crate::{
    cli::CommonFilters,
    engine::{normalize::normalize_batch, PickConfig},
    Result,
};

use super::common::{clip, fetch_segments, print_skipped};

/// Parameters for the stats command.
pub struct StatsParams {
    pub filters: CommonFilters,
    pub as_json: bool,
    pub verbose: bool,
}

/// Handle the stats command.
pub async fn handle_player_stats(params: StatsParams) -> Result<()> {
    let cfg = PickConfig::default();

    let segments = fetch_segments(&params.filters, params.as_json).await?;
    let fetched = segments.len();

    let (players, skipped) = normalize_batch(&segments, Some(params.filters.pool), &cfg);

    if params.as_json {
        let out = serde_json::json!({
            "players": players,
            "skipped": skipped,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "✓ Normalized {} of {} players ({} skipped due to incomplete data)",
        players.len(),
        fetched,
        skipped.len()
    );
    println!();
    println!(
        "{:<16} {:<6} {:<11} {:>6} {:>6} {:>6} {:>6} {:>5} {:>7}",
        "Player", "Team", "Role", "Rating", "KAST", "K/Map", "A/Map", "Maps", "Consist"
    );
    println!(
        "{:<16} {:<6} {:<11} {:>6} {:>6} {:>6} {:>6} {:>5} {:>7}",
        "------", "----", "----", "------", "----", "-----", "-----", "----", "-------"
    );

    for p in &players {
        let maps = p
            .maps_played
            .map(|m| m.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{:<16} {:<6} {:<11} {:>6.2} {:>5.0}% {:>6.1} {:>6.1} {:>5} {:>7.2}",
            clip(&p.handle, 16),
            clip(&p.team, 6),
            p.role,
            p.rating,
            p.kast,
            p.kills_per_map,
            p.assists_per_map,
            maps,
            p.consistency
        );
    }

    if params.verbose && !skipped.is_empty() {
        println!();
        print_skipped(&skipped);
    }

    Ok(())
}
