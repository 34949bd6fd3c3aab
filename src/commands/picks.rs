//! Picks command implementation: the full fetch → score → rank flow.

use crate::{
    cli::{
        types::{ConfidenceFilter, RiskMode, StatKindFilter},
        CommonFilters,
    },
    engine::{
        self,
        rank::top_n,
        types::{Pick, PickBatch, StatKind},
        PickConfig,
    },
    Result,
};

use super::common::{clip, fetch_segments, matches_search, print_skipped};

/// Parameters for the picks command.
pub struct PicksParams {
    pub filters: CommonFilters,
    pub risk: RiskMode,
    pub stats: Option<Vec<StatKindFilter>>,
    pub search: Option<String>,
    pub min_confidence: Option<ConfidenceFilter>,
    pub top: Option<usize>,
    pub as_json: bool,
    pub verbose: bool,
}

/// Handle the picks command.
pub async fn handle_picks(params: PicksParams) -> Result<()> {
    let cfg = PickConfig::for_risk(params.risk);

    let segments = fetch_segments(&params.filters, params.as_json).await?;
    let fetched = segments.len();

    let batch = engine::build_picks(&segments, Some(params.filters.pool), &cfg)?;

    let stat_filter: Option<Vec<StatKind>> = params
        .stats
        .as_ref()
        .map(|v| v.iter().map(|s| s.to_stat()).collect());
    let min_rank = params.min_confidence.map(|c| c.to_confidence().rank());
    let search = params.search.as_deref();

    let filtered: Vec<Pick> = batch
        .picks
        .iter()
        .filter(|p| {
            stat_filter
                .as_ref()
                .map_or(true, |kinds| kinds.contains(&p.stat))
                && min_rank.map_or(true, |r| p.confidence.rank() >= r)
                && search.map_or(true, |t| matches_search(&p.handle, &p.team, t))
        })
        .cloned()
        .collect();

    let shown = match params.top {
        Some(n) => top_n(&filtered, n),
        None => &filtered[..],
    };

    if params.as_json {
        let out = PickBatch {
            picks: shown.to_vec(),
            skipped: batch.skipped.clone(),
            players_scored: batch.players_scored,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!(
        "✓ Scored {} of {} players ({} skipped due to incomplete data)",
        batch.players_scored,
        fetched,
        batch.skipped.len()
    );

    if shown.is_empty() {
        println!("No picks match the current filters. Try a lower --min-confidence or another --risk.");
    } else {
        println!();
        println!(
            "{:<16} {:<6} {:<8} {:>6} {:>6} {:>7} {:>7}  {:<10} {:<6}",
            "Player", "Team", "Stat", "Line", "Proj", "Edge", "P(Over)", "Pick", "Conf"
        );
        println!(
            "{:<16} {:<6} {:<8} {:>6} {:>6} {:>7} {:>7}  {:<10} {:<6}",
            "------", "----", "----", "----", "----", "----", "-------", "----", "----"
        );

        for pick in shown {
            println!(
                "{:<16} {:<6} {:<8} {:>6.1} {:>6.1} {:>+7.2} {:>6.0}%  {:<10} {:<6}",
                clip(&pick.handle, 16),
                clip(&pick.team, 6),
                pick.stat,
                pick.line,
                pick.projection,
                pick.edge_score,
                pick.p_over * 100.0,
                pick.recommendation,
                pick.confidence
            );
            if params.verbose {
                println!("    {}", pick.explanation);
            }
        }
    }

    if params.verbose && !batch.skipped.is_empty() {
        println!();
        print_skipped(&batch.skipped);
    }

    Ok(())
}
