//! Shared helpers for command implementations.

use crate::cli::CommonFilters;
use crate::core::build_client;
use crate::engine::types::SkippedPlayer;
use crate::vlr::{self, types::StatsSegment};
use crate::Result;

/// Fetch raw stat segments for the common filter set.
///
/// `quiet` suppresses the progress line (JSON output must stay parseable).
pub async fn fetch_segments(filters: &CommonFilters, quiet: bool) -> Result<Vec<StatsSegment>> {
    let client = build_client()?;
    if !quiet {
        println!(
            "Fetching {} player stats (window: {})...",
            filters.region, filters.timespan
        );
    }
    vlr::fetch_stats(&client, filters.region, filters.timespan).await
}

/// Case-insensitive substring match on handle or team.
pub fn matches_search(handle: &str, team: &str, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    handle.to_lowercase().contains(&term) || team.to_lowercase().contains(&term)
}

/// List skipped players with their reasons.
pub fn print_skipped(skipped: &[SkippedPlayer]) {
    for s in skipped {
        println!("⚠ {}: {}", s.player_id, s.reason);
    }
}

/// Truncate a display field to a column width.
pub fn clip(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_search_is_case_insensitive() {
        assert!(matches_search("TenZ", "SEN", "tenz"));
        assert!(matches_search("TenZ", "SEN", "sen"));
        assert!(!matches_search("TenZ", "SEN", "aspas"));
    }

    #[test]
    fn test_empty_search_matches_everything() {
        assert!(matches_search("TenZ", "SEN", ""));
        assert!(matches_search("TenZ", "SEN", "   "));
    }

    #[test]
    fn test_clip_respects_char_boundaries() {
        assert_eq!(clip("TenZ", 16), "TenZ");
        assert_eq!(clip("a very long player handle", 10), "a very lon");
    }
}
