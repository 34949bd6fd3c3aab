//! vlrggapi endpoint calls.

use reqwest::Client;

use crate::cli::types::{Region, Timespan};
use crate::error::PickError;
use crate::vlr::types::{StatsResponse, StatsSegment};
use crate::Result;

/// Base URL for the public vlrggapi deployment.
pub const VLR_BASE_URL: &str = "https://vlrggapi.vercel.app";

/// Fetch player stat segments for a region and time window.
pub async fn fetch_stats(
    client: &Client,
    region: Region,
    timespan: Timespan,
) -> Result<Vec<StatsSegment>> {
    fetch_stats_from(VLR_BASE_URL, client, region, timespan).await
}

/// Same as [`fetch_stats`] but against an explicit base URL, so tests can
/// point the call at a mock server.
pub async fn fetch_stats_from(
    base_url: &str,
    client: &Client,
    region: Region,
    timespan: Timespan,
) -> Result<Vec<StatsSegment>> {
    let url = format!("{}/stats", base_url);
    let params = [
        ("region", region.as_query()),
        ("timespan", timespan.as_query()),
    ];

    let res = client
        .get(&url)
        .query(&params)
        .send()
        .await?
        .error_for_status()?
        .json::<StatsResponse>()
        .await?;

    if res.data.segments.is_empty() {
        return Err(PickError::NoData);
    }
    Ok(res.data.segments)
}
