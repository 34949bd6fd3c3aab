//! vlr.gg stats boundary: HTTP calls and response types.
//!
//! The pipeline core never sees raw JSON; rows cross into the engine as
//! [`types::StatsSegment`] values and are validated there.

pub mod http;
pub mod types;

pub use http::{fetch_stats, fetch_stats_from, VLR_BASE_URL};
