//! Error types for the vlr-picks CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PickError>;

#[derive(Error, Debug)]
pub enum PickError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("player {player}: required stat `{field}` missing or non-numeric")]
    MissingStat { player: String, field: &'static str },

    #[error("synthesized line {value} violates the half-step invariant")]
    InvalidLine { value: f64 },

    #[error("degenerate projection value {value} reached the edge scorer")]
    DegenerateInput { value: f64 },

    #[error("vlr.gg API returned no player segments")]
    NoData,

    #[error("invalid timespan `{0}` (expected 30, 60, 90, or all)")]
    InvalidTimespan(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_stat_message_names_player_and_field() {
        let err = PickError::MissingStat {
            player: "sen_tenz".to_string(),
            field: "kast",
        };
        let msg = err.to_string();
        assert!(msg.contains("sen_tenz"));
        assert!(msg.contains("kast"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = PickError::from(json_error);
        match err {
            PickError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_invalid_line_is_reported_with_value() {
        let err = PickError::InvalidLine { value: -0.5 };
        assert!(err.to_string().contains("-0.5"));
    }
}
