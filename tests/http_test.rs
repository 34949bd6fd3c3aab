//! Integration tests for the vlrggapi fetch boundary, against a mock
//! server so no network is touched.

use vlr_picks::{core::build_client, vlr::fetch_stats_from, PickError, Region, Timespan};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn stats_body() -> serde_json::Value {
    serde_json::json!({
        "data": {
            "segments": [{
                "player": "TenZ",
                "org": "SEN",
                "rating": "1.18",
                "kills_per_round": "0.86",
                "assists_per_round": "0.24",
                "kill_assists_survived_traded": "74%",
                "rounds_played": "264"
            }]
        }
    })
}

#[tokio::test]
async fn test_fetch_stats_sends_region_and_timespan() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .and(query_param("region", "eu"))
        .and(query_param("timespan", "90"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .mount(&server)
        .await;

    let client = build_client().unwrap();
    let segments = fetch_stats_from(&server.uri(), &client, Region::Eu, Timespan::Days90)
        .await
        .unwrap();

    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].player.as_deref(), Some("TenZ"));
    assert_eq!(segments[0].kast.as_deref(), Some("74%"));
}

#[tokio::test]
async fn test_empty_segments_is_no_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"data": {"segments": []}})),
        )
        .mount(&server)
        .await;

    let client = build_client().unwrap();
    let err = fetch_stats_from(&server.uri(), &client, Region::Na, Timespan::Days30)
        .await
        .unwrap_err();

    assert!(matches!(err, PickError::NoData));
}

#[tokio::test]
async fn test_server_error_surfaces_as_http_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stats"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = build_client().unwrap();
    let err = fetch_stats_from(&server.uri(), &client, Region::Na, Timespan::Days30)
        .await
        .unwrap_err();

    assert!(matches!(err, PickError::Http(_)));
}
