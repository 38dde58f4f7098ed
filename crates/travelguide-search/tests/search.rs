//! End-to-end search against a mocked Geoapify API.

use travelguide_core::SearchState;
use travelguide_geoapify::GeoapifyClient;
use travelguide_search::SearchWorkflow;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn workflow(server: &MockServer) -> SearchWorkflow<GeoapifyClient> {
    let client = GeoapifyClient::with_base_url("test-key", 30, &server.uri())
        .expect("client construction should not fail");
    SearchWorkflow::new(client)
}

async fn mount_geocode(server: &MockServer, city: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .and(query_param("text", city))
        .and(query_param("apiKey", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn paris_search_caps_results_at_twenty() {
    let server = MockServer::start().await;

    mount_geocode(
        &server,
        "Paris",
        serde_json::json!({ "results": [{ "place_id": "51xxx", "city": "Paris" }] }),
    )
    .await;

    let features: Vec<serde_json::Value> = (0..25)
        .map(|i| {
            serde_json::json!({
                "type": "Feature",
                "properties": { "name": format!("Sight {i}") },
                "geometry": { "type": "Point", "coordinates": [2.0 + f64::from(i) / 100.0, 48.85] }
            })
        })
        .collect();

    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .and(query_param("filter", "place:51xxx"))
        .and(query_param("categories", "tourism.attraction"))
        .and(query_param("limit", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "type": "FeatureCollection",
            "features": features
        })))
        .expect(1)
        .mount(&server)
        .await;

    let workflow = workflow(&server);
    let state = workflow.trigger(" Paris ").await.expect("trigger accepted");

    assert_eq!(state.pois().len(), 20);
    assert!(matches!(workflow.state(), SearchState::Loaded(_)));
}

#[tokio::test]
async fn unknown_city_fails_without_places_call() {
    let server = MockServer::start().await;

    mount_geocode(&server, "Nowhereville", serde_json::json!({ "results": [] })).await;

    Mock::given(method("GET"))
        .and(path("/v2/places"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let workflow = workflow(&server);
    let state = workflow.trigger("Nowhereville").await.unwrap();

    assert_eq!(state, SearchState::Failed("City not found".to_string()));
}

#[tokio::test]
async fn upstream_error_status_becomes_failed_state() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/geocode/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let workflow = workflow(&server);
    let state = workflow.trigger("Paris").await.unwrap();

    match state {
        SearchState::Failed(message) => {
            assert!(message.starts_with("HTTP error"), "got: {message}");
            assert!(!message.contains("test-key"), "key leaked: {message}");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}
