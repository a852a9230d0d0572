//! Integration tests for the sentimap-ui API endpoints
//!
//! Drives the real router with an in-memory database and stub scoring and
//! geolocation backends, covering:
//! - Registration and duplicate/empty username rejection
//! - Sentiment submission, persistence, and token checks
//! - History listing and owner-scoped deletion
//! - Map projection defaults
//! - Scorer failure surfacing as 500
//! - Health endpoint and embedded UI pages

use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot` method

use sentimap_common::db::init::init_memory_database;
use sentimap_ui::analysis::{ScoreBreakdown, ScorerError, SentimentAnalyzer, TextScorer};
use sentimap_ui::geo::{GeoError, GeoLocation, GeoLocator};
use sentimap_ui::{build_router, AppState};

/// Deterministic keyword-driven scorer
struct StubScorer;

impl TextScorer for StubScorer {
    fn score(&self, text: &str) -> Result<ScoreBreakdown, ScorerError> {
        let compound = if text.contains("love") {
            0.8
        } else if text.contains("hate") {
            -0.8
        } else {
            0.0
        };
        Ok(ScoreBreakdown {
            positive: if compound > 0.0 { 0.6 } else { 0.0 },
            negative: if compound < 0.0 { 0.6 } else { 0.0 },
            neutral: 0.4,
            compound,
        })
    }
}

/// Scorer that always fails (backend outage)
struct FailingScorer;

impl TextScorer for FailingScorer {
    fn score(&self, _text: &str) -> Result<ScoreBreakdown, ScorerError> {
        Err(ScorerError::Backend("lexicon offline".to_string()))
    }
}

/// Stub geolocator: loopback resolves to nothing, everything else to Berlin
struct StubGeoLocator;

#[async_trait::async_trait]
impl GeoLocator for StubGeoLocator {
    async fn locate(&self, ip: &str) -> Result<Option<GeoLocation>, GeoError> {
        if ip.starts_with("127.") {
            Ok(None)
        } else {
            Ok(Some(GeoLocation {
                latitude: 52.52,
                longitude: 13.405,
                city: Some("Berlin".to_string()),
                region: Some("Berlin".to_string()),
                country: Some("Germany".to_string()),
            }))
        }
    }
}

/// Test helper: app with the standard stub backends
async fn setup_app() -> axum::Router {
    setup_app_with_scorer(Box::new(StubScorer)).await
}

async fn setup_app_with_scorer(scorer: Box<dyn TextScorer>) -> axum::Router {
    let pool = init_memory_database().await.expect("in-memory database");
    let state = AppState::new(
        pool,
        Arc::new(SentimentAnalyzer::new(scorer)),
        Arc::new(StubGeoLocator),
    );
    build_router(state)
}

/// Test helper: JSON request with a synthetic client address
fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .extension(ConnectInfo(SocketAddr::from(([203, 0, 113, 9], 4000))))
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Test helper: bodyless request
fn bare_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .extension(ConnectInfo(SocketAddr::from(([203, 0, 113, 9], 4000))))
        .body(Body::empty())
        .unwrap()
}

/// Test helper: extract JSON body from response
async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("should read body");
    serde_json::from_slice(&bytes).expect("should parse JSON")
}

/// Test helper: register a user, return their session token
async fn register(app: &axum::Router, username: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/register",
            json!({ "username": username }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    body["session_token"].as_str().unwrap().to_string()
}

// =============================================================================
// Health and UI pages
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app().await;

    let response = app.oneshot(bare_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["module"], "sentimap-ui");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_ui_pages_are_served() {
    let app = setup_app().await;

    for uri in ["/", "/register", "/sentiment", "/history", "/map", "/about"] {
        let response = app.clone().oneshot(bare_request("GET", uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "page {}", uri);
    }

    let js = app
        .oneshot(bare_request("GET", "/static/app.js"))
        .await
        .unwrap();
    assert_eq!(js.status(), StatusCode::OK);
    assert_eq!(
        js.headers().get("content-type").unwrap(),
        "application/javascript"
    );
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_creates_session_token() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/register",
            json!({ "username": "alice" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["username"], "alice");
    assert!(!body["session_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_rejects_duplicate_username() {
    let app = setup_app().await;
    register(&app, "alice").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/register",
            json!({ "username": "alice" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("already taken"));
}

#[tokio::test]
async fn test_register_rejects_blank_username() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/register",
            json!({ "username": "   " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Sentiment submission
// =============================================================================

#[tokio::test]
async fn test_sentiment_requires_valid_token() {
    let app = setup_app().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/sentiment",
            json!({ "token": "bogus", "text": "I love this" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sentiment_rejects_empty_text() {
    let app = setup_app().await;
    let token = register(&app, "alice").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/sentiment",
            json!({ "token": token, "text": "  " }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_sentiment_analyzes_and_persists() {
    let app = setup_app().await;
    let token = register(&app, "alice").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/sentiment",
            json!({ "token": token, "text": "I love this!!!" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["sentiment"], "Very Positive");
    assert_eq!(body["score"], 0.8);
    assert_eq!(body["confidence"], 0.8);
    assert_eq!(body["text"], "I love this!!!");
    assert_eq!(body["cleaned_text"], "I love this!!");
    assert_eq!(body["details"]["compound"], 0.8);
    assert!(body["id"].as_i64().is_some());

    // Persisted and visible in history
    let response = app
        .oneshot(bare_request(
            "GET",
            &format!("/api/history?token={}", token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let history = extract_json(response.into_body()).await;
    let queries = history["queries"].as_array().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0]["text"], "I love this!!!");
    assert_eq!(queries[0]["sentiment"], "Very Positive");
}

#[tokio::test]
async fn test_scorer_failure_returns_500() {
    let app = setup_app_with_scorer(Box::new(FailingScorer)).await;
    let token = register(&app, "alice").await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/api/sentiment",
            json!({ "token": token, "text": "anything" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = extract_json(response.into_body()).await;
    assert!(body["error"].as_str().unwrap().contains("lexicon offline"));
}

// =============================================================================
// History and deletion
// =============================================================================

#[tokio::test]
async fn test_history_requires_token() {
    let app = setup_app().await;

    let missing = app
        .clone()
        .oneshot(bare_request("GET", "/api/history"))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let unknown = app
        .oneshot(bare_request("GET", "/api/history?token=bogus"))
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_history_lists_queries_newest_first() {
    let app = setup_app().await;
    let token = register(&app, "alice").await;

    for text in ["I hate waiting", "I love this"] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/sentiment",
                json!({ "token": token, "text": text }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .oneshot(bare_request(
            "GET",
            &format!("/api/history?token={}", token),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["username"], "alice");
    let queries = body["queries"].as_array().unwrap();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0]["sentiment"], "Very Positive");
    assert_eq!(queries[1]["sentiment"], "Very Negative");
    // Location enrichment from the stub geolocator
    assert_eq!(queries[0]["city"], "Berlin");
    assert_eq!(queries[0]["country"], "Germany");
}

#[tokio::test]
async fn test_delete_query_is_owner_scoped() {
    let app = setup_app().await;
    let alice = register(&app, "alice").await;
    let bob = register(&app, "bob").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/sentiment",
            json!({ "token": alice, "text": "I love this" }),
        ))
        .await
        .unwrap();
    let body = extract_json(response.into_body()).await;
    let query_id = body["id"].as_i64().unwrap();

    // Bob cannot delete Alice's query
    let forbidden = app
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/query/{}?token={}", query_id, bob),
        ))
        .await
        .unwrap();
    assert_eq!(forbidden.status(), StatusCode::NOT_FOUND);

    // Alice can
    let deleted = app
        .clone()
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/query/{}?token={}", query_id, alice),
        ))
        .await
        .unwrap();
    assert_eq!(deleted.status(), StatusCode::OK);
    let body = extract_json(deleted.into_body()).await;
    assert_eq!(body["success"], true);

    // Gone now
    let again = app
        .oneshot(bare_request(
            "DELETE",
            &format!("/api/query/{}?token={}", query_id, alice),
        ))
        .await
        .unwrap();
    assert_eq!(again.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// Map projection
// =============================================================================

#[tokio::test]
async fn test_map_points_include_location_and_defaults() {
    let app = setup_app().await;
    let token = register(&app, "alice").await;

    // Located query (documentation address resolves via the stub)
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/sentiment",
            json!({ "token": token, "text": "I love this" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Unlocated query (loopback client address)
    let local = Request::builder()
        .method("POST")
        .uri("/api/sentiment")
        .header("content-type", "application/json")
        .extension(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 4000))))
        .body(Body::from(
            json!({ "token": token, "text": "I hate this" }).to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(local).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(bare_request("GET", "/api/sentiment-map"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let points = extract_json(response.into_body()).await;
    let points = points.as_array().unwrap();
    assert_eq!(points.len(), 2);

    let located = points.iter().find(|p| p["lat"] != Value::Null).unwrap();
    assert_eq!(located["city"], "Berlin");
    assert_eq!(located["sentiment"], "Very Positive");

    let unlocated = points.iter().find(|p| p["lat"] == Value::Null).unwrap();
    assert_eq!(unlocated["city"], "Unknown City");
    assert_eq!(unlocated["country"], "Unknown Country");
    assert_eq!(unlocated["sentiment"], "Very Negative");
}
