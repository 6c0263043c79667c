//! Test utilities for integration tests
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use workcal::api::AppState;
use workcal::api::app;
use workcal::core::AppConfig;
use workcal::core::fixtures::load_events;

pub const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/events.json");

/// Creates a test application router seeded with the events in
/// `tests/data/events.json`.
///
/// Each call gets its own in-memory collection so mutations in one test
/// never leak into another.
pub fn test_app() -> Router {
    let events = load_events(FIXTURE_PATH).expect("Failed to load fixture events");
    let app_config = AppConfig {
        timezone: String::from("UTC"),
        events_path: Some(FIXTURE_PATH.to_string()),
    };
    let app_state = AppState::new(events, app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf8")
}

pub async fn body_to_json<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let body = body_to_string(body).await;
    serde_json::from_str(&body).expect("Body is not the expected json")
}
