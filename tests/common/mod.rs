// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::Response;
use chrono::{DateTime, FixedOffset, TimeZone};
use fitpulse::config::Config;
use fitpulse::db::MemoryStore;
use fitpulse::routes::create_router;
use fitpulse::services::{CheckInService, StaticMotivation};
use fitpulse::time_utils::FixedClock;
use fitpulse::AppState;
use std::sync::Arc;

/// Fixed "now" used by test apps: 2024-06-15 12:00 at UTC+8.
#[allow(dead_code)]
pub fn test_now() -> DateTime<FixedOffset> {
    FixedOffset::east_opt(8 * 3600)
        .unwrap()
        .with_ymd_and_hms(2024, 6, 15, 12, 0, 0)
        .unwrap()
}

/// Create a test app backed by the given store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app_with_store(store: Arc<MemoryStore>) -> (axum::Router, Arc<AppState>) {
    let config = Config::default();

    let check_in = CheckInService::new(
        store,
        Arc::new(StaticMotivation),
        Arc::new(FixedClock(test_now())),
        config.motivation_timeout,
    );

    let state = Arc::new(AppState { config, check_in });

    (create_router(state.clone()), state)
}

/// Create a test app with an empty in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_test_app_with_store(Arc::new(MemoryStore::new()))
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}
