// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in flow through the HTTP API.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use fitpulse::services::motivation::FALLBACK_NO_KEY;
use tower::ServiceExt;

mod common;

fn post_log(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/logs")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_check_in_returns_entry_and_stats() {
    let (app, _state) = common::create_test_app();

    let response = app
        .oneshot(post_log(serde_json::json!({
            "type": "Running",
            "durationMinutes": 30,
            "notes": "easy pace"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = common::body_json(response).await;

    assert_eq!(body["entry"]["type"], "Running");
    assert_eq!(body["entry"]["durationMinutes"], 30);
    assert_eq!(body["entry"]["date"], "2024-06-15");
    assert_eq!(body["entry"]["notes"], "easy pace");
    assert_eq!(body["entry"]["aiMotivation"], FALLBACK_NO_KEY);
    assert_eq!(
        body["entry"]["timestamp"],
        common::test_now().timestamp_millis()
    );
    assert_eq!(body["stats"]["totalWorkouts"], 1);
    assert_eq!(body["stats"]["currentStreak"], 1);
    assert_eq!(body["stats"]["totalMinutes"], 30);
}

#[tokio::test]
async fn test_entries_listed_most_recent_first() {
    let (app, _state) = common::create_test_app();

    for kind in ["Yoga", "Cycling", "HIIT"] {
        let response = app
            .clone()
            .oneshot(post_log(serde_json::json!({
                "type": kind,
                "durationMinutes": 10
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(get("/api/logs")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await;
    let types: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, vec!["HIIT", "Cycling", "Yoga"]);
}

#[tokio::test]
async fn test_reset_clears_everything() {
    let (app, _state) = common::create_test_app();

    app.clone()
        .oneshot(post_log(serde_json::json!({
            "type": "Swimming",
            "durationMinutes": 45
        })))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/logs")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["success"], true);

    let response = app.oneshot(get("/api/stats")).await.unwrap();
    let body = common::body_json(response).await;
    assert_eq!(body["totalWorkouts"], 0);
    assert_eq!(body["currentStreak"], 0);
    assert_eq!(body["totalMinutes"], 0);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(common::body_json(response).await["status"], "ok");
}

#[tokio::test]
async fn test_exercise_types_listed() {
    let (app, _state) = common::create_test_app();

    let response = app.oneshot(get("/api/exercise-types")).await.unwrap();
    let body = common::body_json(response).await;
    let types = body.as_array().unwrap();
    assert_eq!(types.len(), 9);
    assert_eq!(types[0], "Running");
}
