// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Stats, calendar and day-detail endpoints over a seeded log.

use axum::{body::Body, http::Request};
use fitpulse::db::MemoryStore;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

fn seeded_store(entries: serde_json::Value) -> Arc<MemoryStore> {
    Arc::new(MemoryStore::with_blob(entries.to_string()))
}

fn entry(id: &str, date: &str, ts: i64, kind: &str, minutes: u32) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "date": date,
        "timestamp": ts,
        "type": kind,
        "durationMinutes": minutes
    })
}

async fn get_json(app: axum::Router, uri: &str) -> serde_json::Value {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.status().is_success(), "GET {} failed", uri);
    common::body_json(response).await
}

#[tokio::test]
async fn test_streak_today_and_yesterday() {
    let store = seeded_store(serde_json::json!([
        entry("b", "2024-06-15", 2, "Running", 30),
        entry("a", "2024-06-14", 1, "Running", 20),
    ]));
    let (app, _state) = common::create_test_app_with_store(store);

    let stats = get_json(app, "/api/stats").await;
    assert_eq!(stats["totalWorkouts"], 2);
    assert_eq!(stats["currentStreak"], 2);
    assert_eq!(stats["totalMinutes"], 50);
}

#[tokio::test]
async fn test_stale_log_keeps_totals_but_no_streak() {
    let store = seeded_store(serde_json::json!([
        entry("b", "2024-06-13", 2, "Yoga", 30),
        entry("a", "2024-06-12", 1, "Yoga", 30),
    ]));
    let (app, _state) = common::create_test_app_with_store(store);

    let stats = get_json(app, "/api/stats").await;
    assert_eq!(stats["totalWorkouts"], 2);
    assert_eq!(stats["currentStreak"], 0);
}

#[tokio::test]
async fn test_corrupt_store_reads_as_empty() {
    let store = Arc::new(MemoryStore::with_blob("[{\"id\": oops"));
    let (app, _state) = common::create_test_app_with_store(store);

    let stats = get_json(app.clone(), "/api/stats").await;
    assert_eq!(stats["totalWorkouts"], 0);

    let logs = get_json(app, "/api/logs").await;
    assert_eq!(logs.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_weekly_minutes() {
    let store = seeded_store(serde_json::json!([
        entry("c", "2024-06-15", 3, "Running", 30),
        entry("b", "2024-06-15", 2, "Yoga", 15),
        entry("a", "2024-06-10", 1, "HIIT", 25),
    ]));
    let (app, _state) = common::create_test_app_with_store(store);

    let week = get_json(app, "/api/stats/weekly").await;
    let days = week.as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["date"], "2024-06-09");
    assert_eq!(days[1]["minutes"], 25);
    assert_eq!(days[6]["date"], "2024-06-15");
    assert_eq!(days[6]["minutes"], 45);
}

#[tokio::test]
async fn test_type_distribution() {
    let store = seeded_store(serde_json::json!([
        entry("d", "2024-06-15", 4, "Yoga", 10),
        entry("c", "2024-06-14", 3, "Running", 10),
        entry("b", "2024-06-13", 2, "Running", 10),
        entry("a", "2024-06-12", 1, "Running", 10),
    ]));
    let (app, _state) = common::create_test_app_with_store(store);

    let dist = get_json(app, "/api/stats/types").await;
    let shares = dist.as_array().unwrap();
    assert_eq!(shares.len(), 2);
    assert_eq!(shares[0]["type"], "Yoga");
    assert_eq!(shares[0]["percent"], 25);
    assert_eq!(shares[1]["type"], "Running");
    assert_eq!(shares[1]["count"], 3);
    assert_eq!(shares[1]["percent"], 75);
}

#[tokio::test]
async fn test_calendar_defaults_to_current_month() {
    let store = seeded_store(serde_json::json!([
        entry("b", "2024-06-15", 2, "Yoga", 10),
        entry("a", "2024-06-03", 1, "Yoga", 10),
        entry("z", "2024-05-31", 0, "Yoga", 10),
    ]));
    let (app, _state) = common::create_test_app_with_store(store);

    let cal = get_json(app.clone(), "/api/calendar").await;
    assert_eq!(cal["year"], 2024);
    assert_eq!(cal["month"], 6);
    assert_eq!(cal["daysInMonth"], 30);
    // 2024-06-01 was a Saturday
    assert_eq!(cal["firstWeekday"], 6);
    assert_eq!(cal["activeDays"], serde_json::json!([3, 15]));
    assert_eq!(cal["today"], 15);

    let may = get_json(app, "/api/calendar?month=2024-05").await;
    assert_eq!(may["activeDays"], serde_json::json!([31]));
    assert!(may["today"].is_null());
}

#[tokio::test]
async fn test_day_detail_sorted_by_time() {
    let store = seeded_store(serde_json::json!([
        entry("late", "2024-06-15", 300, "Yoga", 10),
        entry("other", "2024-06-14", 900, "Yoga", 10),
        entry("early", "2024-06-15", 100, "Yoga", 10),
    ]));
    let (app, _state) = common::create_test_app_with_store(store);

    let day = get_json(app, "/api/logs?date=2024-06-15").await;
    let ids: Vec<&str> = day
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["late", "early"]);
}

#[tokio::test]
async fn test_client_offset_moves_today() {
    // Test clock is 04:00 UTC on Jun 15, i.e. 23:00 on Jun 14 at UTC-5.
    let store = seeded_store(serde_json::json!([
        entry("b", "2024-06-14", 2, "Running", 30),
        entry("a", "2024-06-13", 1, "Running", 20),
    ]));
    let (app, _state) = common::create_test_app_with_store(store);

    let stats = get_json(app.clone(), "/api/stats").await;
    assert_eq!(stats["currentStreak"], 2);

    let stats = get_json(app.clone(), "/api/stats?utcOffsetMinutes=-300").await;
    assert_eq!(stats["currentStreak"], 2);
    assert_eq!(stats["totalMinutes"], 50);

    let week = get_json(app.clone(), "/api/stats/weekly?utcOffsetMinutes=-300").await;
    assert_eq!(week[6]["date"], "2024-06-14");
    assert_eq!(week[6]["minutes"], 30);

    let cal = get_json(app, "/api/calendar?utcOffsetMinutes=-300").await;
    assert_eq!(cal["today"], 14);
}

#[tokio::test]
async fn test_client_offset_stale_streak() {
    // Same instant is 06:00 on Jun 15 at UTC+2, so Jun 13 is too old.
    let store = seeded_store(serde_json::json!([entry(
        "a",
        "2024-06-13",
        1,
        "Running",
        20
    )]));
    let (app, _state) = common::create_test_app_with_store(store);

    let stats = get_json(app.clone(), "/api/stats?utcOffsetMinutes=120").await;
    assert_eq!(stats["currentStreak"], 0);

    let stats = get_json(app, "/api/stats?utcOffsetMinutes=-300").await;
    assert_eq!(stats["currentStreak"], 1);
}
