// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! JSON API for the check-in app.

use crate::error::{AppError, Result};
use crate::models::{
    CalendarMonth, CheckInRequest, DailyMinutes, TypeShare, UserStats, WorkoutLogEntry,
    EXERCISE_TYPES,
};
use crate::services::insights::{self, DEFAULT_TYPE_LIMIT};
use crate::routes::extract::{ApiJson, ApiQuery};
use crate::services::CheckInOutcome;
use crate::time_utils::{client_offset, parse_date_key, parse_month_key};
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{Datelike, FixedOffset};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

const MAX_TYPE_LIMIT: usize = 20;

/// API routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/api/logs",
            get(get_logs).post(create_log).delete(reset_logs),
        )
        .route("/api/stats", get(get_stats))
        .route("/api/stats/weekly", get(get_weekly))
        .route("/api/stats/types", get(get_type_distribution))
        .route("/api/calendar", get(get_calendar))
        .route("/api/exercise-types", get(get_exercise_types))
}

// ─── Logs ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LogsQuery {
    /// Restrict to one day (`YYYY-MM-DD`)
    date: Option<String>,
}

/// List entries, most recent first, optionally for a single day.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<LogsQuery>,
) -> Result<Json<Vec<WorkoutLogEntry>>> {
    let entries = state.check_in.entries();

    let Some(raw) = params.date else {
        return Ok(Json(entries));
    };

    let date = parse_date_key(&raw).ok_or_else(|| {
        AppError::BadRequest("Invalid 'date' parameter: expected YYYY-MM-DD".to_string())
    })?;

    tracing::debug!(date = %raw, "Fetching entries for day");
    Ok(Json(insights::entries_on(&entries, date)))
}

/// Record a check-in.
async fn create_log(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CheckInRequest>,
) -> Result<(StatusCode, Json<CheckInOutcome>)> {
    let request = request.normalized();
    request.validate()?;

    let outcome = state.check_in.check_in(request).await?;
    Ok((StatusCode::CREATED, Json(outcome)))
}

/// Response for a log reset.
#[derive(Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// Delete all stored entries.
async fn reset_logs(State(state): State<Arc<AppState>>) -> Result<Json<ResetResponse>> {
    tracing::info!("User-initiated log reset");
    state.check_in.reset().await?;

    Ok(Json(ResetResponse {
        success: true,
        message: "All local workout data has been cleared.".to_string(),
    }))
}

// ─── Stats ───────────────────────────────────────────────────

/// Client timezone for endpoints that depend on "today".
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OffsetQuery {
    /// Minutes east of UTC; the server's timezone when absent
    utc_offset_minutes: Option<i32>,
}

fn resolve_offset(minutes: Option<i32>) -> Result<Option<FixedOffset>> {
    match minutes {
        None => Ok(None),
        Some(m) => client_offset(m).map(Some).ok_or_else(|| {
            AppError::BadRequest(
                "Invalid 'utcOffsetMinutes' parameter: expected -840 to 840".to_string(),
            )
        }),
    }
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<OffsetQuery>,
) -> Result<Json<UserStats>> {
    let offset = resolve_offset(params.utc_offset_minutes)?;
    Ok(Json(state.check_in.stats_at(offset)))
}

/// Minutes per day for the last 7 days.
async fn get_weekly(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<OffsetQuery>,
) -> Result<Json<Vec<DailyMinutes>>> {
    let today = state
        .check_in
        .today_at(resolve_offset(params.utc_offset_minutes)?);
    let entries = state.check_in.entries();
    Ok(Json(insights::weekly_minutes(&entries, today)))
}

#[derive(Deserialize)]
struct TypesQuery {
    #[serde(default = "default_type_limit")]
    limit: usize,
}

fn default_type_limit() -> usize {
    DEFAULT_TYPE_LIMIT
}

async fn get_type_distribution(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<TypesQuery>,
) -> Result<Json<Vec<TypeShare>>> {
    if params.limit == 0 {
        return Err(AppError::BadRequest(
            "'limit' must be greater than 0".to_string(),
        ));
    }
    let limit = params.limit.min(MAX_TYPE_LIMIT);

    let entries = state.check_in.entries();
    Ok(Json(insights::type_distribution(&entries, limit)))
}

// ─── Calendar ────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarQuery {
    /// Month to show (`YYYY-MM`); defaults to the current month
    month: Option<String>,
    utc_offset_minutes: Option<i32>,
}

async fn get_calendar(
    State(state): State<Arc<AppState>>,
    ApiQuery(params): ApiQuery<CalendarQuery>,
) -> Result<Json<CalendarMonth>> {
    let today = state
        .check_in
        .today_at(resolve_offset(params.utc_offset_minutes)?);
    let (year, month) = match params.month.as_deref() {
        Some(raw) => parse_month_key(raw).ok_or_else(|| {
            AppError::BadRequest("Invalid 'month' parameter: expected YYYY-MM".to_string())
        })?,
        None => (today.year(), today.month()),
    };

    let entries = state.check_in.entries();
    Ok(Json(insights::calendar_month(&entries, year, month, today)?))
}

async fn get_exercise_types() -> Json<Vec<&'static str>> {
    Json(EXERCISE_TYPES.to_vec())
}
