// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived statistics over the workout log.
//!
//! Nothing here is stored. Every value is recomputed from the full entry list
//! whenever it is read.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Summary statistics for the home screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Number of entries
    pub total_workouts: u32,
    /// Consecutive active days ending today or yesterday
    pub current_streak: u32,
    /// Sum of all durations
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub total_minutes: u64,
}

/// Minutes trained on one day (weekly bar chart).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct DailyMinutes {
    /// Date key (`YYYY-MM-DD`)
    pub date: String,
    /// Short weekday label ("Mon")
    pub weekday: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub minutes: u64,
}

/// Share of entries with a given workout type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TypeShare {
    #[serde(rename = "type")]
    pub workout_type: String,
    pub count: u32,
    /// Whole percent of all entries
    pub percent: u32,
}

/// One month of the calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    pub year: i32,
    pub month: u32,
    pub days_in_month: u32,
    /// Weekday of the 1st (0 = Sunday)
    pub first_weekday: u32,
    /// Days of the month with at least one entry, ascending
    pub active_days: Vec<u32>,
    /// Day of month for today, if today falls in this month
    pub today: Option<u32>,
}
