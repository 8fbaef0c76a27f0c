// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout log entry model for storage and API.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

/// Suggested workout labels offered by the check-in form.
///
/// The `type` field is free-form; these are only presets.
pub const EXERCISE_TYPES: [&str; 9] = [
    "Running", "Strength", "Yoga", "HIIT", "Cycling", "Swimming", "Pilates", "Hiking", "Other",
];

/// One recorded workout.
///
/// Entries are immutable once created. Field names match the JSON blob the
/// web client persists, so existing data loads unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLogEntry {
    /// Opaque unique identifier (UUID v4)
    pub id: String,
    /// Local calendar date (`YYYY-MM-DD`)
    pub date: String,
    /// Creation instant (epoch milliseconds)
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub timestamp: i64,
    /// Workout label (Running, Strength, ...)
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Minutes spent
    pub duration_minutes: u32,
    /// Optional free text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Encouragement attached at creation time
    #[serde(
        rename = "aiMotivation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub motivation_text: Option<String>,
}

/// Caller-supplied fields of a new check-in.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50, message = "type must be 1-50 characters"))]
    pub workout_type: String,
    #[validate(range(min = 1, max = 1440, message = "durationMinutes must be 1-1440"))]
    pub duration_minutes: u32,
    #[serde(default)]
    #[validate(length(max = 1000, message = "notes must be at most 1000 characters"))]
    pub notes: Option<String>,
    /// Client's offset from UTC in minutes; the entry date is taken there
    #[serde(default)]
    #[validate(range(
        min = -840,
        max = 840,
        message = "utcOffsetMinutes must be between -840 and 840"
    ))]
    pub utc_offset_minutes: Option<i32>,
}

impl CheckInRequest {
    /// Trim text fields; blank notes become `None`.
    pub fn normalized(self) -> Self {
        let notes = self
            .notes
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        Self {
            workout_type: self.workout_type.trim().to_string(),
            duration_minutes: self.duration_minutes,
            notes,
            utc_offset_minutes: self.utc_offset_minutes,
        }
    }
}
