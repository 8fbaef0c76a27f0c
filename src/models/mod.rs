// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod stats;
pub mod workout;

pub use stats::{CalendarMonth, DailyMinutes, TypeShare, UserStats};
pub use workout::{CheckInRequest, WorkoutLogEntry, EXERCISE_TYPES};
