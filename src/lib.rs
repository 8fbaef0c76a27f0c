// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitPulse: workout check-in tracker
//!
//! This crate provides the backend API for logging workouts, deriving
//! totals and streaks, and attaching a short motivational phrase to each
//! check-in.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::CheckInService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub check_in: CheckInService,
}
