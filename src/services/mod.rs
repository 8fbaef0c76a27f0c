// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod checkin;
pub mod insights;
pub mod motivation;
pub mod notifier;

pub use checkin::{CheckInEvent, CheckInOutcome, CheckInService};
pub use motivation::{
    provider_from_config, GeminiMotivation, MotivationProvider, StaticMotivation,
};
