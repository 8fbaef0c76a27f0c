// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Check-in workflow.
//!
//! Handles the core workflow:
//! 1. Stamp the new entry (id, timestamp, local date) when the user acts
//! 2. Ask the motivation provider for a phrase, bounded by a timeout
//! 3. Prepend the entry and persist the full list
//! 4. Recompute stats from the persisted list
//! 5. Notify subscribers

use std::sync::Arc;
use std::time::Duration;

use chrono::{FixedOffset, NaiveDate};
use serde::Serialize;
use tokio::sync::{broadcast, Mutex};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::db::LogStore;
use crate::error::Result;
use crate::models::{CheckInRequest, UserStats, WorkoutLogEntry};
use crate::services::aggregator::{compute_stats, record_entry};
use crate::services::motivation::{MotivationProvider, FALLBACK_EMPTY, FALLBACK_ERROR};
use crate::time_utils::{at_offset, client_offset, local_date_key, Clock};

const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Events emitted after the log changes.
#[derive(Debug, Clone)]
pub enum CheckInEvent {
    /// A new entry was persisted
    Recorded {
        entry: WorkoutLogEntry,
        stats: UserStats,
    },
    /// The whole log was cleared
    Reset,
}

/// Result of a successful check-in.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CheckInOutcome {
    pub entry: WorkoutLogEntry,
    pub stats: UserStats,
}

/// Records check-ins against an injected log store.
pub struct CheckInService {
    store: Arc<dyn LogStore>,
    motivation: Arc<dyn MotivationProvider>,
    clock: Arc<dyn Clock>,
    motivation_timeout: Duration,
    /// Serializes load-modify-save so concurrent check-ins don't drop entries.
    write_lock: Mutex<()>,
    events: broadcast::Sender<CheckInEvent>,
}

impl CheckInService {
    pub fn new(
        store: Arc<dyn LogStore>,
        motivation: Arc<dyn MotivationProvider>,
        clock: Arc<dyn Clock>,
        motivation_timeout: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            motivation,
            clock,
            motivation_timeout,
            write_lock: Mutex::new(()),
            events,
        }
    }

    /// Subscribe to post-save events.
    pub fn subscribe(&self) -> broadcast::Receiver<CheckInEvent> {
        self.events.subscribe()
    }

    /// Current date at `offset`, or in the clock's own timezone.
    pub fn today_at(&self, offset: Option<FixedOffset>) -> NaiveDate {
        at_offset(self.clock.now(), offset).date_naive()
    }

    /// Record a new workout.
    ///
    /// The entry's id, timestamp and date are fixed before the motivation
    /// provider is consulted, so a slow provider never shifts them. The date
    /// is taken at the request's UTC offset when one is given.
    pub async fn check_in(&self, request: CheckInRequest) -> Result<CheckInOutcome> {
        let offset = request.utc_offset_minutes.and_then(client_offset);
        let now = at_offset(self.clock.now(), offset);
        let id = uuid::Uuid::new_v4().to_string();
        let timestamp = now.timestamp_millis();
        let date = local_date_key(&now);

        tracing::info!(
            id = %id,
            date = %date,
            workout_type = %request.workout_type,
            duration_minutes = request.duration_minutes,
            "Recording check-in"
        );

        let motivation = self
            .fetch_motivation(&request.workout_type, request.duration_minutes)
            .await;

        let entry = WorkoutLogEntry {
            id,
            date,
            timestamp,
            workout_type: request.workout_type,
            duration_minutes: request.duration_minutes,
            notes: request.notes,
            motivation_text: Some(motivation),
        };

        let stats = {
            let _guard = self.write_lock.lock().await;
            let updated = record_entry(self.store.load(), entry.clone());
            self.store.save_all(&updated)?;
            compute_stats(&updated, now.date_naive())
        };

        tracing::info!(
            id = %entry.id,
            total_workouts = stats.total_workouts,
            current_streak = stats.current_streak,
            "Check-in saved"
        );

        // No subscribers is fine
        let _ = self.events.send(CheckInEvent::Recorded {
            entry: entry.clone(),
            stats,
        });

        Ok(CheckInOutcome { entry, stats })
    }

    /// All entries, most recent first.
    pub fn entries(&self) -> Vec<WorkoutLogEntry> {
        self.store.load()
    }

    /// Stats recomputed from the stored log.
    pub fn stats(&self) -> UserStats {
        self.stats_at(None)
    }

    /// Stats with the streak anchored on today at `offset`.
    pub fn stats_at(&self, offset: Option<FixedOffset>) -> UserStats {
        compute_stats(&self.store.load(), self.today_at(offset))
    }

    /// Delete every stored entry.
    pub async fn reset(&self) -> Result<()> {
        {
            let _guard = self.write_lock.lock().await;
            self.store.clear()?;
        }
        tracing::info!("Workout log cleared");
        let _ = self.events.send(CheckInEvent::Reset);
        Ok(())
    }

    async fn fetch_motivation(&self, workout_type: &str, duration_minutes: u32) -> String {
        let request = self
            .motivation
            .request_motivation(workout_type, duration_minutes);

        match tokio::time::timeout(self.motivation_timeout, request).await {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) => FALLBACK_EMPTY.to_string(),
            Err(_) => {
                tracing::warn!(
                    timeout_ms = self.motivation_timeout.as_millis() as u64,
                    "Motivation provider timed out"
                );
                FALLBACK_ERROR.to_string()
            }
        }
    }
}
