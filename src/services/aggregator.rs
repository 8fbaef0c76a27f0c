// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Log aggregation.
//!
//! Pure functions over the entry list: insertion ordering and summary
//! statistics. No I/O, no clock reads; "today" is always passed in.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};

use crate::models::{UserStats, WorkoutLogEntry};
use crate::time_utils::{days_between, parse_date_key};

/// Prepend a new entry to the list.
///
/// Prior entries keep their relative order. Nothing is deduplicated or
/// validated here.
pub fn record_entry(
    existing: Vec<WorkoutLogEntry>,
    entry: WorkoutLogEntry,
) -> Vec<WorkoutLogEntry> {
    let mut updated = Vec::with_capacity(existing.len() + 1);
    updated.push(entry);
    updated.extend(existing);
    updated
}

/// Compute summary statistics from the full entry list.
pub fn compute_stats(entries: &[WorkoutLogEntry], today: NaiveDate) -> UserStats {
    UserStats {
        total_workouts: entries.len() as u32,
        current_streak: current_streak(entries, today),
        total_minutes: entries.iter().map(|e| u64::from(e.duration_minutes)).sum(),
    }
}

/// Consecutive active days, anchored at the most recent active day.
///
/// The run only counts if the most recent active day is today or yesterday;
/// otherwise the streak is 0. Walking back from the anchor, the first gap of
/// more than one calendar day ends the run. Unparseable dates are ignored.
pub fn current_streak(entries: &[WorkoutLogEntry], today: NaiveDate) -> u32 {
    let dates: BTreeSet<NaiveDate> = entries
        .iter()
        .filter_map(|e| parse_date_key(&e.date))
        .collect();

    let mut descending = dates.into_iter().rev();
    let Some(most_recent) = descending.next() else {
        return 0;
    };

    let yesterday = today - Duration::days(1);
    if most_recent != today && most_recent != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut anchor = most_recent;
    for date in descending {
        if days_between(anchor, date) != 1 {
            break;
        }
        streak += 1;
        anchor = date;
    }
    streak
}
