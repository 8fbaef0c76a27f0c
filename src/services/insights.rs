// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Derived views for the calendar and stats screens.
//!
//! Like the aggregator, everything here is a pure projection of the entry list.

use std::collections::{BTreeSet, HashMap};

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{AppError, Result};
use crate::models::{CalendarMonth, DailyMinutes, TypeShare, WorkoutLogEntry};
use crate::time_utils::{date_key, days_in_month, parse_date_key, weekday_label};

/// Default number of types shown in the distribution.
pub const DEFAULT_TYPE_LIMIT: usize = 5;

/// Minutes per day for the 7 days ending with `today`, oldest first.
pub fn weekly_minutes(entries: &[WorkoutLogEntry], today: NaiveDate) -> Vec<DailyMinutes> {
    let mut by_date: HashMap<&str, u64> = HashMap::new();
    for entry in entries {
        *by_date.entry(entry.date.as_str()).or_insert(0) += u64::from(entry.duration_minutes);
    }

    (0..7)
        .rev()
        .map(|offset| {
            let day = today - Duration::days(offset);
            let key = date_key(day);
            let minutes = by_date.get(key.as_str()).copied().unwrap_or(0);
            DailyMinutes {
                weekday: weekday_label(day).to_string(),
                date: key,
                minutes,
            }
        })
        .collect()
}

/// Entry counts per workout type, in first-seen order, truncated to `limit`.
pub fn type_distribution(entries: &[WorkoutLogEntry], limit: usize) -> Vec<TypeShare> {
    let total = entries.len() as u32;
    if total == 0 {
        return Vec::new();
    }

    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for entry in entries {
        let count = counts.entry(entry.workout_type.as_str()).or_insert(0);
        if *count == 0 {
            order.push(entry.workout_type.as_str());
        }
        *count += 1;
    }

    order
        .into_iter()
        .take(limit)
        .map(|workout_type| {
            let count = counts[workout_type];
            TypeShare {
                workout_type: workout_type.to_string(),
                count,
                percent: ((f64::from(count) * 100.0) / f64::from(total)).round() as u32,
            }
        })
        .collect()
}

/// Calendar grid data for one month.
pub fn calendar_month(
    entries: &[WorkoutLogEntry],
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<CalendarMonth> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month {}-{:02}", year, month)))?;
    let days = days_in_month(year, month)
        .ok_or_else(|| AppError::BadRequest(format!("Invalid month {}-{:02}", year, month)))?;

    let active_days: BTreeSet<u32> = entries
        .iter()
        .filter_map(|e| parse_date_key(&e.date))
        .filter(|d| d.year() == year && d.month() == month)
        .map(|d| d.day())
        .collect();

    let today_in_month = (today.year() == year && today.month() == month).then(|| today.day());

    Ok(CalendarMonth {
        year,
        month,
        days_in_month: days,
        first_weekday: first.weekday().num_days_from_sunday(),
        active_days: active_days.into_iter().collect(),
        today: today_in_month,
    })
}

/// Entries recorded on `date`, newest first.
pub fn entries_on(entries: &[WorkoutLogEntry], date: NaiveDate) -> Vec<WorkoutLogEntry> {
    let key = date_key(date);
    let mut matching: Vec<WorkoutLogEntry> =
        entries.iter().filter(|e| e.date == key).cloned().collect();
    matching.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    matching
}
