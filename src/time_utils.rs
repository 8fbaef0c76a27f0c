// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date keys and calendar-day arithmetic.
//!
//! Entries are keyed by the local calendar date as `YYYY-MM-DD`. The format is
//! zero-padded so that lexicographic order matches chronological order.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone, Weekday};

/// Format used for entry date keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Format a calendar date as a `YYYY-MM-DD` key.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Date key for an instant, taken in the instant's own timezone.
pub fn local_date_key<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    date_key(now.date_naive())
}

/// Parse a `YYYY-MM-DD` key. Returns `None` for anything else.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    if key.len() != 10 {
        return None;
    }
    NaiveDate::parse_from_str(key, DATE_KEY_FORMAT).ok()
}

/// Source of the current instant.
///
/// Services read time through this so tests can pin "now".
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock in the host's local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Largest UTC offset a client may report (UTC-14:00 to UTC+14:00).
pub const MAX_UTC_OFFSET_MINUTES: i32 = 14 * 60;

/// Offset for a client-reported `utcOffsetMinutes` (east of UTC is positive).
///
/// Returns `None` outside `-840..=840`.
pub fn client_offset(minutes: i32) -> Option<FixedOffset> {
    if !(-MAX_UTC_OFFSET_MINUTES..=MAX_UTC_OFFSET_MINUTES).contains(&minutes) {
        return None;
    }
    FixedOffset::east_opt(minutes * 60)
}

/// Re-express `now` at the client's offset, or keep the clock's own offset.
pub fn at_offset(
    now: DateTime<FixedOffset>,
    offset: Option<FixedOffset>,
) -> DateTime<FixedOffset> {
    match offset {
        Some(offset) => now.with_timezone(&offset),
        None => now,
    }
}

/// Absolute whole calendar days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}

/// Parse a `YYYY-MM` month key into `(year, month)`.
pub fn parse_month_key(key: &str) -> Option<(i32, u32)> {
    let (year, month) = key.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year = year.parse::<i32>().ok()?;
    let month = month.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1).map(|_| (year, month))
}

/// Number of days in the given month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((next - first).num_days() as u32)
}

/// Short English weekday label (e.g. "Mon").
pub fn weekday_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}
