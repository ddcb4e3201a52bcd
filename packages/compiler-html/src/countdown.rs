//! # Countdown Time Calculator
//!
//! Remaining time until a countdown block's target. Live previews call
//! this once a second; the compiler calls it once and bakes the result
//! into static markup.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use serde::Serialize;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    pub fn is_zero(&self) -> bool {
        *self == TimeLeft::default()
    }
}

/// Time from `now` until `target`, all zero once the target has passed
pub fn time_left_until(target: DateTime<Utc>, now: DateTime<Utc>) -> TimeLeft {
    let diff = (target - now).num_milliseconds();
    if diff <= 0 {
        return TimeLeft::default();
    }

    TimeLeft {
        days: diff / MS_PER_DAY,
        hours: (diff / MS_PER_HOUR) % 24,
        minutes: (diff / MS_PER_MINUTE) % 60,
        seconds: (diff / MS_PER_SECOND) % 60,
    }
}

/// Time left until `target_date` (`YYYY-MM-DD`) at `target_time`
/// (`HH:MM[:SS]`) in `timezone`. A target that cannot be read counts as
/// already reached.
pub fn time_left(target_date: &str, target_time: &str, timezone: &str, now: DateTime<Utc>) -> TimeLeft {
    match parse_target(target_date, target_time, timezone) {
        Some(target) => time_left_until(target, now),
        None => TimeLeft::default(),
    }
}

/// Resolve a countdown target to an instant
pub fn parse_target(target_date: &str, target_time: &str, timezone: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(target_date.trim(), "%Y-%m-%d").ok()?;
    let time = parse_time(target_time.trim())?;
    let offset = parse_offset(timezone.trim());

    offset
        .from_local_datetime(&NaiveDateTime::new(date, time))
        .single()
        .map(|target| target.with_timezone(&Utc))
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    if value.is_empty() {
        return NaiveTime::from_hms_opt(0, 0, 0);
    }

    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

/// `UTC`, `Z` or `±HH:MM`; anything else is UTC
fn parse_offset(value: &str) -> FixedOffset {
    let utc = Utc.fix();

    let sign = match value.chars().next() {
        Some('+') => 1,
        Some('-') => -1,
        _ => return utc,
    };

    let mut parts = value[1..].splitn(2, ':');
    let hours = parts.next().and_then(parse_digits);
    let minutes = parts.next().map_or(Some(0), parse_digits);

    match (hours, minutes) {
        (Some(hours), Some(minutes)) if hours <= 14 && minutes < 60 => {
            FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60) as i32).unwrap_or(utc)
        }
        _ => utc,
    }
}

/// One or two ASCII digits, no sign
fn parse_digits(value: &str) -> Option<u32> {
    if value.is_empty() || value.len() > 2 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
