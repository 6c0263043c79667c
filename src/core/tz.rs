//! Date and time conversion between calendar dates, local clock times
//! and the UTC instants stored on events.
//!
//! All-day events are anchored at 12:00 UTC so that their calendar date
//! is the same in every zone from UTC-12 to UTC+14.

use anyhow::{Context, Result};
use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;

pub const ALL_DAY_ANCHOR_HOUR: u32 = 12;

/// Resolve an IANA zone name, falling back to UTC for unknown names.
pub fn resolve_timezone(name: Option<&str>) -> Tz {
    match name {
        Some(name) => name.parse::<Tz>().unwrap_or_else(|_| {
            tracing::warn!("Unknown timezone {}, falling back to UTC", name);
            Tz::UTC
        }),
        None => Tz::UTC,
    }
}

/// Convert a local date and time in `tz` to a UTC instant.
///
/// Ambiguous times (clocks going back) resolve to the earliest instant.
/// Times inside a gap (clocks going forward) are shifted past the gap.
pub fn localize(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        LocalResult::None => {
            // Gaps are at most a couple of hours so this terminates quickly
            let mut shifted = naive;
            loop {
                shifted += Duration::minutes(15);
                if let Some(dt) = tz.from_local_datetime(&shifted).earliest() {
                    return dt.with_timezone(&Utc);
                }
            }
        }
    }
}

pub fn local_date(instant: DateTime<Utc>, tz: &Tz) -> NaiveDate {
    instant.with_timezone(tz).date_naive()
}

pub fn local_time(instant: DateTime<Utc>, tz: &Tz) -> NaiveTime {
    instant.with_timezone(tz).time()
}

/// The instant an all-day event on `date` is stored at
pub fn all_day_anchor(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(ALL_DAY_ANCHOR_HOUR, 0, 0)
        .map(|naive| naive.and_utc())
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN).and_utc())
}

/// Parse a form style `YYYY-MM-DD` date and optional `HH:MM` time.
///
/// Without a time the result is the all-day anchor for that date.
pub fn parse_date_time(date: &str, time: Option<&str>, tz: &Tz) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date {}", date))?;

    let Some(time) = time.map(str::trim).filter(|t| !t.is_empty()) else {
        return Ok(all_day_anchor(date));
    };

    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .with_context(|| format!("Invalid time {}", time))?;

    Ok(localize(tz, date.and_time(time)))
}

pub fn format_in_timezone(instant: DateTime<Utc>, tz: &Tz, fmt: &str) -> String {
    instant.with_timezone(tz).format(fmt).to_string()
}
