//! Bucketing expanded instances into calendar days.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::models::EventInstance;
use super::range::day_bounds;
use crate::core::tz::local_date;

/// Whether `[start, end]` overlaps the inclusive window.
///
/// Timed intervals overlap when either endpoint falls inside the window
/// or the interval spans it. All-day intervals compare calendar dates:
/// their UTC dates against the window's dates in `tz`.
pub fn overlaps_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    is_all_day: bool,
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    tz: &Tz,
) -> bool {
    if is_all_day {
        let first = start.date_naive();
        let last = end.date_naive().max(first);
        return first <= local_date(window_end, tz) && last >= local_date(window_start, tz);
    }

    let within = |instant: DateTime<Utc>| instant >= window_start && instant <= window_end;
    within(start) || within(end) || (start < window_start && end > window_end)
}

pub fn events_for_day<'a>(
    instances: &[EventInstance<'a>],
    day: NaiveDate,
    tz: &Tz,
) -> Vec<EventInstance<'a>> {
    let (day_start, day_end) = day_bounds(day, tz);
    instances
        .iter()
        .filter(|instance| {
            overlaps_window(
                instance.start_time,
                instance.end_time,
                instance.is_all_day(),
                day_start,
                day_end,
                tz,
            )
        })
        .cloned()
        .collect()
}

/// Split into (all-day, timed) keeping relative order
pub fn partition_all_day<'a>(
    instances: Vec<EventInstance<'a>>,
) -> (Vec<EventInstance<'a>>, Vec<EventInstance<'a>>) {
    instances.into_iter().partition(|instance| instance.is_all_day())
}

pub fn is_multi_day(instance: &EventInstance<'_>, tz: &Tz) -> bool {
    if instance.is_all_day() {
        instance.start_time.date_naive() != instance.end_time.date_naive()
    } else {
        local_date(instance.start_time, tz) != local_date(instance.end_time, tz)
    }
}
