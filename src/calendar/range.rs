//! Which calendar days a view displays and the instant bounds of those days.
//!
//! Weeks start on Sunday for every view.

use chrono::{DateTime, Datelike, Duration, Months, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::models::ViewMode;
use crate::core::tz::localize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Previous,
    Next,
}

pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

fn days_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Every day of the Sunday-aligned grid covering the reference month.
///
/// The grid is always whole weeks: 28, 35 or 42 days.
pub fn month_view_days(reference: NaiveDate) -> Vec<NaiveDate> {
    let start = start_of_week(first_of_month(reference));
    let end = end_of_week(last_of_month(reference));
    days_between(start, end)
}

/// The seven days of the week containing the reference date
pub fn week_view_days(reference: NaiveDate) -> Vec<NaiveDate> {
    days_between(start_of_week(reference), end_of_week(reference))
}

pub fn view_days(view: ViewMode, reference: NaiveDate) -> Vec<NaiveDate> {
    match view {
        ViewMode::Month => month_view_days(reference),
        ViewMode::Week => week_view_days(reference),
        ViewMode::Day => vec![reference],
    }
}

/// First and last instant of a calendar day in `tz`, both inclusive
pub fn day_bounds(date: NaiveDate, tz: &Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = localize(tz, date.and_time(NaiveTime::MIN));
    let next = date
        .succ_opt()
        .map(|d| localize(tz, d.and_time(NaiveTime::MIN)))
        .unwrap_or(start + Duration::days(1));
    (start, next - Duration::milliseconds(1))
}

/// Instant bounds covering every day a view displays
pub fn view_range(view: ViewMode, reference: NaiveDate, tz: &Tz) -> (DateTime<Utc>, DateTime<Utc>) {
    let days = view_days(view, reference);
    let first = days.first().copied().unwrap_or(reference);
    let last = days.last().copied().unwrap_or(reference);
    (day_bounds(first, tz).0, day_bounds(last, tz).1)
}

/// Step the reference date one view-sized unit forward or back
pub fn navigate(view: ViewMode, reference: NaiveDate, direction: Direction) -> NaiveDate {
    let stepped = match (view, direction) {
        (ViewMode::Month, Direction::Next) => reference.checked_add_months(Months::new(1)),
        (ViewMode::Month, Direction::Previous) => reference.checked_sub_months(Months::new(1)),
        (ViewMode::Week, Direction::Next) => reference.checked_add_signed(Duration::days(7)),
        (ViewMode::Week, Direction::Previous) => reference.checked_sub_signed(Duration::days(7)),
        (ViewMode::Day, Direction::Next) => reference.succ_opt(),
        (ViewMode::Day, Direction::Previous) => reference.pred_opt(),
    };
    stepped.unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn it_needs_no_padding_for_a_four_week_february() {
        // February 2026 starts on a Sunday and ends on a Saturday
        let days = month_view_days(date(2026, 2, 10));
        assert_eq!(days.len(), 28);
        assert_eq!(days.first(), Some(&date(2026, 2, 1)));
        assert_eq!(days.last(), Some(&date(2026, 2, 28)));
    }

    #[test]
    fn it_pads_the_month_grid_to_whole_weeks() {
        // December 2025 starts on a Monday and ends on a Wednesday
        let days = month_view_days(date(2025, 12, 17));
        assert_eq!(days.len(), 35);
        assert_eq!(days.first(), Some(&date(2025, 11, 30)));
        assert_eq!(days.last(), Some(&date(2026, 1, 3)));
    }

    #[test]
    fn it_builds_six_week_grids_when_needed() {
        // August 2026 starts on a Saturday
        let days = month_view_days(date(2026, 8, 1));
        assert_eq!(days.len(), 42);
        assert_eq!(days.first(), Some(&date(2026, 7, 26)));
        assert_eq!(days.last(), Some(&date(2026, 9, 5)));
    }

    #[test]
    fn it_always_returns_sunday_aligned_weeks() {
        for month in 1..=12 {
            let days = month_view_days(date(2025, month, 10));
            assert_eq!(days.len() % 7, 0);
            assert_eq!(days[0].weekday(), Weekday::Sun);
            assert_eq!(days[days.len() - 1].weekday(), Weekday::Sat);
            for pair in days.windows(2) {
                assert_eq!(pair[1], pair[0].succ_opt().unwrap());
            }
        }
    }

    #[test]
    fn it_returns_the_week_around_a_date() {
        let days = week_view_days(date(2025, 12, 10));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2025, 12, 7));
        assert_eq!(days[6], date(2025, 12, 13));

        // A Sunday starts its own week
        assert_eq!(week_view_days(date(2025, 12, 7))[0], date(2025, 12, 7));
    }

    #[test]
    fn it_computes_inclusive_day_bounds() {
        let tz: Tz = "America/Los_Angeles".parse().unwrap();
        let (start, end) = day_bounds(date(2025, 12, 10), &tz);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 12, 10, 8, 0, 0).unwrap());
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2025, 12, 11, 7, 59, 59).unwrap() + Duration::milliseconds(999)
        );
    }

    #[test]
    fn it_handles_short_dst_days() {
        let tz: Tz = "America/New_York".parse().unwrap();
        let (start, end) = day_bounds(date(2025, 3, 9), &tz);
        assert_eq!(end - start, Duration::hours(23) - Duration::milliseconds(1));
    }

    #[test]
    fn it_covers_the_padded_grid_for_month_ranges() {
        let (start, end) = view_range(ViewMode::Month, date(2025, 12, 17), &Tz::UTC);
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 11, 30, 0, 0, 0).unwrap());
        assert_eq!(
            end,
            Utc.with_ymd_and_hms(2026, 1, 3, 23, 59, 59).unwrap() + Duration::milliseconds(999)
        );
    }

    #[test]
    fn it_navigates_by_view_size() {
        assert_eq!(
            navigate(ViewMode::Month, date(2025, 1, 31), Direction::Next),
            date(2025, 2, 28)
        );
        assert_eq!(
            navigate(ViewMode::Month, date(2025, 3, 15), Direction::Previous),
            date(2025, 2, 15)
        );
        assert_eq!(
            navigate(ViewMode::Week, date(2025, 12, 29), Direction::Next),
            date(2026, 1, 5)
        );
        assert_eq!(
            navigate(ViewMode::Day, date(2026, 1, 1), Direction::Previous),
            date(2025, 12, 31)
        );
    }
}
