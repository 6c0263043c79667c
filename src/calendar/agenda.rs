//! The render pipeline for one view: expand over the view's range,
//! bucket per day, split all-day from timed and lay out the timed ones.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use super::bucket::{events_for_day, partition_all_day};
use super::expand::expand;
use super::layout::layout;
use super::models::{Event, EventInstance, LayoutInstance, ViewMode};
use super::range::{Direction, navigate, view_days, view_range};

#[derive(Debug, Clone)]
pub struct DayAgenda<'a> {
    pub date: NaiveDate,
    pub all_day: Vec<EventInstance<'a>>,
    pub timed: Vec<LayoutInstance<'a>>,
}

#[derive(Debug, Clone)]
pub struct CalendarView<'a> {
    pub view: ViewMode,
    pub reference: NaiveDate,
    pub range_start: DateTime<Utc>,
    pub range_end: DateTime<Utc>,
    pub previous: NaiveDate,
    pub next: NaiveDate,
    pub days: Vec<DayAgenda<'a>>,
}

/// Build every day of a view from the (already filtered) base events
pub fn build_view<'a>(
    events: &'a [Event],
    view: ViewMode,
    reference: NaiveDate,
    tz: &Tz,
) -> CalendarView<'a> {
    let (range_start, range_end) = view_range(view, reference, tz);
    let expanded = expand(events, range_start, range_end, tz);

    let days = view_days(view, reference)
        .into_iter()
        .map(|date| {
            let (all_day, timed) = partition_all_day(events_for_day(&expanded, date, tz));
            DayAgenda {
                date,
                all_day,
                timed: layout(&timed),
            }
        })
        .collect();

    CalendarView {
        view,
        reference,
        range_start,
        range_end,
        previous: navigate(view, reference, Direction::Previous),
        next: navigate(view, reference, Direction::Next),
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::models::{EventType, Frequency, Recurrence};
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn events() -> Vec<Event> {
        let mut standup = Event::new(
            "standup",
            "Daily Standup",
            EventType::Meeting,
            utc(2025, 12, 1, 9, 0),
            utc(2025, 12, 1, 9, 15),
        );
        standup.recurrence = Some(Recurrence::new(Frequency::Daily).until(utc(2025, 12, 31, 0, 0)));
        let overlap = Event::new(
            "sync",
            "Vendor Sync",
            EventType::Meeting,
            utc(2025, 12, 10, 9, 0),
            utc(2025, 12, 10, 10, 0),
        );
        let mut birthday = Event::new(
            "sarah-birthday",
            "Sarah's Birthday",
            EventType::Birthday,
            utc(2025, 12, 10, 12, 0),
            utc(2025, 12, 10, 12, 0),
        );
        birthday.is_all_day = true;
        vec![standup, overlap, birthday]
    }

    #[test]
    fn it_builds_a_day_view() {
        let events = events();
        let view = build_view(&events, ViewMode::Day, date(2025, 12, 10), &Tz::UTC);

        assert_eq!(view.days.len(), 1);
        assert_eq!(view.previous, date(2025, 12, 9));
        assert_eq!(view.next, date(2025, 12, 11));

        let day = &view.days[0];
        assert_eq!(day.all_day.len(), 1);
        assert_eq!(day.all_day[0].id.base_id, "sarah-birthday");
        assert_eq!(day.timed.len(), 2);
        assert!(day.timed.iter().all(|l| l.column_count == 2));
    }

    #[test]
    fn it_builds_a_week_view() {
        let events = events();
        let view = build_view(&events, ViewMode::Week, date(2025, 12, 10), &Tz::UTC);

        assert_eq!(view.days.len(), 7);
        assert_eq!(view.days[0].date, date(2025, 12, 7));
        for day in &view.days {
            let standups = day
                .timed
                .iter()
                .filter(|l| l.instance.id.base_id == "standup")
                .count();
            assert_eq!(standups, 1);
        }
    }

    #[test]
    fn it_fills_padding_days_of_a_month_view() {
        let events = events();
        let view = build_view(&events, ViewMode::Month, date(2025, 12, 10), &Tz::UTC);

        assert_eq!(view.days.len(), 35);
        // Nov 30 is padding before the series starts, Jan 1 is after it ends
        assert!(view.days[0].timed.is_empty());
        assert!(view.days[32].timed.is_empty());
        assert_eq!(view.days[1].timed.len(), 1);
    }
}
