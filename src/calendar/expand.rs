//! Recurrence expansion: turn base events into the concrete instances
//! visible in a range.

use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use chrono_tz::Tz;

use super::bucket::overlaps_window;
use super::models::{Event, EventInstance, Frequency, InstanceId, Recurrence};
use crate::core::tz::{local_date, local_time, localize};

/// Expand every event into the instances overlapping `[range_start, range_end]`.
///
/// One-off events are kept as-is when they overlap the range. Recurring
/// events yield one instance per matching date from the later of the
/// series start and the range start's date, until the earlier of the
/// series end date and the range end. Calendar dates of timed events
/// are taken in `tz`; all-day events always use their UTC date.
///
/// Recurring timed occurrences keep the base event's clock time in `tz`,
/// the viewer's zone, not in the event's own `timezone`. The same series
/// therefore yields different instants for viewers in different zones.
///
/// Output order follows the input collection, then occurrence date.
pub fn expand<'a>(
    events: &'a [Event],
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    tz: &Tz,
) -> Vec<EventInstance<'a>> {
    if range_end < range_start {
        return Vec::new();
    }

    let mut expanded = Vec::new();
    for event in events {
        match &event.recurrence {
            None => {
                if overlaps_window(
                    event.start_time,
                    event.end_time,
                    event.is_all_day,
                    range_start,
                    range_end,
                    tz,
                ) {
                    expanded.push(EventInstance::single(event));
                }
            }
            Some(rule) => {
                expanded.extend(occurrences(event, rule, range_start, range_end, tz));
            }
        }
    }

    tracing::trace!(
        "Expanded {} events into {} instances between {} and {}",
        events.len(),
        expanded.len(),
        range_start,
        range_end
    );
    expanded
}

fn occurrences<'a>(
    event: &'a Event,
    rule: &Recurrence,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    tz: &Tz,
) -> Vec<EventInstance<'a>> {
    let anchor_tz = if event.is_all_day { Tz::UTC } else { *tz };
    let first = local_date(event.start_time, &anchor_tz);
    let clock = local_time(event.start_time, &anchor_tz);
    let duration = event.duration();

    let from = first.max(local_date(range_start, tz));
    let mut last = local_date(range_end, tz);
    if let Some(end_date) = rule.end_date {
        last = last.min(end_date.date_naive());
    }
    if from > last {
        return Vec::new();
    }

    let dates: Vec<NaiveDate> = match rule.frequency {
        Frequency::Daily => dates_between(from, last).collect(),
        Frequency::Weekly => {
            let Some(days) = rule.days_of_week.as_ref().filter(|d| !d.is_empty()) else {
                tracing::debug!("Skipping weekly series {} without weekdays", event.id);
                return Vec::new();
            };
            dates_between(from, last)
                .filter(|d| days.contains(&(d.weekday().num_days_from_sunday() as u8)))
                .collect()
        }
        Frequency::Monthly => monthly_dates(first)
            .skip_while(|d| *d < from)
            .take_while(|d| *d <= last)
            .collect(),
    };

    dates
        .into_iter()
        .filter(|date| !rule.exceptions.contains(date))
        .map(|date| {
            let start_time = localize(&anchor_tz, date.and_time(clock));
            EventInstance {
                id: InstanceId::occurrence(&event.id, date),
                event,
                start_time,
                end_time: start_time + duration,
            }
        })
        // Timed occurrences on the last day may still start after the range
        .take_while(|instance| event.is_all_day || instance.start_time <= range_end)
        .collect()
}

fn dates_between(from: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |d| *d <= last)
}

/// Same day of month as `first`, clamped to the end of shorter months
fn monthly_dates(first: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let day = first.day();
    let month_start = first.with_day(1).unwrap_or(first);
    (0u32..).map_while(move |offset| {
        let month = month_start.checked_add_months(Months::new(offset))?;
        let clamped = day.min(days_in_month(month));
        month.with_day(clamped)
    })
}

fn days_in_month(month_start: NaiveDate) -> u32 {
    month_start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}
