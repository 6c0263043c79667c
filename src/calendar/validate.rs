use anyhow::{Result, bail};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use chrono_tz::Tz;
use itertools::Itertools;

use super::expand::expand;
use super::models::{Event, EventInstance, EventType, Frequency};

/// Check the invariants that tie fields to an event's type.
///
/// Every problem found is reported in a single error.
pub fn validate_event(event: &Event) -> Result<()> {
    let mut problems = Vec::new();

    if event.title.trim().is_empty() {
        problems.push("title must not be empty".to_string());
    }
    if event.end_time < event.start_time {
        problems.push("end time cannot be before start time".to_string());
    }
    if let Some(subtype) = event.subtype {
        if subtype.parent() != event.event_type {
            problems.push(format!(
                "subtype {:?} does not belong to {}",
                subtype,
                event.event_type.label()
            ));
        }
    }
    if event.person.is_some() && !event.event_type.supports_person() {
        problems.push(format!(
            "{} events do not have a person",
            event.event_type.label()
        ));
    }
    if let Some(rule) = &event.recurrence {
        if rule.frequency == Frequency::Weekly {
            match &rule.days_of_week {
                Some(days) if !days.is_empty() => {
                    if let Some(day) = days.iter().find(|d| **d > 6) {
                        problems.push(format!("weekday {} is out of range", day));
                    }
                }
                _ => problems.push("weekly recurrence needs at least one weekday".to_string()),
            }
        }
        if let Some(end_date) = rule.end_date {
            if end_date.date_naive() < event.start_time.date_naive() {
                problems.push("recurrence ends before the event starts".to_string());
            }
        }
    }

    if !problems.is_empty() {
        bail!("Invalid event {}: {}", event.id, problems.join("; "));
    }
    Ok(())
}

/// People with time off overlapping `[start, end)`, in first-seen order.
///
/// All-day time off covers its whole UTC dates.
pub fn time_off_overlaps(
    events: &[Event],
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    tz: &Tz,
) -> Vec<String> {
    expand(events, start, end, tz)
        .iter()
        .filter(|instance| instance.event.event_type == EventType::TimeOff)
        .filter(|instance| {
            let (off_start, off_end) = occupied(instance);
            start < off_end && end > off_start
        })
        .filter_map(|instance| instance.event.person.clone())
        .unique()
        .collect()
}

fn occupied(instance: &EventInstance<'_>) -> (DateTime<Utc>, DateTime<Utc>) {
    if !instance.is_all_day() {
        return (instance.start_time, instance.end_time);
    }
    let first = instance.start_time.date_naive().and_time(NaiveTime::MIN).and_utc();
    let last = instance.end_time.date_naive().and_time(NaiveTime::MIN).and_utc();
    (first, last + Duration::days(1) - Duration::milliseconds(1))
}
