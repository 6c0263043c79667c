//! Operations on the base event collection.
//!
//! Every operation takes the current collection by reference and returns
//! a new one. Expanded instances are never edited directly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use super::models::{Event, EventSubtype, EventType, Recurrence};
use crate::core::tz::{all_day_anchor, local_date, resolve_timezone};

/// Fields of an event before it has an id
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default)]
    pub subtype: Option<EventSubtype>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub person: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub recurrence: Option<Recurrence>,
}

impl EventDraft {
    /// Assign a fresh id, anchor all-day dates and derive the partial-day
    /// flag
    pub fn into_event(self) -> Event {
        let mut event = Event {
            id: format!("event-{}", Uuid::new_v4()),
            title: self.title,
            event_type: self.event_type,
            subtype: self.subtype,
            start_time: self.start_time,
            end_time: self.end_time,
            is_all_day: self.is_all_day,
            is_partial_day: false,
            person: none_if_blank(self.person),
            description: none_if_blank(self.description),
            timezone: self.timezone,
            recurrence: self.recurrence,
        };
        anchor_all_day(&mut event);
        event.is_partial_day = is_partial_day(&event);
        event
    }
}

/// Changes to apply to a base event. Absent fields are left alone.
///
/// For the optional fields of `Event`, an explicit `null` clears them.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<EventType>,
    #[serde(default, deserialize_with = "explicit")]
    pub subtype: Option<Option<EventSubtype>>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_all_day: Option<bool>,
    #[serde(default, deserialize_with = "explicit")]
    pub person: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub timezone: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit")]
    pub recurrence: Option<Option<Recurrence>>,
}

/// Distinguish a missing field (outer `None`) from `null` (`Some(None)`)
fn explicit<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl EventPatch {
    fn apply(self, mut event: Event) -> Event {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(subtype) = self.subtype {
            event.subtype = subtype;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
        if let Some(is_all_day) = self.is_all_day {
            event.is_all_day = is_all_day;
        }
        if let Some(person) = self.person {
            event.person = none_if_blank(person);
        }
        if let Some(description) = self.description {
            event.description = none_if_blank(description);
        }
        if let Some(timezone) = self.timezone {
            event.timezone = timezone;
        }
        if let Some(recurrence) = self.recurrence {
            // Editing the rule keeps occurrences that were already deleted
            let previous = event.recurrence.take().map(|r| r.exceptions);
            event.recurrence = recurrence.map(|mut rule| {
                if rule.exceptions.is_empty() {
                    rule.exceptions = previous.unwrap_or_default();
                }
                rule
            });
        }
        anchor_all_day(&mut event);
        event.is_partial_day = is_partial_day(&event);
        event
    }
}

fn none_if_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Move an all-day event's instants to noon UTC on the dates they fall
/// on in the event's own zone
fn anchor_all_day(event: &mut Event) {
    if !event.is_all_day {
        return;
    }
    let tz = resolve_timezone(event.timezone.as_deref());
    event.start_time = all_day_anchor(local_date(event.start_time, &tz));
    event.end_time = all_day_anchor(local_date(event.end_time, &tz));
}

/// A timed event that starts and ends on the same date in its own zone
pub fn is_partial_day(event: &Event) -> bool {
    if event.is_all_day {
        return false;
    }
    let tz = resolve_timezone(event.timezone.as_deref());
    local_date(event.start_time, &tz) == local_date(event.end_time, &tz)
}

pub fn add_event(events: &[Event], draft: EventDraft) -> Vec<Event> {
    let event = draft.into_event();
    tracing::debug!("Adding event {}", event.id);
    let mut updated = events.to_vec();
    updated.push(event);
    updated
}

/// Replace the base event `base_id` with the patched version
pub fn update_event(events: &[Event], base_id: &str, patch: EventPatch) -> Vec<Event> {
    if !events.iter().any(|e| e.id == base_id) {
        tracing::debug!("No event {} to update", base_id);
    }
    let mut patch = Some(patch);
    events
        .iter()
        .map(|event| match patch.take_if(|_| event.id == base_id) {
            Some(patch) => patch.apply(event.clone()),
            None => event.clone(),
        })
        .collect()
}

/// Remove the base event and with it every occurrence
pub fn delete_all_occurrences(events: &[Event], base_id: &str) -> Vec<Event> {
    events.iter().filter(|e| e.id != base_id).cloned().collect()
}

/// Suppress a single occurrence by recording it as an exception.
///
/// A one-off event has nothing to suppress so it is deleted outright.
pub fn delete_one_occurrence(events: &[Event], base_id: &str, occurrence: NaiveDate) -> Vec<Event> {
    let recurring = events
        .iter()
        .any(|e| e.id == base_id && e.recurrence.is_some());
    if !recurring {
        return delete_all_occurrences(events, base_id);
    }

    events
        .iter()
        .map(|event| {
            let mut event = event.clone();
            if event.id == base_id {
                if let Some(rule) = event.recurrence.as_mut() {
                    rule.exceptions.insert(occurrence);
                }
            }
            event
        })
        .collect()
}
