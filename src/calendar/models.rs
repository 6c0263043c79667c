use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Meeting,
    Deadline,
    CompanyEvent,
    TimeOff,
    Birthday,
    WorkAnniversary,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Meeting,
        EventType::Deadline,
        EventType::CompanyEvent,
        EventType::TimeOff,
        EventType::Birthday,
        EventType::WorkAnniversary,
    ];

    /// Human readable label, e.g. "Company Event"
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Meeting => "Meeting",
            EventType::Deadline => "Deadline",
            EventType::CompanyEvent => "Company Event",
            EventType::TimeOff => "Time Off",
            EventType::Birthday => "Birthday",
            EventType::WorkAnniversary => "Work Anniversary",
        }
    }

    /// Only events about a specific person carry the `person` field
    pub fn supports_person(&self) -> bool {
        matches!(
            self,
            EventType::TimeOff | EventType::Birthday | EventType::WorkAnniversary
        )
    }

    pub fn subtypes(&self) -> &'static [EventSubtype] {
        match self {
            EventType::Meeting => &[
                EventSubtype::DailyStandup,
                EventSubtype::SprintPlanning,
                EventSubtype::OneOnOne,
                EventSubtype::Review,
            ],
            EventType::Deadline => &[
                EventSubtype::ProductLaunch,
                EventSubtype::Milestone,
                EventSubtype::Deliverable,
            ],
            EventType::CompanyEvent => &[
                EventSubtype::AllHands,
                EventSubtype::Planning,
                EventSubtype::Social,
            ],
            _ => &[],
        }
    }

    pub fn has_subtypes(&self) -> bool {
        !self.subtypes().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventSubtype {
    // Meetings
    DailyStandup,
    SprintPlanning,
    OneOnOne,
    Review,
    // Deadlines
    ProductLaunch,
    Milestone,
    Deliverable,
    // Company events
    AllHands,
    Planning,
    Social,
}

impl EventSubtype {
    pub fn parent(&self) -> EventType {
        match self {
            EventSubtype::DailyStandup
            | EventSubtype::SprintPlanning
            | EventSubtype::OneOnOne
            | EventSubtype::Review => EventType::Meeting,
            EventSubtype::ProductLaunch | EventSubtype::Milestone | EventSubtype::Deliverable => {
                EventType::Deadline
            }
            EventSubtype::AllHands | EventSubtype::Planning | EventSubtype::Social => {
                EventType::CompanyEvent
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recurrence {
    pub frequency: Frequency,
    /// Weekday indices, 0 = Sunday through 6 = Saturday
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<BTreeSet<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub exceptions: BTreeSet<NaiveDate>,
}

impl Recurrence {
    pub fn new(frequency: Frequency) -> Self {
        Self {
            frequency,
            days_of_week: None,
            end_date: None,
            exceptions: BTreeSet::new(),
        }
    }

    pub fn on_days(mut self, days: impl IntoIterator<Item = u8>) -> Self {
        self.days_of_week = Some(days.into_iter().collect());
        self
    }

    pub fn until(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn except(mut self, date: NaiveDate) -> Self {
        self.exceptions.insert(date);
        self
    }
}

/// Base event definition as owned by the host's collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<EventSubtype>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(default)]
    pub is_all_day: bool,
    #[serde(default)]
    pub is_partial_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// IANA zone the event was created in, display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<Recurrence>,
}

impl Event {
    pub fn new(
        id: &str,
        title: &str,
        event_type: EventType,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            event_type,
            subtype: None,
            start_time,
            end_time,
            is_all_day: false,
            is_partial_day: false,
            person: None,
            description: None,
            timezone: None,
            recurrence: None,
        }
    }

    pub fn is_recurring(&self) -> bool {
        self.recurrence.is_some()
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}

/// Identity of an expanded instance.
///
/// Kept as a structured pair so the base event can always be recovered
/// without parsing the rendered string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId {
    pub base_id: String,
    pub occurrence: Option<NaiveDate>,
}

impl InstanceId {
    pub fn base(base_id: &str) -> Self {
        Self {
            base_id: base_id.to_string(),
            occurrence: None,
        }
    }

    pub fn occurrence(base_id: &str, date: NaiveDate) -> Self {
        Self {
            base_id: base_id.to_string(),
            occurrence: Some(date),
        }
    }

    pub fn is_occurrence(&self) -> bool {
        self.occurrence.is_some()
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occurrence {
            Some(date) => write!(f, "{}-{}", self.base_id, date.format("%Y-%m-%d")),
            None => write!(f, "{}", self.base_id),
        }
    }
}

impl Serialize for InstanceId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A concrete, date-bound occurrence of a base event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventInstance<'a> {
    pub id: InstanceId,
    pub event: &'a Event,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl<'a> EventInstance<'a> {
    /// A one-off event is its own single instance
    pub fn single(event: &'a Event) -> Self {
        Self {
            id: InstanceId::base(&event.id),
            event,
            start_time: event.start_time,
            end_time: event.end_time,
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.event.is_all_day
    }

    /// Strict interval overlap, touching endpoints do not overlap
    pub fn overlaps(&self, other: &EventInstance<'_>) -> bool {
        self.start_time < other.end_time && self.end_time > other.start_time
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutInstance<'a> {
    pub instance: EventInstance<'a>,
    pub column: usize,
    pub column_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
}
