//! Public types for the calendar API
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::calendar::{
    CalendarView, DayAgenda, EventInstance, EventSubtype, EventType, LayoutInstance, ViewMode,
    is_multi_day,
};
use crate::core::tz::format_in_timezone;

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub view: Option<ViewMode>,
    /// Reference date, defaults to today in the requested zone
    pub date: Option<NaiveDate>,
    pub timezone: Option<String>,
    #[serde(default)]
    pub hidden_type: Vec<EventType>,
    #[serde(default)]
    pub hidden_subtype: Vec<EventSubtype>,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceResponse {
    pub id: String,
    pub base_id: String,
    pub occurrence_date: Option<NaiveDate>,
    pub title: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub subtype: Option<EventSubtype>,
    pub person: Option<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_all_day: bool,
    pub is_partial_day: bool,
    pub is_multi_day: bool,
    /// "09:00 - 09:15" in the viewer's zone, None for all-day events
    pub time_label: Option<String>,
    pub column: Option<usize>,
    pub column_count: Option<usize>,
}

impl InstanceResponse {
    fn from_instance(instance: &EventInstance<'_>, tz: &Tz) -> Self {
        let event = instance.event;
        let time_label = (!instance.is_all_day()).then(|| {
            format!(
                "{} - {}",
                format_in_timezone(instance.start_time, tz, "%H:%M"),
                format_in_timezone(instance.end_time, tz, "%H:%M")
            )
        });

        Self {
            id: instance.id.to_string(),
            base_id: instance.id.base_id.clone(),
            occurrence_date: instance.id.occurrence,
            title: event.title.clone(),
            event_type: event.event_type,
            subtype: event.subtype,
            person: event.person.clone(),
            start_time: instance.start_time,
            end_time: instance.end_time,
            is_all_day: event.is_all_day,
            is_partial_day: event.is_partial_day,
            is_multi_day: is_multi_day(instance, tz),
            time_label,
            column: None,
            column_count: None,
        }
    }

    fn from_layout(placed: &LayoutInstance<'_>, tz: &Tz) -> Self {
        Self {
            column: Some(placed.column),
            column_count: Some(placed.column_count),
            ..Self::from_instance(&placed.instance, tz)
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResponse {
    pub date: NaiveDate,
    pub all_day: Vec<InstanceResponse>,
    pub timed: Vec<InstanceResponse>,
}

impl DayResponse {
    fn from_day(day: &DayAgenda<'_>, tz: &Tz) -> Self {
        Self {
            date: day.date,
            all_day: day
                .all_day
                .iter()
                .map(|i| InstanceResponse::from_instance(i, tz))
                .collect(),
            timed: day
                .timed
                .iter()
                .map(|i| InstanceResponse::from_layout(i, tz))
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarResponse {
    pub view: ViewMode,
    pub date: NaiveDate,
    pub timezone: String,
    pub range_start: DateTime<Utc>,
    pub range_end: DateTime<Utc>,
    pub previous: NaiveDate,
    pub next: NaiveDate,
    pub days: Vec<DayResponse>,
}

impl CalendarResponse {
    pub fn from_view(view: &CalendarView<'_>, tz: &Tz) -> Self {
        Self {
            view: view.view,
            date: view.reference,
            timezone: tz.name().to_string(),
            range_start: view.range_start,
            range_end: view.range_end,
            previous: view.previous,
            next: view.next,
            days: view
                .days
                .iter()
                .map(|day| DayResponse::from_day(day, tz))
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeResponse {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub label: String,
    pub supports_person: bool,
    pub subtypes: Vec<EventSubtype>,
}
