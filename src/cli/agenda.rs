use anyhow::Result;
use chrono::{NaiveDate, Utc};

use crate::api::public::calendar::CalendarResponse;
use crate::calendar::{ViewMode, build_view};
use crate::core::AppConfig;
use crate::core::fixtures::load_seed_events;
use crate::core::tz::{local_date, resolve_timezone};

pub fn run(
    view: ViewMode,
    date: Option<NaiveDate>,
    events_path: Option<String>,
    timezone: Option<String>,
) -> Result<()> {
    let config = AppConfig::default();
    let tz = match timezone {
        Some(name) => resolve_timezone(Some(&name)),
        None => config.tz(),
    };
    let events = load_seed_events(events_path.or(config.events_path).as_deref())?;
    let reference = date.unwrap_or_else(|| local_date(Utc::now(), &tz));

    let calendar = build_view(&events, view, reference, &tz);
    let resp = CalendarResponse::from_view(&calendar, &tz);
    println!("{}", serde_json::to_string_pretty(&resp)?);

    Ok(())
}
