use std::env;

use chrono_tz::Tz;

use super::tz::resolve_timezone;

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// IANA zone used for day boundaries when a request doesn't name one
    pub timezone: String,
    /// JSON file with the initial event collection
    pub events_path: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let timezone = env::var("WORKCAL_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let events_path = env::var("WORKCAL_EVENTS_PATH")
            .ok()
            .filter(|path| !path.trim().is_empty());

        Self {
            timezone,
            events_path,
        }
    }
}

impl AppConfig {
    pub fn tz(&self) -> Tz {
        resolve_timezone(Some(&self.timezone))
    }
}
