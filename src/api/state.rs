use std::sync::{Arc, RwLock};

use chrono_tz::Tz;

use crate::calendar::Event;
use crate::core::AppConfig;

pub type SharedState = Arc<RwLock<AppState>>;

pub struct AppState {
    // The base event collection, replaced wholesale on every change
    pub events: Vec<Event>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(events: Vec<Event>, config: AppConfig) -> Self {
        Self { events, config }
    }

    /// Zone named by a request, or the configured default
    pub fn tz(&self, requested: Option<&str>) -> Tz {
        match requested {
            Some(name) => crate::core::tz::resolve_timezone(Some(name)),
            None => self.config.tz(),
        }
    }
}
