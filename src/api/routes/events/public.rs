//! Public types for the events API
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct DeleteEventParams {
    /// Only remove the occurrence on this date instead of the series
    pub occurrence: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteEventResponse {
    pub success: bool,
    pub remaining: usize,
}

#[derive(Deserialize)]
pub struct TimeOffQuery {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct TimeOffResponse {
    pub people: Vec<String>,
}
