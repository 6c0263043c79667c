//! Loading an event collection from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::calendar::Event;

pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<Event>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read events from {}", path.display()))?;
    let events: Vec<Event> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse events in {}", path.display()))?;
    tracing::debug!("Loaded {} events from {}", events.len(), path.display());
    Ok(events)
}

/// Load from `path` if one is configured, otherwise start empty
pub fn load_seed_events(path: Option<&str>) -> Result<Vec<Event>> {
    match path {
        Some(path) => load_events(path),
        None => Ok(Vec::new()),
    }
}
