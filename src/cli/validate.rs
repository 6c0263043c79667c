use anyhow::{Result, bail};
use serde_json::json;

use crate::calendar::validate_event;
use crate::core::fixtures::load_events;

pub fn run(path: &str) -> Result<()> {
    let events = load_events(path)?;

    let problems: Vec<_> = events
        .iter()
        .filter_map(|event| {
            validate_event(event)
                .err()
                .map(|err| json!({"id": event.id, "error": err.to_string()}))
        })
        .collect();

    println!(
        "{}",
        serde_json::to_string_pretty(&json!({
            "checked": events.len(),
            "invalid": problems,
        }))?
    );

    if !problems.is_empty() {
        bail!("{} of {} events are invalid", problems.len(), events.len());
    }
    Ok(())
}
