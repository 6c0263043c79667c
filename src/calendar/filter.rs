//! Visibility filters for event types and subtypes.
//!
//! The host owns an `EventFilters` value and passes it in. Toggling
//! returns the new value.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::models::{Event, EventSubtype, EventType};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFilters {
    #[serde(default)]
    pub hidden_types: BTreeSet<EventType>,
    #[serde(default)]
    pub hidden_subtypes: BTreeSet<EventSubtype>,
}

impl EventFilters {
    pub fn new(
        hidden_types: impl IntoIterator<Item = EventType>,
        hidden_subtypes: impl IntoIterator<Item = EventSubtype>,
    ) -> Self {
        Self {
            hidden_types: hidden_types.into_iter().collect(),
            hidden_subtypes: hidden_subtypes.into_iter().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hidden_types.is_empty() && self.hidden_subtypes.is_empty()
    }

    /// Show or hide a type along with all of its subtypes
    pub fn toggle_type(&self, event_type: EventType) -> Self {
        let mut next = self.clone();
        let showing = next.hidden_types.remove(&event_type);
        if !showing {
            next.hidden_types.insert(event_type);
        }
        for subtype in event_type.subtypes() {
            if showing {
                next.hidden_subtypes.remove(subtype);
            } else {
                next.hidden_subtypes.insert(*subtype);
            }
        }
        next
    }

    /// Show or hide one subtype.
    ///
    /// Showing a subtype also shows its parent. Hiding the last visible
    /// subtype hides the parent too.
    pub fn toggle_subtype(&self, subtype: EventSubtype) -> Self {
        let mut next = self.clone();
        let parent = subtype.parent();
        if next.hidden_subtypes.remove(&subtype) {
            next.hidden_types.remove(&parent);
        } else {
            next.hidden_subtypes.insert(subtype);
            if parent
                .subtypes()
                .iter()
                .all(|s| next.hidden_subtypes.contains(s))
            {
                next.hidden_types.insert(parent);
            }
        }
        next
    }

    pub fn is_visible(&self, event: &Event) -> bool {
        if self.hidden_types.contains(&event.event_type) {
            return false;
        }
        match event.subtype {
            Some(subtype) => !self.hidden_subtypes.contains(&subtype),
            None => true,
        }
    }

    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events
            .iter()
            .filter(|event| self.is_visible(event))
            .cloned()
            .collect()
    }
}
