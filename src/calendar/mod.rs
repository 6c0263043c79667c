//! Recurrence expansion and time grid layout for work events.
//!
//! Everything in here is a pure function of its inputs. The host owns the
//! base event collection and replaces it with the output of the mutation
//! operations.

pub mod agenda;
pub mod bucket;
pub mod expand;
pub mod filter;
pub mod layout;
pub mod models;
pub mod mutation;
pub mod range;
pub mod validate;

pub use agenda::{CalendarView, DayAgenda, build_view};
pub use bucket::{events_for_day, is_multi_day, partition_all_day};
pub use expand::expand;
pub use filter::EventFilters;
pub use layout::layout;
pub use models::*;
pub use mutation::{
    EventDraft, EventPatch, add_event, delete_all_occurrences, delete_one_occurrence,
    update_event,
};
pub use range::{Direction, day_bounds, month_view_days, navigate, view_range, week_view_days};
pub use validate::{time_off_overlaps, validate_event};
