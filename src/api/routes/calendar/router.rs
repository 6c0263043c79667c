//! Router for the calendar API

use axum::{Router, extract::State, response::Json, routing::get};
use axum_extra::extract::Query;
use chrono::Utc;

use super::public;
use crate::api::state::SharedState;
use crate::calendar::{EventFilters, EventType, build_view};
use crate::core::tz::local_date;

async fn calendar_handler(
    State(state): State<SharedState>,
    Query(params): Query<public::CalendarQuery>,
) -> Json<public::CalendarResponse> {
    let shared_state = state.read().expect("Unable to read shared state");
    let tz = shared_state.tz(params.timezone.as_deref());
    let view = params.view.unwrap_or_default();
    let reference = params
        .date
        .unwrap_or_else(|| local_date(Utc::now(), &tz));

    let filters = EventFilters::new(params.hidden_type, params.hidden_subtype);
    let visible = filters.apply(&shared_state.events);
    tracing::debug!(
        "Rendering {:?} view of {} in {} ({} of {} events visible)",
        view,
        reference,
        tz,
        visible.len(),
        shared_state.events.len()
    );

    let calendar = build_view(&visible, view, reference, &tz);
    Json(public::CalendarResponse::from_view(&calendar, &tz))
}

async fn types_handler() -> Json<Vec<public::EventTypeResponse>> {
    let resp = EventType::ALL
        .iter()
        .map(|event_type| public::EventTypeResponse {
            event_type: *event_type,
            label: event_type.label().to_string(),
            supports_person: event_type.supports_person(),
            subtypes: event_type.subtypes().to_vec(),
        })
        .collect();
    Json(resp)
}

/// Create the calendar router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(calendar_handler))
        .route("/types", get(types_handler))
}
