//! Router for the events API
//!
//! Handlers call the pure calendar operations and swap the result in as
//! the new collection.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_extra::extract::Query;
use http::StatusCode;

use super::public;
use crate::api::public::ApiError;
use crate::api::state::SharedState;
use crate::calendar::{
    Event, EventDraft, EventPatch, add_event, delete_all_occurrences, delete_one_occurrence,
    time_off_overlaps, update_event, validate_event,
};

async fn list_events(State(state): State<SharedState>) -> Json<Vec<Event>> {
    let events = state
        .read()
        .expect("Unable to read shared state")
        .events
        .clone();
    Json(events)
}

async fn create_event(
    State(state): State<SharedState>,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<Event>), ApiError> {
    let mut shared_state = state.write().expect("Unable to write shared state");

    let updated = add_event(&shared_state.events, draft);
    let Some(created) = updated.last().cloned() else {
        return Err(anyhow::anyhow!("Event was not added").into());
    };
    validate_event(&created).map_err(ApiError::unprocessable)?;

    tracing::info!("Created event {} ({})", created.id, created.title);
    shared_state.events = updated;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn edit_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Json(patch): Json<EventPatch>,
) -> Result<Json<Event>, ApiError> {
    let mut shared_state = state.write().expect("Unable to write shared state");
    if !shared_state.events.iter().any(|e| e.id == id) {
        return Err(ApiError::not_found(format!("No event with id {}", id)));
    }

    let updated = update_event(&shared_state.events, &id, patch);
    let Some(edited) = updated.iter().find(|e| e.id == id).cloned() else {
        return Err(ApiError::not_found(format!("No event with id {}", id)));
    };
    validate_event(&edited).map_err(ApiError::unprocessable)?;

    tracing::info!("Updated event {}", id);
    shared_state.events = updated;
    Ok(Json(edited))
}

async fn remove_event(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    Query(params): Query<public::DeleteEventParams>,
) -> Result<Json<public::DeleteEventResponse>, ApiError> {
    let mut shared_state = state.write().expect("Unable to write shared state");
    if !shared_state.events.iter().any(|e| e.id == id) {
        return Err(ApiError::not_found(format!("No event with id {}", id)));
    }

    let updated = match params.occurrence {
        Some(occurrence) => {
            tracing::info!("Deleting occurrence {} of event {}", occurrence, id);
            delete_one_occurrence(&shared_state.events, &id, occurrence)
        }
        None => {
            tracing::info!("Deleting event {}", id);
            delete_all_occurrences(&shared_state.events, &id)
        }
    };
    shared_state.events = updated;

    Ok(Json(public::DeleteEventResponse {
        success: true,
        remaining: shared_state.events.len(),
    }))
}

async fn time_off(
    State(state): State<SharedState>,
    Query(params): Query<public::TimeOffQuery>,
) -> Json<public::TimeOffResponse> {
    let shared_state = state.read().expect("Unable to read shared state");
    let tz = shared_state.tz(params.timezone.as_deref());
    let people = time_off_overlaps(&shared_state.events, params.start, params.end, &tz);
    Json(public::TimeOffResponse { people })
}

/// Create the events router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/time-off", get(time_off))
        .route("/{id}", axum::routing::put(edit_event).delete(remove_event))
}
