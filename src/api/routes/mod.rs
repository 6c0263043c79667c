//! API routes module

pub mod calendar;
pub mod events;

use axum::Router;

use crate::api::state::SharedState;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Base event collection routes
        .nest("/events", events::router())
        // Expanded calendar view routes
        .nest("/calendar", calendar::router())
}
