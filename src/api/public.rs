//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

// Errors

pub struct ApiError {
    status: StatusCode,
    error: anyhow::Error,
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self {
            status: StatusCode::NOT_FOUND,
            error: anyhow::anyhow!(message),
        }
    }

    /// The request was understood but the resulting event is invalid
    pub fn unprocessable(error: anyhow::Error) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            error,
        }
    }
}

/// Convert `ApiError` into an Axum compatible response.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!("{}", self.error);
        } else {
            tracing::debug!("{}: {}", self.status, self.error);
        }

        let message = if self.status.is_server_error() {
            format!("Something went wrong: {}", self.error)
        } else {
            self.error.to_string()
        };
        (self.status, message).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: err.into(),
        }
    }
}

// Re-export public types from each route

pub mod calendar {
    pub use crate::api::routes::calendar::public::*;
}

pub mod events {
    pub use crate::api::routes::events::public::*;
}
