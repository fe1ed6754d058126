//! Maps service outcomes and `AppError`s to HTTP responses.
//!
//! Business failures arrive as outcomes and keep their messages; failure
//! categories map onto status codes (not-found 404, conflict 409,
//! validation 400). Infrastructure faults surface as a generic 500 with
//! the detail logged, never leaked.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use watchbox_core::error::{AppError, ErrorKind};
use watchbox_core::outcome::{FailureKind, Outcome};

/// Error returned from handlers and extractors.
#[derive(Debug)]
pub enum ApiError {
    /// An application error from the service or persistence layers.
    App(AppError),
    /// A request-shape validation failure caught at the boundary.
    Validation {
        /// Summary message.
        message: String,
        /// Per-field error strings.
        errors: Vec<String>,
    },
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self::App(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation { message, errors } => (
                StatusCode::BAD_REQUEST,
                Json(Outcome::<()>::validation(message, errors)),
            )
                .into_response(),
            Self::App(err) => match err.kind {
                ErrorKind::NotFound => (
                    StatusCode::NOT_FOUND,
                    Json(Outcome::<()>::not_found(err.message)),
                )
                    .into_response(),
                ErrorKind::Conflict => (
                    StatusCode::CONFLICT,
                    Json(Outcome::<()>::conflict(err.message)),
                )
                    .into_response(),
                ErrorKind::Validation => (
                    StatusCode::BAD_REQUEST,
                    Json(Outcome::<()>::validation(err.message, Vec::new())),
                )
                    .into_response(),
                _ => {
                    tracing::error!(error = %err, "Internal server error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(serde_json::json!({
                            "isSuccess": false,
                            "message": "An unexpected error occurred",
                        })),
                    )
                        .into_response()
                }
            },
        }
    }
}

/// Wraps a service outcome so it can be returned from a handler with the
/// status code its failure category implies.
#[derive(Debug)]
pub struct ApiOutcome<T>(pub Outcome<T>);

impl<T: Serialize> IntoResponse for ApiOutcome<T> {
    fn into_response(self) -> Response {
        let status = if self.0.is_success {
            StatusCode::OK
        } else {
            match self.0.failure_kind() {
                Some(FailureKind::NotFound) => StatusCode::NOT_FOUND,
                Some(FailureKind::Conflict) => StatusCode::CONFLICT,
                _ => StatusCode::BAD_REQUEST,
            }
        };

        (status, Json(self.0)).into_response()
    }
}
