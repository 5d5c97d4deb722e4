//! Public API types

use axum::response::{IntoResponse, Response};
use http::StatusCode;

use crate::availability::DatesError;

// Errors

/// Convert `DatesError` into an Axum compatible response. The body is
/// always the fixed message for the failed step.
impl IntoResponse for DatesError {
    fn into_response(self) -> Response {
        // Always log the underlying cause
        match &self {
            DatesError::UserInfo(err) | DatesError::EventType(err) => {
                tracing::error!("{} {:#}", self, err);
            }
        }

        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
