//! Error responses for the HTTP boundary.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use shortcut_common::ExecuteResponse;

use crate::domain::ShortcutError;

/// A failed request, rendered as `{ success: false, error }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast_ref::<ShortcutError>() {
            Some(ShortcutError::NotFound(_)) => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            _ => {
                tracing::error!(error = %format!("{err:#}"), "request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: format!("{err:#}"),
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ExecuteResponse {
            success: false,
            error: Some(self.message),
            ..ExecuteResponse::default()
        };
        (self.status, Json(body)).into_response()
    }
}
