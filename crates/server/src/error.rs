use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Errors a route handler can return.
///
/// Every variant renders as `{ "error": "<message>" }`. Store failures only
/// expose the failed action to the client; the cause is logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Failed to {action}")]
    Store {
        action: &'static str,
        #[source]
        source: sqlx::Error,
    },
    /// A create/update body that could not be read as the entity's JSON shape.
    /// Reported like a store failure for the same action.
    #[error("Failed to {action}")]
    Payload {
        action: &'static str,
        #[source]
        source: JsonRejection,
    },
}

impl ApiError {
    /// Adapter for `map_err`: tags a store failure with the action that failed.
    pub fn store(action: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |source| ApiError::Store { action, source }
    }

    /// Adapter for `map_err` on a rejected `Json` body.
    pub fn payload(action: &'static str) -> impl FnOnce(JsonRejection) -> ApiError {
        move |source| ApiError::Payload { action, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Store { .. } | ApiError::Payload { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store { action, source } => {
                tracing::error!(error = %source, "Failed to {}", action);
            }
            ApiError::Payload { action, source } => {
                tracing::warn!(error = %source, "Rejected body, failed to {}", action);
            }
            _ => {}
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (self.status(), ResponseJson(body)).into_response()
    }
}
