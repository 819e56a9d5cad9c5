use axum::http;
use axum::response::{IntoResponse, Response};
use axum::{Json, http::StatusCode};
use common::ErrorCode as _;
use serde_json::json;
use thiserror::Error;

use crate::utils::code_to_http_status;

/// Error for api endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] auth::error::Error),

    #[error(transparent)]
    User(#[from] user::error::Error),

    #[error(transparent)]
    Cart(#[from] cart::error::Error),

    #[error("failed to serialize response: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("parsing body")]
    ParsingBody(#[from] http::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            Self::Auth(e) => (code_to_http_status(e.code()), e.to_string()),
            Self::User(e) => (code_to_http_status(e.code()), e.to_string()),
            Self::Cart(e) => (code_to_http_status(e.code()), e.to_string()),
            internal => (StatusCode::INTERNAL_SERVER_ERROR, internal.to_string()),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}
