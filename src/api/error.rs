//! API error types with JSON `detail` responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

use crate::schema::ValidationErrors;
use crate::store::StoreError;

/// One entry of a 422 response body
#[derive(Debug, Serialize)]
pub struct FieldErrorDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// API-level errors with HTTP status mapping
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request validation failed")]
    Validation(ValidationErrors),
    #[error("{message}")]
    MalformedBody { status: StatusCode, message: String },
    #[error("{0}")]
    Store(#[from] StoreError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let detail: Vec<FieldErrorDetail> = errors
                    .into_iter()
                    .map(|e| FieldErrorDetail {
                        loc: vec!["body".to_string(), e.field],
                        msg: e.message,
                        kind: "value_error",
                    })
                    .collect();
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": detail })),
                )
                    .into_response()
            }
            ApiError::MalformedBody { status, message } => {
                (status, Json(json!({ "detail": message }))).into_response()
            }
            ApiError::Store(err) => {
                tracing::error!(error = %err, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": err.to_string() })),
                )
                    .into_response()
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<crate::error::Error> for ApiError {
    fn from(err: crate::error::Error) -> Self {
        match err {
            crate::error::Error::Store(e) => ApiError::Store(e),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
