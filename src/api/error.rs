//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::pipeline::processor::PipelineError;

/// Error response body. The 400 for missing text is exactly
/// `{"error": "No text provided"}`; model failures add a `kind` naming the
/// failed stage.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No text provided")]
    NoText,

    #[error("{detail}")]
    Stage { kind: &'static str, detail: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::NoText => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error: "No text provided".to_string(),
                    kind: None,
                },
            ),
            ApiError::Stage { kind, detail } => {
                tracing::error!(stage = kind, detail, "pipeline stage failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: detail,
                        kind: Some(kind),
                    },
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "An internal error occurred".to_string(),
                        kind: Some("internal"),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::EmptyText => ApiError::NoText,
            other => ApiError::Stage {
                kind: other.stage(),
                detail: other.to_string(),
            },
        }
    }
}
