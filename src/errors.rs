use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::indexer::IndexerError;
use crate::models::UnsupportedChain;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    UnsupportedChain(String),

    /// The indexer could not be reached or rejected the request.
    #[error("{0}")]
    Gateway(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::UnsupportedChain(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Gateway(msg) => {
                tracing::warn!("Gateway error: {msg}");
                (StatusCode::BAD_GATEWAY, msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".into())
            }
        };

        (
            status,
            Json(ErrorBody {
                success: false,
                error: message,
            }),
        )
            .into_response()
    }
}

impl From<UnsupportedChain> for AppError {
    fn from(e: UnsupportedChain) -> Self {
        AppError::UnsupportedChain(e.to_string())
    }
}

impl From<IndexerError> for AppError {
    fn from(e: IndexerError) -> Self {
        match e {
            IndexerError::UnsupportedChain(inner) => inner.into(),
            other => AppError::Gateway(other.to_string()),
        }
    }
}
