use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ingest::IngestError;
use serde::Serialize;
use store::StoreError;

/// Result type alias for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced to API clients.
///
/// Every error is terminal for its request: invalid input and missing
/// configuration map to 400, storage and downstream failures to 500.
/// Bodies are always `{"message": "..."}`.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Configuration error: no forwarding endpoint configured in settings")]
    EndpointNotConfigured,

    #[error("External API error: {status} - {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("Forward request failed: {0}")]
    Forward(#[from] reqwest::Error),

    #[error("multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)
            | ApiError::EndpointNotConfigured
            | ApiError::Multipart(_) => StatusCode::BAD_REQUEST,
            // A sheet or column the caller named wrongly is their error;
            // a workbook we cannot read at all is ours.
            ApiError::Ingest(IngestError::SheetNotFound(_))
            | ApiError::Ingest(IngestError::InvalidColumnRef(_)) => StatusCode::BAD_REQUEST,
            ApiError::Ingest(IngestError::Workbook(_))
            | ApiError::UpstreamStatus { .. }
            | ApiError::Forward(_)
            | ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }
        let body = Json(ErrorBody {
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}
