//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use tracing::warn;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Request-level failure, converted to a status code and JSON body
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Server not found")]
    ServerNotFound,

    #[error("Missing parameters")]
    MissingParameters,

    #[error("Log file not found")]
    LogNotFound,

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ServerNotFound | ApiError::LogNotFound => StatusCode::NOT_FOUND,
            ApiError::MissingParameters => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<logscope_core::Error> for ApiError {
    fn from(err: logscope_core::Error) -> Self {
        match err {
            logscope_core::Error::ServerNotFound(_) => ApiError::ServerNotFound,
            logscope_core::Error::LogNotFound { .. } => ApiError::LogNotFound,
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("Worker task failed: {}", err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Internal(message) = &self {
            warn!("Request failed: {}", message);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::ServerNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::LogNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::MissingParameters.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Internal("disk".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_from_core_error() {
        let err: ApiError = logscope_core::Error::ServerNotFound("vm9".into()).into();
        assert!(matches!(err, ApiError::ServerNotFound));
        assert_eq!(err.to_string(), "Server not found");

        let err: ApiError = logscope_core::Error::log_not_found("vm1", "2024-06-01").into();
        assert_eq!(err.to_string(), "Log file not found");

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: ApiError = logscope_core::Error::from(io).into();
        assert!(matches!(err, ApiError::Internal(ref m) if m.contains("denied")));
    }
}
