use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::dao::storage::StorageError;

/// Errors that can occur in service layer operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required request field is absent.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),
    /// Invalid input provided by the client.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Declared winner disagrees with the submitted scores.
    #[error("invalid score/winner combination for match `{code}`")]
    InconsistentResult { code: i64 },
    /// Requested resource was not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Operation conflicts with an existing record.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Storage backend failed to complete the operation.
    #[error("storage failure")]
    Storage(#[source] StorageError),
    /// Application is running in degraded mode without storage.
    #[error("storage unavailable (degraded mode)")]
    Degraded,
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Degraded => ServiceError::Degraded,
            StorageError::DuplicateCode { collection, code } => {
                ServiceError::Conflict(format!("{collection} `{code}` already exists"))
            }
            other => ServiceError::Storage(other),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(err: ValidationErrors) -> Self {
        ServiceError::InvalidInput(format!("validation failed: {err}"))
    }
}

/// Application-level errors that are converted to HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request with invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Requested resource not found.
    #[error("not found: {0}")]
    NotFound(String),
    /// Conflict with current state.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Service unavailable or degraded.
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    /// Internal server error. Never carries the underlying cause.
    #[error("internal server error")]
    Internal,
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::MissingParameter(field) => {
                AppError::BadRequest(format!("missing parameter: {field}"))
            }
            ServiceError::InvalidInput(message) => AppError::BadRequest(message),
            ServiceError::InconsistentResult { .. } => {
                AppError::BadRequest("invalid score/winner combination".into())
            }
            ServiceError::NotFound(message) => AppError::NotFound(message),
            ServiceError::Conflict(message) => AppError::Conflict(message),
            ServiceError::Storage(source) => {
                error!(error = %source, "storage failure");
                AppError::Internal
            }
            ServiceError::Degraded => AppError::ServiceUnavailable("degraded mode".into()),
        }
    }
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human readable description.
    pub message: String,
}

impl AppError {
    /// HTTP status matching the error category.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Serializable body for the error.
    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            message: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_failures_do_not_leak_their_cause() {
        let err: AppError = ServiceError::from(StorageError::MatchNotFound { code: 12 }).into();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().message, "internal server error");
    }

    #[test]
    fn duplicate_codes_become_conflicts() {
        let err: ServiceError = StorageError::DuplicateCode {
            collection: "match",
            code: 3,
        }
        .into();

        let app: AppError = err.into();
        assert_eq!(app.status_code(), StatusCode::CONFLICT);
        assert_eq!(app.body().message, "conflict: match `3` already exists");
    }

    #[test]
    fn missing_parameter_names_the_field() {
        let app: AppError = ServiceError::MissingParameter("winner").into();

        assert_eq!(app.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(app.body().message, "bad request: missing parameter: winner");
    }
}
