use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of the underlying database.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend failed or could not be reached.
    #[error("storage unavailable: {message}")]
    Unavailable {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
    /// No storage backend is installed (degraded mode).
    #[error("storage unavailable (degraded mode)")]
    Degraded,
    /// The targeted match does not exist.
    #[error("match `{code}` not found")]
    MatchNotFound { code: i64 },
    /// The match exists but is not played between the submitted teams.
    #[error("match `{code}` is not played between `{team_a}` and `{team_b}`")]
    TeamsMismatch {
        code: i64,
        team_a: String,
        team_b: String,
    },
    /// A record with the same unique code already exists.
    #[error("{collection} `{code}` already exists")]
    DuplicateCode {
        collection: &'static str,
        code: i64,
    },
}

impl StorageError {
    /// Construct an unavailable error from any backend failure.
    pub fn unavailable(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Unavailable {
            message,
            source: Box::new(source),
        }
    }
}
