use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use thiserror::Error;

/// Result alias for MongoDB operations.
pub type MongoResult<T> = std::result::Result<T, MongoDaoError>;

/// Server code reported when a write violates a unique index.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Failures raised by the MongoDB backend.
#[derive(Debug, Error)]
pub enum MongoDaoError {
    #[error("failed to parse MongoDB connection URI `{uri}`")]
    InvalidUri {
        uri: String,
        #[source]
        source: MongoError,
    },
    #[error("failed to build MongoDB client from options")]
    ClientConstruction {
        #[source]
        source: MongoError,
    },
    #[error("MongoDB ping failed during initial connection after {attempts} attempt(s)")]
    InitialPing {
        attempts: u32,
        #[source]
        source: MongoError,
    },
    #[error("MongoDB ping health check failed")]
    HealthPing {
        #[source]
        source: MongoError,
    },
    #[error("failed to ensure index `{index}` on collection `{collection}`")]
    EnsureIndex {
        collection: &'static str,
        index: &'static str,
        #[source]
        source: MongoError,
    },
    #[error("failed to save group `{code}`")]
    SaveGroup {
        code: i64,
        #[source]
        source: MongoError,
    },
    #[error("failed to save match `{code}`")]
    SaveMatch {
        code: i64,
        #[source]
        source: MongoError,
    },
    #[error("failed to load match `{code}`")]
    LoadMatch {
        code: i64,
        #[source]
        source: MongoError,
    },
    #[error("failed to update match `{code}`")]
    UpdateMatch {
        code: i64,
        #[source]
        source: MongoError,
    },
    #[error("failed to save point for player `{player}`")]
    SavePoint {
        player: String,
        #[source]
        source: MongoError,
    },
    #[error("failed to list points")]
    ListPoints {
        #[source]
        source: MongoError,
    },
}

/// Whether the driver error is a unique index violation.
pub fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY_CODE
    )
}
