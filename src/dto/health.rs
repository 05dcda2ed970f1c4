use serde::Serialize;
use utoipa::ToSchema;

/// Payload of the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// "ok" when storage answers, "degraded" otherwise.
    pub status: &'static str,
    /// Whether result updates can currently be persisted.
    pub storage_available: bool,
}

impl HealthResponse {
    /// Storage is installed and answering.
    pub fn ok() -> Self {
        Self {
            status: "ok",
            storage_available: true,
        }
    }

    /// No usable storage backend.
    pub fn degraded() -> Self {
        Self {
            status: "degraded",
            storage_available: false,
        }
    }
}
