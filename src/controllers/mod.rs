//! Transport-agnostic controllers. Each one turns a [`HttpRequest`] envelope into a
//! [`HttpResponse`] envelope; the axum routes only adapt requests in and responses out.

use std::sync::Arc;

use axum::{Json, http::StatusCode, response::IntoResponse};
use futures::future::BoxFuture;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::error;
use validator::Validate;

use crate::{
    dto::validation::{FieldChain, decode},
    error::{AppError, ServiceError},
    services::{
        group_service::GroupService, match_service::MatchService, point_service::PointService,
        scoring::ScoreConsistencyRule,
    },
};

/// Controllers registering groups, matches and player points.
pub mod registration;
/// The match result update pipeline.
pub mod update_match;

pub use registration::{AddGroupController, AddMatchController, AddPointController};
pub use update_match::UpdateMatchController;

/// Incoming request envelope.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    /// Raw JSON body, decoded lazily by each controller.
    pub body: Value,
}

impl From<Value> for HttpRequest {
    fn from(body: Value) -> Self {
        Self { body }
    }
}

/// Outgoing response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    /// HTTP status to answer with.
    pub status_code: StatusCode,
    /// JSON body to answer with.
    pub body: Value,
}

impl HttpResponse {
    /// 200 with `body` serialized as JSON.
    pub fn ok(body: &impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self {
                status_code: StatusCode::OK,
                body,
            },
            Err(err) => {
                error!(error = %err, "failed to serialize response body");
                Self::server_error()
            }
        }
    }

    /// Generic 500 that never exposes the underlying failure.
    pub fn server_error() -> Self {
        Self::from(AppError::Internal)
    }
}

impl From<AppError> for HttpResponse {
    fn from(err: AppError) -> Self {
        let status_code = err.status_code();
        let body = serde_json::json!({ "message": err.body().message });
        Self { status_code, body }
    }
}

impl From<ServiceError> for HttpResponse {
    fn from(err: ServiceError) -> Self {
        AppError::from(err).into()
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> axum::response::Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Handles one kind of request end to end.
pub trait Controller: Send + Sync {
    /// Answer `request`. Failures are folded into the returned envelope, never panicked.
    fn handle(&self, request: HttpRequest) -> BoxFuture<'_, HttpResponse>;
}

/// Run `fields` over the raw body, then decode and validate it as `T`.
pub fn parse_body<T>(fields: &FieldChain, body: Value) -> Result<T, ServiceError>
where
    T: DeserializeOwned + Validate,
{
    fields.check(&body)?;
    decode(body)
}

/// Every command controller, composed once at startup.
pub struct Controllers {
    /// `PUT /matches`.
    pub update_match: UpdateMatchController,
    /// `POST /matches`.
    pub add_match: AddMatchController,
    /// `POST /groups`.
    pub add_group: AddGroupController,
    /// `POST /points`.
    pub add_point: AddPointController,
}

impl Controllers {
    /// Wire every controller to its use case. The update pipeline shares `rule` with match
    /// registration.
    pub fn new(
        matches: Arc<MatchService>,
        groups: Arc<GroupService>,
        points: Arc<PointService>,
        rule: Arc<dyn ScoreConsistencyRule>,
    ) -> Self {
        Self {
            update_match: UpdateMatchController::new(matches.clone(), rule),
            add_match: AddMatchController::new(matches),
            add_group: AddGroupController::new(groups),
            add_point: AddPointController::new(points),
        }
    }
}
