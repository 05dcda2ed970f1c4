use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::post,
};
use serde_json::Value;

use crate::{
    controllers::HttpResponse,
    dto::group::{AddGroupRequest, GroupSummary},
    error::ErrorBody,
    routes::adapter::adapt_route,
    state::SharedState,
};

/// Configure the routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/groups", post(add_group))
}

/// Register a group of four teams.
#[utoipa::path(
    post,
    path = "/groups",
    tag = "groups",
    request_body = AddGroupRequest,
    responses(
        (status = 200, description = "Group registered", body = GroupSummary),
        (status = 400, description = "Missing or invalid parameter", body = ErrorBody),
        (status = 409, description = "Group code already used", body = ErrorBody)
    )
)]
pub async fn add_group(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    adapt_route(&state.controllers().add_group, payload).await
}
