use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    routing::get,
};
use serde_json::Value;

use crate::{
    controllers::HttpResponse,
    dto::point::{AddPointRequest, PointSummary},
    error::{AppError, ErrorBody},
    routes::adapter::adapt_route,
    state::SharedState,
};

/// Configure the routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/points", get(list_points).post(add_point))
}

/// Record a player position.
#[utoipa::path(
    post,
    path = "/points",
    tag = "points",
    request_body = AddPointRequest,
    responses(
        (status = 200, description = "Position recorded", body = PointSummary),
        (status = 400, description = "Missing or invalid parameter", body = ErrorBody)
    )
)]
pub async fn add_point(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    adapt_route(&state.controllers().add_point, payload).await
}

/// List every recorded player position.
#[utoipa::path(
    get,
    path = "/points",
    tag = "points",
    responses((status = 200, description = "Recorded positions", body = [PointSummary]))
)]
pub async fn list_points(
    State(state): State<SharedState>,
) -> Result<Json<Vec<PointSummary>>, AppError> {
    Ok(Json(state.points().list().await?))
}
