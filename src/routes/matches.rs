use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    routing::{get, post},
};
use serde_json::Value;

use crate::{
    controllers::HttpResponse,
    dto::matches::{AddMatchRequest, MatchSummary, UpdateMatchRequest},
    error::{AppError, ErrorBody},
    routes::adapter::adapt_route,
    state::SharedState,
};

/// Routes registering matches and recording their results.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/matches", post(add_match).put(update_match))
        .route("/matches/{code}", get(get_match))
}

/// Register a new match.
#[utoipa::path(
    post,
    path = "/matches",
    tag = "matches",
    request_body = AddMatchRequest,
    responses(
        (status = 200, description = "Match registered", body = MatchSummary),
        (status = 400, description = "Missing or invalid parameter", body = ErrorBody),
        (status = 409, description = "Match code already used", body = ErrorBody)
    )
)]
pub async fn add_match(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    adapt_route(&state.controllers().add_match, payload).await
}

/// Record the scores and winner of an existing match.
#[utoipa::path(
    put,
    path = "/matches",
    tag = "matches",
    request_body = UpdateMatchRequest,
    responses(
        (status = 200, description = "Result stored", body = MatchSummary),
        (status = 400, description = "Missing parameter or inconsistent score/winner", body = ErrorBody),
        (status = 500, description = "Result could not be stored", body = ErrorBody)
    )
)]
pub async fn update_match(
    State(state): State<SharedState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    adapt_route(&state.controllers().update_match, payload).await
}

/// Fetch a match by code.
#[utoipa::path(
    get,
    path = "/matches/{code}",
    tag = "matches",
    params(("code" = i64, Path, description = "Code of the match")),
    responses(
        (status = 200, description = "Match", body = MatchSummary),
        (status = 404, description = "Unknown match", body = ErrorBody)
    )
)]
pub async fn get_match(
    State(state): State<SharedState>,
    Path(code): Path<i64>,
) -> Result<Json<MatchSummary>, AppError> {
    Ok(Json(state.matches().find(code).await?))
}
