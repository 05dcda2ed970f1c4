use axum::Router;

use crate::state::SharedState;

/// Bridge from axum extractors to transport-agnostic controllers.
pub mod adapter;
/// Swagger UI and OpenAPI document.
pub mod docs;
/// Group registration routes.
pub mod groups;
/// Health check routes.
pub mod health;
/// Match routes, including result updates.
pub mod matches;
/// Player position routes.
pub mod points;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(groups::router())
        .merge(matches::router())
        .merge(points::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
