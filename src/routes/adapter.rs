use axum::{Json, extract::rejection::JsonRejection};
use serde_json::Value;
use tracing::debug;

use crate::{
    controllers::{Controller, HttpRequest, HttpResponse},
    error::AppError,
};

/// Feed an axum JSON body into a [`Controller`] and hand its envelope back to axum.
pub async fn adapt_route(
    controller: &dyn Controller,
    payload: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    match payload {
        Ok(Json(body)) => controller.handle(HttpRequest::from(body)).await,
        Err(rejection) => {
            debug!(error = %rejection, "rejecting unreadable request body");
            AppError::BadRequest(rejection.body_text()).into()
        }
    }
}
