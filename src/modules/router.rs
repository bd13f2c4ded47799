use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::{barcode, student};
use crate::types::Context;
use std::sync::Arc;

async fn index() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to IDVerify API" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(index))
        .nest("/read-barcode", barcode::get_router())
        .nest("/", student::get_router())
}
