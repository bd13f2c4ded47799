use crate::types::Context;
use axum::{
    response::IntoResponse,
    routing::{get, Router},
    Json,
};
use hyper::StatusCode;
use serde_json::json;
use std::sync::Arc;

async fn check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "message": "Service is running" })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().route("/", get(check))
}
