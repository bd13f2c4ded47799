mod profile;
mod update_language;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/student-profile", profile::get_router())
        .nest("/update-language", update_language::get_router())
}
