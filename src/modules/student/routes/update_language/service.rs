use super::types::{request, response};
use crate::modules::student::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::update_language_by_uid(ctx.supabase.clone(), payload.uid, payload.language)
        .await
        .map(response::Success::LanguageUpdated)
        .map_err(|_| response::Error::FailedToUpdateLanguage)
}
