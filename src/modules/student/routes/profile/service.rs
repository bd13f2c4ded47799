use super::types::{request, response};
use crate::modules::student::repository;
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_uid(ctx.supabase.clone(), payload.uid)
        .await
        .map_err(|_| response::Error::FailedToFetchStudent)?
        .map(response::Success::StudentFound)
        .ok_or(response::Error::StudentNotFound)
}
