use super::types::{request, response};
use crate::modules::student::repository;
use crate::types::Context;
use crate::utils::scanner;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    tracing::debug!("Reading barcode from a {} payload", payload.format);

    let image_data = BASE64_STANDARD.decode(&payload.image).map_err(|err| {
        tracing::warn!("Rejected payload with invalid base64 image: {}", err);
        response::Error::InvalidBase64
    })?;

    let barcode = match scanner::read_barcode(&image_data) {
        Ok(Some(barcode)) => barcode,
        Ok(None) => return Ok(response::Success::NoBarcodeFound),
        Err(scanner::Error::UnreadableImage) => return Err(response::Error::UnreadableImage),
    };

    let student = repository::find_by_uid(ctx.supabase.clone(), barcode.clone())
        .await
        .map_err(|_| response::Error::VerificationFailed)?;

    let first_name = student.map(|student| {
        student
            .first_name()
            .unwrap_or_else(|| String::from("Student"))
    });

    Ok(response::Success::BarcodeVerified {
        barcode,
        first_name,
    })
}
