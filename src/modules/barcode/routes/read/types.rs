pub mod request {
    use serde::Deserialize;

    fn default_format() -> String {
        String::from("image/jpeg")
    }

    #[derive(Deserialize)]
    pub struct Payload {
        pub image: String,
        #[serde(default = "default_format")]
        pub format: String,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        BarcodeVerified {
            barcode: String,
            first_name: Option<String>,
        },
        NoBarcodeFound,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::BarcodeVerified {
                    barcode,
                    first_name,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "barcode": barcode,
                        "firstName": first_name,
                        "message": "Barcode verified successfully"
                    })),
                )
                    .into_response(),
                Self::NoBarcodeFound => (
                    StatusCode::OK,
                    Json(json!({
                        "success": false,
                        "barcode": null,
                        "message": "No barcode detected"
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidBase64,
        UnreadableImage,
        VerificationFailed,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidBase64 => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "message": "Invalid base64 image data"
                    })),
                )
                    .into_response(),
                Self::UnreadableImage => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "success": false,
                        "message": "Could not decode an image from the provided data"
                    })),
                )
                    .into_response(),
                Self::VerificationFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to verify barcode"
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
