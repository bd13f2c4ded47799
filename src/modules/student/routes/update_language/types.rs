pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub uid: String,
        pub language: String,
    }
}

pub mod response {
    use crate::modules::student::repository::Student;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        LanguageUpdated(Vec<Student>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LanguageUpdated(students) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": students
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToUpdateLanguage,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToUpdateLanguage => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to update language"
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
