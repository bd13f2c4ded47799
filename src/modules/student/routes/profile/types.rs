pub mod request {
    pub struct Payload {
        pub uid: String,
    }
}

pub mod response {
    use crate::modules::student::repository::Student;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        StudentFound(Student),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StudentFound(student) => {
                    let first_name = student.first_name().unwrap_or_default();
                    let language = student
                        .language
                        .clone()
                        .unwrap_or_else(|| String::from("English"));

                    (
                        StatusCode::OK,
                        Json(json!({
                            "success": true,
                            "uid": student.uid,
                            "firstName": first_name,
                            "fullName": student.name,
                            "number": student.number,
                            "language": language,
                            "message": "Student found"
                        })),
                    )
                        .into_response()
                }
            }
        }
    }

    pub enum Error {
        StudentNotFound,
        FailedToFetchStudent,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StudentNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "success": false,
                        "message": "Student not found"
                    })),
                )
                    .into_response(),
                Self::FailedToFetchStudent => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "success": false,
                        "message": "Failed to fetch student profile"
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
