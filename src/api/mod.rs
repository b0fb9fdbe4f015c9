//! HTTP API handlers

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use crate::error::Error;

pub mod courses;
pub mod health;
pub mod students;
pub mod ui;

pub use courses::{
    add_course_form, course_view, courses_view, create_course, delete_course, update_course,
};
pub use health::health_routes;
pub use students::{
    add_student_form, create_student, delete_student, list_students, list_teaching_assistants,
    student_view, students_in_course, update_student,
};
pub use ui::{serve_about, serve_home};

/// Data access errors mapped onto HTTP responses.
///
/// Failed reads answer 200 with a generic JSON message; failed writes
/// answer 500 with the operation's fixed reason string. Everything else
/// about the failure stays in the logs.
pub struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            Error::Query(source) => {
                error!("Read rejected by the database: {}", source);
                (
                    StatusCode::OK,
                    Json(json!({ "message": "No results returned" })),
                )
                    .into_response()
            }
            Error::Mutation { reason, source } => {
                match source {
                    Some(source) => error!("{}: {}", reason, source),
                    None => error!("{}", reason),
                }
                (StatusCode::INTERNAL_SERVER_ERROR, reason).into_response()
            }
            // Initialization failures are fatal at startup; none should
            // reach a request handler.
            Error::Initialization(source) => {
                error!("Initialization error surfaced in a handler: {}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
