//! college-records library
//!
//! CRUD web backend for college student and course records. The data
//! access layer lives in [`db`]; HTTP handlers in [`api`].

use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod db;
pub mod error;

pub use error::{Error, Result};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created once at startup
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_home))
        .route("/about", get(api::serve_about))
        .route("/students", get(api::list_students))
        .route("/students/add", post(api::create_student))
        .route("/tas", get(api::list_teaching_assistants))
        .route("/student/add", get(api::add_student_form))
        .route("/student/update", post(api::update_student))
        .route("/student/delete/:num", get(api::delete_student))
        .route("/student/:num", get(api::student_view))
        .route("/courses", get(api::courses_view))
        .route("/courses/add", post(api::create_course))
        .route("/courses/:num", get(api::students_in_course))
        .route("/course/add", get(api::add_course_form))
        .route("/course/update", post(api::update_course))
        .route("/course/delete/:id", get(api::delete_course))
        .route("/course/:id", get(api::course_view))
        .merge(api::health_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
