//! Route definitions for student enrollment and roster management.
//!
//! Mounted at `/students` by `api_routes()`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::students;
use crate::state::AppState;

/// Student routes.
///
/// ```text
/// GET    /                   -> list_students
/// POST   /                   -> create_student
/// GET    /{id}               -> get_student
/// PUT    /{id}               -> update_student
/// PUT    /{id}/embedding     -> enroll_embedding
/// GET    /{id}/attendance    -> attendance_history (?limit, offset)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(students::list_students).post(students::create_student),
        )
        .route(
            "/{id}",
            get(students::get_student).put(students::update_student),
        )
        .route("/{id}/embedding", put(students::enroll_embedding))
        .route("/{id}/attendance", get(students::attendance_history))
}
