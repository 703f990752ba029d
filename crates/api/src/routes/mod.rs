pub mod attendance;
pub mod health;
pub mod students;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /students                                 list, create
/// /students/{id}                            get, update
/// /students/{id}/embedding                  enroll/re-enroll face embedding (PUT)
/// /students/{id}/attendance                 per-student history (GET)
///
/// /attendance/face                          face check-in (POST)
/// /attendance/card                          card check-in (POST)
/// /attendance/day/{date}                    events for a calendar date (GET)
/// /attendance/summary/{date}                daily summary (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/students", students::router())
        .nest("/attendance", attendance::router())
}
