//! Route definitions for check-in capture and attendance queries.
//!
//! Mounted at `/attendance` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::attendance;
use crate::state::AppState;

/// Attendance routes.
///
/// ```text
/// POST   /face               -> face_checkin
/// POST   /card               -> card_checkin
/// GET    /day/{date}         -> list_day
/// GET    /summary/{date}     -> day_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/face", post(attendance::face_checkin))
        .route("/card", post(attendance::card_checkin))
        .route("/day/{date}", get(attendance::list_day))
        .route("/summary/{date}", get(attendance::day_summary))
}
