//! Handlers for check-in capture and attendance queries.
//!
//! Face check-in: the browser-side recognition model produces a probe
//! embedding; we match it against the enrolled roster and, on acceptance,
//! append an attendance event. Card check-in resolves an NFC uid to a
//! student directly. Both paths share [`record_checkin`], and both rely on
//! the unique day index for duplicate suppression — a second check-in on
//! the same day surfaces as 409 `DUPLICATE_ATTENDANCE`.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use rollcall_core::attendance::{classify_status, AttendanceStatus, CaptureMethod};
use rollcall_core::error::CoreError;
use rollcall_core::matcher::{match_embedding, validate_embedding_dimension};
use rollcall_core::summary::{compute_summary, DailySummary};
use rollcall_core::types::DbId;
use rollcall_db::models::attendance::{AttendanceEvent, CreateAttendanceEvent};
use rollcall_db::models::student::Student;
use rollcall_db::repositories::{AttendanceRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response DTOs
// ---------------------------------------------------------------------------

/// Request body for POST `/attendance/face`.
#[derive(Debug, Deserialize)]
pub struct FaceCheckinRequest {
    /// Probe embedding from the external recognition model.
    pub embedding: Vec<f32>,
}

/// Request body for POST `/attendance/card`.
#[derive(Debug, Deserialize)]
pub struct CardCheckinRequest {
    pub card_uid: String,
}

/// Response for both check-in endpoints.
///
/// `recognized: false` is a normal outcome (retry the capture), not an
/// error; the other fields are only present on recognition.
#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub recognized: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Student>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event: Option<AttendanceEvent>,
}

/// Response for GET `/attendance/summary/{date}`.
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub summary: DailySummary,
}

// ---------------------------------------------------------------------------
// Check-in handlers
// ---------------------------------------------------------------------------

/// POST /attendance/face
///
/// Match a probe embedding against the enrolled roster and record an
/// attendance event for the nearest student within threshold.
pub async fn face_checkin(
    State(state): State<AppState>,
    Json(input): Json<FaceCheckinRequest>,
) -> AppResult<impl IntoResponse> {
    validate_embedding_dimension(&input.embedding)?;

    let enrolled = StudentRepo::list_enrolled_embeddings(&state.pool).await?;
    let candidates: Vec<(DbId, Vec<f32>)> = enrolled
        .into_iter()
        .map(|e| (e.student_id, e.embedding))
        .collect();

    let Some(matched) = match_embedding(
        &input.embedding,
        &candidates,
        state.config.match_threshold,
    ) else {
        tracing::debug!(
            enrolled = candidates.len(),
            "Probe not recognized against enrolled roster"
        );
        return Ok(Json(DataResponse {
            data: CheckinResponse {
                recognized: false,
                student: None,
                confidence: None,
                event: None,
            },
        }));
    };

    record_checkin(
        &state,
        matched.student_id,
        matched.confidence,
        CaptureMethod::Face,
    )
    .await
    .map(Json)
}

/// POST /attendance/card
///
/// Resolve an NFC card uid to a student and record an attendance event.
/// Unlike face check-in, an unknown card is a caller error (404).
pub async fn card_checkin(
    State(state): State<AppState>,
    Json(input): Json<CardCheckinRequest>,
) -> AppResult<impl IntoResponse> {
    if input.card_uid.trim().is_empty() {
        return Err(AppError::BadRequest("card_uid must not be empty".into()));
    }

    let student = StudentRepo::find_by_card_uid(&state.pool, &input.card_uid)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("No student with card uid '{}'", input.card_uid))
        })?;

    // A physical card tap is not probabilistic.
    record_checkin(&state, student.id, 1.0, CaptureMethod::Card)
        .await
        .map(Json)
}

/// Shared check-in tail: classify on-time vs late and append the event.
///
/// The insert relies on the unique day index for duplicate suppression, so
/// there is no check-then-insert window here; a concurrent duplicate
/// becomes a 409 through the error classifier.
async fn record_checkin(
    state: &AppState,
    student_id: DbId,
    confidence: f64,
    method: CaptureMethod,
) -> AppResult<DataResponse<CheckinResponse>> {
    let now = Utc::now();
    let status = classify_status(now.time(), state.config.late_cutoff);

    let event = AttendanceRepo::insert(
        &state.pool,
        &CreateAttendanceEvent {
            student_id,
            recorded_at: now,
            status_id: status.id(),
            confidence,
            method: method.as_str(),
        },
    )
    .await?;

    let student = StudentRepo::find_by_id(&state.pool, student_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Student",
            id: student_id,
        })?;

    tracing::info!(
        student_id,
        status = status.label(),
        method = method.as_str(),
        confidence,
        "Attendance recorded"
    );

    Ok(DataResponse {
        data: CheckinResponse {
            recognized: true,
            student: Some(student),
            confidence: Some(confidence),
            event: Some(event),
        },
    })
}

// ---------------------------------------------------------------------------
// Query handlers
// ---------------------------------------------------------------------------

/// GET /attendance/day/{date}
///
/// All events recorded on a calendar date, oldest first.
pub async fn list_day(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<impl IntoResponse> {
    let events = AttendanceRepo::list_by_day(&state.pool, date).await?;
    Ok(Json(DataResponse { data: events }))
}

/// GET /attendance/summary/{date}
///
/// Daily summary: present/late/absent counts and attendance rate. Absence
/// is derived here (roster minus check-ins), never stored as an event.
pub async fn day_summary(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> AppResult<impl IntoResponse> {
    let total_enrolled = StudentRepo::count_all(&state.pool).await?;
    let counts =
        AttendanceRepo::count_by_status(&state.pool, date, AttendanceStatus::Late.id()).await?;

    let summary = compute_summary(total_enrolled, counts.present_count, counts.late_count);

    Ok(Json(DataResponse {
        data: SummaryResponse { date, summary },
    }))
}
