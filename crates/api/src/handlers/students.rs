//! Handlers for student enrollment and roster management.
//!
//! Students are created administratively and gain a face embedding through
//! the enrollment endpoint. Re-enrollment overwrites the stored embedding;
//! students are never deleted by this service.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use rollcall_core::error::CoreError;
use rollcall_core::matcher::validate_embedding_dimension;
use rollcall_core::types::DbId;
use rollcall_db::models::student::{CreateStudent, UpdateStudent};
use rollcall_db::repositories::{AttendanceRepo, StudentRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Request body for PUT `/students/{id}/embedding`.
#[derive(Debug, Deserialize)]
pub struct EnrollEmbeddingRequest {
    /// Raw 128-dimensional face embedding from the recognition model.
    pub embedding: Vec<f32>,
}

/// Query parameters for GET `/students/{id}/attendance`.
#[derive(Debug, Deserialize)]
pub struct AttendanceHistoryQuery {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /students
///
/// Enroll a new student (profile only; face embedding comes later).
pub async fn create_student(
    State(state): State<AppState>,
    Json(input): Json<CreateStudent>,
) -> AppResult<impl IntoResponse> {
    validate_profile(&input.full_name, &input.cohort)?;

    let student = StudentRepo::create(&state.pool, &input).await?;

    tracing::info!(student_id = student.id, "Student enrolled");

    Ok((StatusCode::CREATED, Json(DataResponse { data: student })))
}

/// GET /students
///
/// List the full roster.
pub async fn list_students(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: students }))
}

/// GET /students/{id}
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Student",
            id,
        })?;

    Ok(Json(DataResponse { data: student }))
}

/// PUT /students/{id}
///
/// Patch profile fields. Fields left out of the body are unchanged.
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStudent>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref name) = input.full_name {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("full_name must not be empty".into()));
        }
    }
    if let Some(ref cohort) = input.cohort {
        if cohort.trim().is_empty() {
            return Err(AppError::BadRequest("cohort must not be empty".into()));
        }
    }

    let student = StudentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Student",
            id,
        })?;

    Ok(Json(DataResponse { data: student }))
}

/// PUT /students/{id}/embedding
///
/// Enroll or re-enroll a student's face embedding. The previous embedding,
/// if any, is overwritten.
pub async fn enroll_embedding(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<EnrollEmbeddingRequest>,
) -> AppResult<impl IntoResponse> {
    validate_embedding_dimension(&input.embedding)?;

    let found = StudentRepo::set_embedding(&state.pool, id, &input.embedding).await?;
    if !found {
        return Err(CoreError::NotFound {
            entity: "Student",
            id,
        }
        .into());
    }

    tracing::info!(student_id = id, "Face embedding enrolled");

    // Echo the updated row so the caller sees has_embedding flip.
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Student",
            id,
        })?;

    Ok(Json(DataResponse { data: student }))
}

/// GET /students/{id}/attendance?limit=&offset=
///
/// A student's attendance history, newest first.
pub async fn attendance_history(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<AttendanceHistoryQuery>,
) -> AppResult<impl IntoResponse> {
    // 404 for unknown students rather than an empty list.
    StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Student",
            id,
        })?;

    let events =
        AttendanceRepo::list_by_student(&state.pool, id, params.limit, params.offset).await?;

    Ok(Json(DataResponse { data: events }))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_profile(full_name: &str, cohort: &str) -> Result<(), AppError> {
    if full_name.trim().is_empty() {
        return Err(AppError::BadRequest("full_name must not be empty".into()));
    }
    if cohort.trim().is_empty() {
        return Err(AppError::BadRequest("cohort must not be empty".into()));
    }
    Ok(())
}
