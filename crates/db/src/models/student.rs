//! Student entity models and DTOs.
//!
//! These map to the `students` table. The `embedding` vector column is not
//! part of the `FromRow` struct because pgvector types are stored/read via
//! raw SQL casts; queries expose `embedding IS NOT NULL` as `has_embedding`
//! instead.

use rollcall_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `students` table (embedding column excluded).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub full_name: String,
    /// Program/cohort label, e.g. "CS-2026".
    pub cohort: String,
    /// NFC card identifier, unique when present.
    pub card_uid: Option<String>,
    pub photo_path: Option<String>,
    /// Whether a face embedding is enrolled (derived from the vector column).
    pub has_embedding: bool,
    /// When the current embedding was (re-)enrolled.
    pub embedding_enrolled_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new student.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudent {
    pub full_name: String,
    pub cohort: String,
    pub card_uid: Option<String>,
    pub photo_path: Option<String>,
}

/// DTO for patching student profile fields. All fields optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStudent {
    pub full_name: Option<String>,
    pub cohort: Option<String>,
    pub card_uid: Option<String>,
    pub photo_path: Option<String>,
}

/// A student id paired with its enrolled embedding, for the matcher scan.
#[derive(Debug, Clone)]
pub struct EnrolledEmbedding {
    pub student_id: DbId,
    pub embedding: Vec<f32>,
}
