//! Repository for the `students` table.
//!
//! The `embedding` column uses pgvector's `vector(128)` type. Because we use
//! runtime queries (no compile-time sqlx macros), embeddings are passed as
//! text literals (e.g. `'[0.1, 0.2, ...]'::vector`) and read back via
//! `::text`, then parsed with [`crate::vector`].

use rollcall_core::error::CoreError;
use rollcall_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::{CreateStudent, EnrolledEmbedding, Student, UpdateStudent};
use crate::vector::{parse_vector_text, to_vector_literal};

/// Column list for `students` queries (excludes the `embedding` vector).
const COLUMNS: &str = "id, full_name, cohort, card_uid, photo_path, \
     embedding IS NOT NULL AS has_embedding, embedding_enrolled_at, \
     created_at, updated_at";

/// Provides CRUD and embedding-enrollment operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// Create a new student, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateStudent) -> Result<Student, sqlx::Error> {
        let query = format!(
            "INSERT INTO students (full_name, cohort, card_uid, photo_path)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(&input.full_name)
            .bind(&input.cohort)
            .bind(&input.card_uid)
            .bind(&input.photo_path)
            .fetch_one(pool)
            .await
    }

    /// Find a student by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE id = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a student by NFC card identifier.
    pub async fn find_by_card_uid(
        pool: &PgPool,
        card_uid: &str,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE card_uid = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(card_uid)
            .fetch_optional(pool)
            .await
    }

    /// List all students, ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY full_name, id");
        sqlx::query_as::<_, Student>(&query).fetch_all(pool).await
    }

    /// Update profile fields (COALESCE patch), returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStudent,
    ) -> Result<Option<Student>, sqlx::Error> {
        let query = format!(
            "UPDATE students SET
                full_name = COALESCE($2, full_name),
                cohort = COALESCE($3, cohort),
                card_uid = COALESCE($4, card_uid),
                photo_path = COALESCE($5, photo_path),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .bind(&input.full_name)
            .bind(&input.cohort)
            .bind(&input.card_uid)
            .bind(&input.photo_path)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a student's face embedding (re-enrollment) and stamp the
    /// enrollment time. Returns `false` if the student does not exist.
    pub async fn set_embedding(
        pool: &PgPool,
        id: DbId,
        embedding: &[f32],
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE students SET \
                embedding = $2::vector, \
                embedding_enrolled_at = NOW(), \
                updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .bind(to_vector_literal(embedding))
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Fetch the embeddings of all enrolled students for the matcher scan.
    ///
    /// Students without an embedding are excluded.
    pub async fn list_enrolled_embeddings(
        pool: &PgPool,
    ) -> Result<Vec<EnrolledEmbedding>, CoreError> {
        let rows: Vec<(DbId, String)> = sqlx::query_as(
            "SELECT id, embedding::text FROM students WHERE embedding IS NOT NULL",
        )
        .fetch_all(pool)
        .await
        .map_err(|e| CoreError::Internal(format!("Failed to load enrolled embeddings: {e}")))?;

        rows.into_iter()
            .map(|(student_id, text)| {
                let embedding = parse_vector_text(&text).inspect_err(|e| {
                    tracing::warn!(student_id, error = %e, "Stored embedding is malformed");
                })?;
                Ok(EnrolledEmbedding {
                    student_id,
                    embedding,
                })
            })
            .collect()
    }

    /// Count all students (the enrolled roster for summary math).
    pub async fn count_all(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
