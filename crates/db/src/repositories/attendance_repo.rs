//! Repository for the `attendance_events` table.
//!
//! Events are append-only: there are no update or delete methods. The
//! one-event-per-student-per-day invariant is enforced by the unique index
//! `uq_attendance_events_student_day`; [`AttendanceRepo::insert`] performs a
//! single INSERT and lets a concurrent duplicate surface as a Postgres 23505
//! unique violation rather than racing a check-then-insert.

use chrono::NaiveDate;
use rollcall_core::types::DbId;
use rollcall_core::validation::{clamp_limit, clamp_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use sqlx::PgPool;

use crate::models::attendance::{AttendanceEvent, CreateAttendanceEvent, DayStatusCounts};

/// Column list for `attendance_events` queries.
const COLUMNS: &str =
    "id, student_id, recorded_at, attended_on, status_id, confidence, method, created_at";

/// Provides append and query operations for attendance events.
pub struct AttendanceRepo;

impl AttendanceRepo {
    /// Insert a new attendance event, returning the created row.
    ///
    /// `attended_on` is derived from `recorded_at` in SQL so the value in the
    /// unique day index always agrees with the stored timestamp. A second
    /// insert for the same student and day fails with a unique violation on
    /// `uq_attendance_events_student_day`; callers translate that into the
    /// duplicate-attendance outcome.
    pub async fn insert(
        pool: &PgPool,
        input: &CreateAttendanceEvent,
    ) -> Result<AttendanceEvent, sqlx::Error> {
        let query = format!(
            "INSERT INTO attendance_events
                (student_id, recorded_at, attended_on, status_id, confidence, method)
             VALUES ($1, $2, ($2 AT TIME ZONE 'UTC')::date, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AttendanceEvent>(&query)
            .bind(input.student_id)
            .bind(input.recorded_at)
            .bind(input.status_id)
            .bind(input.confidence)
            .bind(input.method)
            .fetch_one(pool)
            .await
    }

    /// Find the event for a student on a given day, if any.
    pub async fn find_by_student_and_day(
        pool: &PgPool,
        student_id: DbId,
        day: NaiveDate,
    ) -> Result<Option<AttendanceEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance_events
             WHERE student_id = $1 AND attended_on = $2"
        );
        sqlx::query_as::<_, AttendanceEvent>(&query)
            .bind(student_id)
            .bind(day)
            .fetch_optional(pool)
            .await
    }

    /// List all events for a calendar day, oldest first.
    pub async fn list_by_day(
        pool: &PgPool,
        day: NaiveDate,
    ) -> Result<Vec<AttendanceEvent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM attendance_events
             WHERE attended_on = $1
             ORDER BY recorded_at ASC"
        );
        sqlx::query_as::<_, AttendanceEvent>(&query)
            .bind(day)
            .fetch_all(pool)
            .await
    }

    /// List a student's attendance history, newest first.
    pub async fn list_by_student(
        pool: &PgPool,
        student_id: DbId,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<AttendanceEvent>, sqlx::Error> {
        let limit = clamp_limit(limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT);
        let offset = clamp_offset(offset);
        let query = format!(
            "SELECT {COLUMNS} FROM attendance_events
             WHERE student_id = $1
             ORDER BY attended_on DESC
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, AttendanceEvent>(&query)
            .bind(student_id)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Count present and late events for a calendar day.
    ///
    /// `present_count` includes late arrivals (any event on the day);
    /// `late_count` counts only events with the late status.
    pub async fn count_by_status(
        pool: &PgPool,
        day: NaiveDate,
        late_status_id: i16,
    ) -> Result<DayStatusCounts, sqlx::Error> {
        sqlx::query_as::<_, DayStatusCounts>(
            "SELECT COUNT(*) AS present_count, \
                    COUNT(*) FILTER (WHERE status_id = $2) AS late_count \
             FROM attendance_events \
             WHERE attended_on = $1",
        )
        .bind(day)
        .bind(late_status_id)
        .fetch_one(pool)
        .await
    }

}
