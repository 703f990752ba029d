//! Attendance event entity models and DTOs.
//!
//! These map to the `attendance_events` table. Events are immutable after
//! creation: there is no update DTO. `attended_on` denormalizes the capture
//! date so the one-event-per-student-per-day invariant can live in a unique
//! index.

use chrono::NaiveDate;
use rollcall_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `attendance_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AttendanceEvent {
    pub id: DbId,
    pub student_id: DbId,
    /// The moment of capture.
    pub recorded_at: Timestamp,
    /// Calendar date of `recorded_at`, carried in the unique day index.
    pub attended_on: NaiveDate,
    /// References the `attendance_statuses` lookup table.
    pub status_id: i16,
    pub confidence: f64,
    /// Capture method: `face` or `card`.
    pub method: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new attendance event.
#[derive(Debug, Clone)]
pub struct CreateAttendanceEvent {
    pub student_id: DbId,
    pub recorded_at: Timestamp,
    pub status_id: i16,
    pub confidence: f64,
    pub method: &'static str,
}

/// Per-day event counts for the summary endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DayStatusCounts {
    /// Events with any status (present or late).
    pub present_count: i64,
    /// Events with the late status only.
    pub late_count: i64,
}
