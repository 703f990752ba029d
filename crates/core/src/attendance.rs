//! Attendance status and capture-method domain types, plus the late/on-time
//! classifier.
//!
//! The `AttendanceStatus` enum mirrors the seeded rows in the
//! `attendance_statuses` lookup table. `Absent` exists as a status for
//! display purposes but is never written to an event — it is derived by the
//! daily summary (see [`crate::summary`]).

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default wall-clock cutoff after which a check-in is classified late.
pub const DEFAULT_LATE_CUTOFF: &str = "08:15:00";

// ---------------------------------------------------------------------------
// AttendanceStatus enum
// ---------------------------------------------------------------------------

/// Attendance status for a recorded event.
///
/// Discriminant values match the seeded rows in the `attendance_statuses`
/// lookup table (1-based).
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceStatus {
    Present = 1,
    Late = 2,
    Absent = 3,
}

impl AttendanceStatus {
    /// Resolve a database status ID to the corresponding enum variant.
    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(Self::Present),
            2 => Some(Self::Late),
            3 => Some(Self::Absent),
            _ => None,
        }
    }

    /// Human-readable label matching the `label` column in `attendance_statuses`.
    pub fn label(&self) -> &str {
        match self {
            Self::Present => "Present",
            Self::Late => "Late",
            Self::Absent => "Absent",
        }
    }

    /// Return the database status ID.
    pub fn id(&self) -> i16 {
        *self as i16
    }
}

// ---------------------------------------------------------------------------
// CaptureMethod enum
// ---------------------------------------------------------------------------

/// How an attendance event was captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaptureMethod {
    /// Matched by face embedding.
    Face,
    /// Resolved from an NFC card tap.
    Card,
}

impl CaptureMethod {
    /// Database representation (`method` column).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Card => "card",
        }
    }

    /// Parse the database representation back into the enum.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "face" => Ok(Self::Face),
            "card" => Ok(Self::Card),
            other => Err(CoreError::Validation(format!(
                "Invalid capture method '{other}'. Must be one of: face, card"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Classify a check-in as on-time or late against a wall-clock cutoff.
///
/// Strictly greater than the cutoff is late; at or before the cutoff is
/// present. Never returns [`AttendanceStatus::Absent`].
pub fn classify_status(time_of_day: NaiveTime, cutoff: NaiveTime) -> AttendanceStatus {
    if time_of_day > cutoff {
        AttendanceStatus::Late
    } else {
        AttendanceStatus::Present
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M:%S").unwrap()
    }

    // -- AttendanceStatus ----------------------------------------------------

    #[test]
    fn status_from_id_returns_correct_variant() {
        assert_eq!(AttendanceStatus::from_id(1), Some(AttendanceStatus::Present));
        assert_eq!(AttendanceStatus::from_id(2), Some(AttendanceStatus::Late));
        assert_eq!(AttendanceStatus::from_id(3), Some(AttendanceStatus::Absent));
    }

    #[test]
    fn status_from_id_returns_none_for_unknown() {
        assert_eq!(AttendanceStatus::from_id(0), None);
        assert_eq!(AttendanceStatus::from_id(4), None);
        assert_eq!(AttendanceStatus::from_id(-1), None);
    }

    #[test]
    fn status_id_roundtrip() {
        for id in 1..=3 {
            let status = AttendanceStatus::from_id(id).unwrap();
            assert_eq!(status.id(), id);
        }
    }

    #[test]
    fn status_labels_match_seed_data() {
        assert_eq!(AttendanceStatus::Present.label(), "Present");
        assert_eq!(AttendanceStatus::Late.label(), "Late");
        assert_eq!(AttendanceStatus::Absent.label(), "Absent");
    }

    // -- CaptureMethod -------------------------------------------------------

    #[test]
    fn capture_method_str_roundtrip() {
        assert_eq!(CaptureMethod::parse("face").unwrap(), CaptureMethod::Face);
        assert_eq!(CaptureMethod::parse("card").unwrap(), CaptureMethod::Card);
        assert_eq!(CaptureMethod::Face.as_str(), "face");
        assert_eq!(CaptureMethod::Card.as_str(), "card");
    }

    #[test]
    fn capture_method_rejects_unknown() {
        assert!(CaptureMethod::parse("rfid").is_err());
        assert!(CaptureMethod::parse("").is_err());
    }

    // -- Classification ------------------------------------------------------

    #[test]
    fn before_cutoff_is_present() {
        assert_eq!(
            classify_status(t("08:14:59"), t("08:15:00")),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn exactly_at_cutoff_is_present() {
        // Comparison is strict: only strictly after the cutoff is late.
        assert_eq!(
            classify_status(t("08:15:00"), t("08:15:00")),
            AttendanceStatus::Present
        );
    }

    #[test]
    fn after_cutoff_is_late() {
        assert_eq!(
            classify_status(t("08:15:01"), t("08:15:00")),
            AttendanceStatus::Late
        );
    }

    #[test]
    fn default_cutoff_parses() {
        assert_eq!(t(DEFAULT_LATE_CUTOFF), t("08:15:00"));
    }
}
