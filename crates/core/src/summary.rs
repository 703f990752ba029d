//! Daily attendance summary math.
//!
//! Absence is never stored as an event; it is the difference between the
//! enrolled roster and the students who checked in that day. Counts come
//! from the database, the arithmetic lives here.

use serde::Serialize;

// ---------------------------------------------------------------------------
// DailySummary
// ---------------------------------------------------------------------------

/// Summary statistics for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub total_enrolled: i64,
    /// Students with any event that day (present or late).
    pub present_count: i64,
    /// Subset of `present_count` that checked in after the cutoff.
    pub late_count: i64,
    pub absent_count: i64,
    /// Attendance rate as a percentage, `0.0` when nobody is enrolled.
    pub rate: f64,
}

/// Compute the daily summary from roster size and per-status event counts.
///
/// `present_count` must already include late arrivals (a late student is
/// present). `absent_count` cannot go negative as long as every event's
/// student is enrolled.
pub fn compute_summary(total_enrolled: i64, present_count: i64, late_count: i64) -> DailySummary {
    let rate = if total_enrolled == 0 {
        0.0
    } else {
        present_count as f64 / total_enrolled as f64 * 100.0
    };

    DailySummary {
        total_enrolled,
        present_count,
        late_count,
        absent_count: total_enrolled - present_count,
        rate,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_day() {
        let summary = compute_summary(50, 40, 5);
        assert_eq!(summary.total_enrolled, 50);
        assert_eq!(summary.present_count, 40);
        assert_eq!(summary.late_count, 5);
        assert_eq!(summary.absent_count, 10);
        assert_eq!(summary.rate, 80.0);
    }

    #[test]
    fn empty_roster_has_zero_rate() {
        let summary = compute_summary(0, 0, 0);
        assert_eq!(summary.rate, 0.0);
        assert_eq!(summary.absent_count, 0);
    }

    #[test]
    fn full_attendance() {
        let summary = compute_summary(12, 12, 0);
        assert_eq!(summary.absent_count, 0);
        assert_eq!(summary.rate, 100.0);
    }

    #[test]
    fn nobody_checked_in() {
        let summary = compute_summary(30, 0, 0);
        assert_eq!(summary.absent_count, 30);
        assert_eq!(summary.rate, 0.0);
    }
}
