//! Penalty breakdown models.
//!
//! This module contains the [`PenaltyBreakdown`] value object produced by a
//! calculation, along with the per-occurrence late and absence rows retained
//! for audit display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::DateRange;

/// Which attendance subsystem produced a penalty row.
///
/// Daily dual-session attendance and class-schedule attendance are tracked
/// independently and combined additively; tagging every row keeps the two
/// sources distinguishable in payroll audit views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceSource {
    /// Dual-session daily attendance.
    Daily,
    /// Per-class-schedule attendance.
    ClassSchedule,
}

/// One late-arrival penalty row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LateRecord {
    /// The attendance subsystem the row came from.
    pub source: AttendanceSource,
    /// The occurrence date.
    pub date: NaiveDate,
    /// The schedule entry the occurrence belongs to, for class-schedule rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<String>,
    /// Subject of the schedule entry, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Whole minutes late, clamped at zero.
    pub minutes_late: i64,
    /// Penalty contribution of this row, in pesos.
    pub penalty: Decimal,
}

/// One absence penalty row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbsenceRecord {
    /// The attendance subsystem the row came from.
    pub source: AttendanceSource,
    /// The occurrence date.
    pub date: NaiveDate,
    /// The schedule entry the occurrence belongs to, for class-schedule rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<String>,
    /// Subject of the schedule entry, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Penalty contribution of this row, in pesos.
    pub penalty: Decimal,
}

/// The complete penalty breakdown for one employee and date range.
///
/// This is an ephemeral value object: it is recomputed on every request,
/// never cached, and discarded after display or after its `total_penalty` is
/// copied into a payroll record's deductions field by the caller.
///
/// Invariant: `total_penalty == late_penalty + absent_penalty +
/// recorded_penalty`, with `late_penalty == late_minutes × rate` and
/// `absent_penalty == absent_count × absence penalty`. All components are
/// non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyBreakdown {
    /// The effective calculation window.
    pub date_range: DateRange,
    /// Sum of all penalty components, in pesos.
    pub total_penalty: Decimal,
    /// Total minutes late across both attendance sources.
    pub late_minutes: i64,
    /// Late-arrival penalty, in pesos.
    pub late_penalty: Decimal,
    /// Number of absences across both attendance sources.
    pub absent_count: u32,
    /// Absence penalty, in pesos.
    pub absent_penalty: Decimal,
    /// Sum of penalty amounts already stored on daily records, in pesos.
    pub recorded_penalty: Decimal,
    /// Late-arrival rows retained for audit display.
    pub late_records: Vec<LateRecord>,
    /// Absence rows retained for audit display.
    pub absent_records: Vec<AbsenceRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_attendance_source_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&AttendanceSource::Daily).unwrap(),
            "\"daily\""
        );
        assert_eq!(
            serde_json::to_string(&AttendanceSource::ClassSchedule).unwrap(),
            "\"class_schedule\""
        );

        let source: AttendanceSource = serde_json::from_str("\"class_schedule\"").unwrap();
        assert_eq!(source, AttendanceSource::ClassSchedule);
    }

    #[test]
    fn test_late_record_omits_empty_schedule_fields() {
        let record = LateRecord {
            source: AttendanceSource::Daily,
            date: make_date("2025-07-14"),
            schedule_id: None,
            subject: None,
            minutes_late: 15,
            penalty: dec("15"),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("schedule_id"));
        assert!(!json.contains("subject"));
        assert!(json.contains("\"minutes_late\":15"));
    }

    #[test]
    fn test_absence_record_serialization_with_schedule() {
        let record = AbsenceRecord {
            source: AttendanceSource::ClassSchedule,
            date: make_date("2025-07-14"),
            schedule_id: Some("sched_001".to_string()),
            subject: Some("Physics".to_string()),
            penalty: dec("240"),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"source\":\"class_schedule\""));
        assert!(json.contains("\"schedule_id\":\"sched_001\""));
        assert!(json.contains("\"penalty\":\"240\""));
    }

    #[test]
    fn test_breakdown_component_sum() {
        let breakdown = PenaltyBreakdown {
            date_range: DateRange {
                start_date: make_date("2025-07-01"),
                end_date: make_date("2025-07-31"),
            },
            total_penalty: dec("305"),
            late_minutes: 15,
            late_penalty: dec("15"),
            absent_count: 1,
            absent_penalty: dec("240"),
            recorded_penalty: dec("50"),
            late_records: vec![],
            absent_records: vec![],
        };

        assert_eq!(
            breakdown.total_penalty,
            breakdown.late_penalty + breakdown.absent_penalty + breakdown.recorded_penalty
        );
    }

    #[test]
    fn test_breakdown_serde_round_trip() {
        let breakdown = PenaltyBreakdown {
            date_range: DateRange {
                start_date: make_date("2025-07-01"),
                end_date: make_date("2025-07-31"),
            },
            total_penalty: dec("255"),
            late_minutes: 15,
            late_penalty: dec("15"),
            absent_count: 1,
            absent_penalty: dec("240"),
            recorded_penalty: dec("0"),
            late_records: vec![LateRecord {
                source: AttendanceSource::ClassSchedule,
                date: make_date("2025-07-14"),
                schedule_id: Some("sched_001".to_string()),
                subject: None,
                minutes_late: 15,
                penalty: dec("15"),
            }],
            absent_records: vec![AbsenceRecord {
                source: AttendanceSource::Daily,
                date: make_date("2025-07-15"),
                schedule_id: None,
                subject: None,
                penalty: dec("240"),
            }],
        };

        let json = serde_json::to_string(&breakdown).unwrap();
        let deserialized: PenaltyBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown, deserialized);
    }
}
