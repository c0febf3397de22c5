//! Attendance record models.
//!
//! This module defines the two attendance record shapes the engine consumes:
//! dual-session daily records (one clock-in/out pair per calendar day) and
//! per-class-schedule attendance records.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One dual-session attendance record for a calendar day.
///
/// Raw records are created by the attendance-capture subsystem; the engine
/// only reads them. Absence for the day is inferred when both `time_in` and
/// `time_out` are missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Identifier of the employee that owns the record.
    pub user_id: String,
    /// Calendar day the record tracks.
    pub date: NaiveDate,
    /// Clock-in time, if the employee clocked in.
    #[serde(default)]
    pub time_in: Option<NaiveTime>,
    /// Clock-out time, if the employee clocked out.
    #[serde(default)]
    pub time_out: Option<NaiveTime>,
    /// Minutes late as recorded by the capture subsystem.
    #[serde(default)]
    pub late_minutes: Option<i64>,
    /// Overtime minutes as recorded by the capture subsystem.
    #[serde(default)]
    pub overtime_minutes: Option<i64>,
    /// A penalty amount already stored on the record, in pesos.
    #[serde(default)]
    pub penalty_amount: Option<Decimal>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl AttendanceRecord {
    /// Returns `true` when the record represents a full-day absence,
    /// i.e. neither a clock-in nor a clock-out was captured.
    pub fn is_absent(&self) -> bool {
        self.time_in.is_none() && self.time_out.is_none()
    }
}

/// Outcome of a class-schedule occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassAttendanceStatus {
    /// Checked in on time.
    Present,
    /// Checked in after the scheduled start time.
    Late,
    /// Did not check in at all.
    Absent,
}

/// An attendance record for one occurrence of a class schedule.
///
/// Links a [`crate::models::ScheduleEntry`] occurrence on a specific date to
/// an actual check-in, with the status decided by the capture subsystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassAttendanceRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// Identifier of the employee that owns the record.
    pub user_id: String,
    /// The schedule entry this occurrence belongs to.
    pub schedule_id: String,
    /// The date of the occurrence.
    pub date: NaiveDate,
    /// Check-in time, if the employee checked in.
    #[serde(default)]
    pub time_in: Option<NaiveTime>,
    /// Check-out time, if the employee checked out.
    #[serde(default)]
    pub time_out: Option<NaiveTime>,
    /// The recorded outcome for the occurrence.
    pub status: ClassAttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn blank_record(date: &str) -> AttendanceRecord {
        AttendanceRecord {
            user_id: "emp_001".to_string(),
            date: make_date(date),
            time_in: None,
            time_out: None,
            late_minutes: None,
            overtime_minutes: None,
            penalty_amount: None,
            notes: None,
        }
    }

    #[test]
    fn test_absence_inferred_from_missing_clock_times() {
        let record = blank_record("2025-07-14");
        assert!(record.is_absent());
    }

    #[test]
    fn test_clock_in_only_is_not_absent() {
        let mut record = blank_record("2025-07-14");
        record.time_in = Some(make_time("08:05:00"));
        assert!(!record.is_absent());
    }

    #[test]
    fn test_clock_out_only_is_not_absent() {
        let mut record = blank_record("2025-07-14");
        record.time_out = Some(make_time("17:00:00"));
        assert!(!record.is_absent());
    }

    #[test]
    fn test_class_attendance_status_serde_snake_case() {
        let status: ClassAttendanceStatus = serde_json::from_str("\"late\"").unwrap();
        assert_eq!(status, ClassAttendanceStatus::Late);

        let json = serde_json::to_string(&ClassAttendanceStatus::Absent).unwrap();
        assert_eq!(json, "\"absent\"");
    }

    #[test]
    fn test_deserialize_attendance_record_with_optional_fields_missing() {
        let json = r#"{
            "user_id": "emp_001",
            "date": "2025-07-14"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.user_id, "emp_001");
        assert!(record.time_in.is_none());
        assert!(record.penalty_amount.is_none());
        assert!(record.is_absent());
    }

    #[test]
    fn test_deserialize_attendance_record_with_penalty_amount() {
        let json = r#"{
            "user_id": "emp_001",
            "date": "2025-07-14",
            "time_in": "08:20:00",
            "time_out": "17:00:00",
            "late_minutes": 20,
            "penalty_amount": "20.00"
        }"#;

        let record: AttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.late_minutes, Some(20));
        assert_eq!(record.penalty_amount, Some(Decimal::new(2000, 2)));
        assert!(!record.is_absent());
    }

    #[test]
    fn test_deserialize_class_attendance_record() {
        let json = r#"{
            "id": "ca_001",
            "user_id": "emp_001",
            "schedule_id": "sched_001",
            "date": "2025-07-14",
            "time_in": "08:10:00",
            "status": "late"
        }"#;

        let record: ClassAttendanceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.schedule_id, "sched_001");
        assert_eq!(record.status, ClassAttendanceStatus::Late);
        assert_eq!(record.time_in, Some(make_time("08:10:00")));
        assert!(record.time_out.is_none());
    }

    #[test]
    fn test_attendance_record_serde_round_trip() {
        let mut record = blank_record("2025-07-14");
        record.time_in = Some(make_time("08:00:00"));
        record.time_out = Some(make_time("17:00:00"));
        record.notes = Some("half-day leave approved".to_string());

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: AttendanceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
