//! Request types for the Attendance Penalty Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint. Record rows in a request omit `user_id`; the top-level
//! `user_id` is applied to every row during conversion.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    AttendanceRecord, ClassAttendanceRecord, ClassAttendanceStatus, DayOfWeek, PeriodSelector,
    ScheduleEntry,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains the employee identifier, an optional pay period, and the three
/// attendance record sets the caller fetched from its own data layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee to calculate penalties for.
    pub user_id: String,
    /// Optional pay period; the rolling default window applies when absent.
    #[serde(default)]
    pub period: Option<PeriodRequest>,
    /// Dual-session daily attendance records.
    pub attendance: Vec<AttendanceRecordRequest>,
    /// Recurring schedule entries.
    pub schedules: Vec<ScheduleEntryRequest>,
    /// Class attendance records.
    pub class_attendance: Vec<ClassAttendanceRequest>,
}

/// Pay period information in a calculation request.
///
/// Either a calendar month (`{"year": 2025, "month": 7}`) or an explicit
/// inclusive range (`{"start_date": ..., "end_date": ...}`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodRequest {
    /// A calendar month.
    Month {
        /// The calendar year.
        year: i32,
        /// The calendar month (1-12).
        month: u32,
    },
    /// An explicit inclusive date range.
    Range {
        /// The start date of the range (inclusive).
        start_date: NaiveDate,
        /// The end date of the range (inclusive).
        end_date: NaiveDate,
    },
}

/// Daily attendance record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
    /// Calendar day the record tracks.
    pub date: NaiveDate,
    /// Clock-in time, if any.
    #[serde(default)]
    pub time_in: Option<NaiveTime>,
    /// Clock-out time, if any.
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

/// Schedule entry in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntryRequest {
    /// Unique identifier for the schedule entry.
    pub id: String,
    /// The day of the week the entry recurs on.
    pub day_of_week: DayOfWeek,
    /// Scheduled start time.
    pub start_time: NaiveTime,
    /// Scheduled end time.
    pub end_time: NaiveTime,
    /// Subject or activity name.
    #[serde(default)]
    pub subject: Option<String>,
    /// Room or location.
    #[serde(default)]
    pub room: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

/// Class attendance record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassAttendanceRequest {
    /// Unique identifier for the record.
    pub id: String,
    /// The schedule entry this occurrence belongs to.
    pub schedule_id: String,
    /// The date of the occurrence.
    pub date: NaiveDate,
    /// Check-in time, if any.
    #[serde(default)]
    pub time_in: Option<NaiveTime>,
    /// Check-out time, if any.
    #[serde(default)]
    pub time_out: Option<NaiveTime>,
    /// The recorded outcome for the occurrence.
    pub status: ClassAttendanceStatus,
}

impl From<PeriodRequest> for PeriodSelector {
    fn from(req: PeriodRequest) -> Self {
        match req {
            PeriodRequest::Month { year, month } => PeriodSelector::Month { year, month },
            PeriodRequest::Range {
                start_date,
                end_date,
            } => PeriodSelector::Range {
                start_date,
                end_date,
            },
        }
    }
}

impl AttendanceRecordRequest {
    /// Converts the request row into a domain record owned by `user_id`.
    pub fn into_record(self, user_id: &str) -> AttendanceRecord {
        AttendanceRecord {
            user_id: user_id.to_string(),
            date: self.date,
            time_in: self.time_in,
            time_out: self.time_out,
            late_minutes: self.late_minutes,
            overtime_minutes: self.overtime_minutes,
            penalty_amount: self.penalty_amount,
            notes: self.notes,
        }
    }
}

impl ScheduleEntryRequest {
    /// Converts the request row into a domain entry owned by `user_id`.
    pub fn into_entry(self, user_id: &str) -> ScheduleEntry {
        ScheduleEntry {
            id: self.id,
            user_id: user_id.to_string(),
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            subject: self.subject,
            room: self.room,
            notes: self.notes,
        }
    }
}

impl ClassAttendanceRequest {
    /// Converts the request row into a domain record owned by `user_id`.
    pub fn into_record(self, user_id: &str) -> ClassAttendanceRecord {
        ClassAttendanceRecord {
            id: self.id,
            user_id: user_id.to_string(),
            schedule_id: self.schedule_id,
            date: self.date,
            time_in: self.time_in,
            time_out: self.time_out,
            status: self.status,
        }
    }
}
