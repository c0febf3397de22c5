//! Class-schedule attendance pass.
//!
//! Resolves every recurring schedule entry to at most one evaluated
//! occurrence, then charges late-minute and absence penalties for
//! occurrences that fall inside the calculation window.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::config::PenaltyRates;
use crate::models::{
    AbsenceRecord, AttendanceSource, AuditStep, AuditWarning, ClassAttendanceRecord,
    ClassAttendanceStatus, DateRange, LateRecord, ScheduleEntry,
};

use super::minutes_late;

/// One evaluated occurrence of a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleOccurrence {
    /// The schedule entry the occurrence belongs to.
    pub schedule_id: String,
    /// Subject of the schedule entry, when known.
    pub subject: Option<String>,
    /// The occurrence date.
    pub date: NaiveDate,
    /// The attendance outcome for the occurrence.
    pub status: ClassAttendanceStatus,
    /// Check-in time, if the employee checked in.
    pub time_in: Option<NaiveTime>,
    /// The scheduled start time.
    pub expected_start: NaiveTime,
    /// `true` when no attendance record existed and the occurrence was
    /// synthesized with `today` as a placeholder date.
    pub implicit: bool,
}

/// Resolves each schedule to its single evaluated occurrence.
///
/// For every schedule entry, the most recent matching class attendance
/// record wins (latest `date`; among records sharing that date, the last one
/// fetched). A schedule with no matching record at all is evaluated as an
/// implicit `Absent` occurrence dated `today` — the record is not backfilled
/// into storage, and the placeholder date means the occurrence may or may not
/// survive the caller's range filter. That is longstanding payroll behavior,
/// kept as an explicit, named special case (`implicit: true`).
pub fn resolve_occurrences(
    schedules: &[ScheduleEntry],
    class_records: &[ClassAttendanceRecord],
    today: NaiveDate,
) -> Vec<ScheduleOccurrence> {
    schedules
        .iter()
        .map(|schedule| {
            let latest = class_records
                .iter()
                .filter(|r| r.schedule_id == schedule.id)
                .max_by_key(|r| r.date);

            match latest {
                Some(record) => ScheduleOccurrence {
                    schedule_id: schedule.id.clone(),
                    subject: schedule.subject.clone(),
                    date: record.date,
                    status: record.status,
                    time_in: record.time_in,
                    expected_start: schedule.start_time,
                    implicit: false,
                },
                None => ScheduleOccurrence {
                    schedule_id: schedule.id.clone(),
                    subject: schedule.subject.clone(),
                    date: today,
                    status: ClassAttendanceStatus::Absent,
                    time_in: None,
                    expected_start: schedule.start_time,
                    implicit: true,
                },
            }
        })
        .collect()
}

/// The accumulated outcome of the class-schedule pass.
#[derive(Debug, Clone, Default)]
pub struct SchedulePassResult {
    /// Total minutes late across all occurrences in range.
    pub late_minutes: i64,
    /// Late-arrival penalty, in pesos.
    pub late_penalty: Decimal,
    /// Number of absent occurrences.
    pub absent_count: u32,
    /// Absence penalty, in pesos.
    pub absent_penalty: Decimal,
    /// Late rows for audit display, tagged [`AttendanceSource::ClassSchedule`].
    pub late_records: Vec<LateRecord>,
    /// Absence rows for audit display, tagged [`AttendanceSource::ClassSchedule`].
    pub absent_records: Vec<AbsenceRecord>,
    /// Audit steps recording each contribution.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings for quirk paths (implicit dates, missing check-in times).
    pub warnings: Vec<AuditWarning>,
}

/// Runs the class-schedule pass.
///
/// Occurrences are resolved via [`resolve_occurrences`], filtered to the
/// calculation window, and charged: `Late` at the per-minute rate for
/// `max(0, floor(actual − expected))` minutes, `Absent` at the flat absence
/// penalty, `Present` nothing. A `Late` occurrence with no recorded check-in
/// clamps to zero minutes and emits a `MISSING_TIME_IN` warning; an implicit
/// occurrence that lands in range emits `IMPLICIT_OCCURRENCE_DATE`.
///
/// # Arguments
///
/// * `schedules` - The employee's recurring schedule entries.
/// * `class_records` - The fetched class attendance records.
/// * `range` - The effective calculation window.
/// * `today` - Placeholder occurrence date for schedules with no history.
/// * `rates` - The penalty rates to apply.
/// * `first_step` - The step number for the first audit step produced.
pub fn run_schedule_pass(
    schedules: &[ScheduleEntry],
    class_records: &[ClassAttendanceRecord],
    range: &DateRange,
    today: NaiveDate,
    rates: &PenaltyRates,
    first_step: u32,
) -> SchedulePassResult {
    let mut result = SchedulePassResult::default();
    let mut step_number = first_step;

    for occurrence in resolve_occurrences(schedules, class_records, today) {
        if !range.contains_date(occurrence.date) {
            continue;
        }

        match occurrence.status {
            ClassAttendanceStatus::Present => {}
            ClassAttendanceStatus::Late => {
                let minutes = match occurrence.time_in {
                    Some(time_in) => minutes_late(
                        occurrence.date.and_time(occurrence.expected_start),
                        occurrence.date.and_time(time_in),
                    ),
                    None => {
                        result.warnings.push(AuditWarning {
                            code: "MISSING_TIME_IN".to_string(),
                            message: format!(
                                "schedule {} on {} is marked late but has no check-in time",
                                occurrence.schedule_id, occurrence.date
                            ),
                            severity: "low".to_string(),
                        });
                        0
                    }
                };

                let penalty = Decimal::from(minutes) * rates.late_rate_per_minute;
                result.late_minutes += minutes;
                result.late_penalty += penalty;
                result.late_records.push(LateRecord {
                    source: AttendanceSource::ClassSchedule,
                    date: occurrence.date,
                    schedule_id: Some(occurrence.schedule_id.clone()),
                    subject: occurrence.subject.clone(),
                    minutes_late: minutes,
                    penalty,
                });
                result.audit_steps.push(AuditStep {
                    step_number,
                    rule_id: "class_late".to_string(),
                    rule_name: "Class Late Arrival".to_string(),
                    policy_ref: "late_rate_per_minute".to_string(),
                    input: serde_json::json!({
                        "schedule_id": occurrence.schedule_id.clone(),
                        "date": occurrence.date.to_string(),
                        "expected_start": occurrence.expected_start.to_string(),
                        "time_in": occurrence.time_in.map(|t| t.to_string()),
                    }),
                    output: serde_json::json!({
                        "minutes_late": minutes,
                        "penalty": penalty.to_string(),
                    }),
                    reasoning: format!(
                        "Checked in {} minutes after the {} start of schedule {}",
                        minutes, occurrence.expected_start, occurrence.schedule_id
                    ),
                });
                step_number += 1;
            }
            ClassAttendanceStatus::Absent => {
                result.absent_count += 1;
                result.absent_penalty += rates.absence_penalty;
                result.absent_records.push(AbsenceRecord {
                    source: AttendanceSource::ClassSchedule,
                    date: occurrence.date,
                    schedule_id: Some(occurrence.schedule_id.clone()),
                    subject: occurrence.subject.clone(),
                    penalty: rates.absence_penalty,
                });

                if occurrence.implicit {
                    result.warnings.push(AuditWarning {
                        code: "IMPLICIT_OCCURRENCE_DATE".to_string(),
                        message: format!(
                            "schedule {} has no attendance history; evaluated as absent on {}",
                            occurrence.schedule_id, occurrence.date
                        ),
                        severity: "medium".to_string(),
                    });
                }

                result.audit_steps.push(AuditStep {
                    step_number,
                    rule_id: "class_absence".to_string(),
                    rule_name: "Class Absence".to_string(),
                    policy_ref: "absence_penalty".to_string(),
                    input: serde_json::json!({
                        "schedule_id": occurrence.schedule_id.clone(),
                        "date": occurrence.date.to_string(),
                        "implicit": occurrence.implicit,
                    }),
                    output: serde_json::json!({
                        "penalty": rates.absence_penalty.to_string(),
                    }),
                    reasoning: format!(
                        "Absent from schedule {} on {}, charged {}",
                        occurrence.schedule_id, occurrence.date, rates.absence_penalty
                    ),
                });
                step_number += 1;
            }
        }
    }

    result
}
