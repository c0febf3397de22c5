//! Dual-session daily attendance pass.
//!
//! Walks the daily attendance records inside the calculation window and
//! accumulates three independent contributions per record: a penalty amount
//! already stored on the record, a late-minute penalty, and an inferred
//! full-day absence penalty.

use rust_decimal::Decimal;

use crate::config::PenaltyRates;
use crate::models::{
    AbsenceRecord, AttendanceRecord, AttendanceSource, AuditStep, DateRange, LateRecord,
};

/// The accumulated outcome of the dual-session pass.
#[derive(Debug, Clone, Default)]
pub struct SessionPassResult {
    /// Total minutes late across all records in range.
    pub late_minutes: i64,
    /// Late-arrival penalty, in pesos.
    pub late_penalty: Decimal,
    /// Number of inferred full-day absences.
    pub absent_count: u32,
    /// Absence penalty, in pesos.
    pub absent_penalty: Decimal,
    /// Sum of penalty amounts already stored on records, in pesos.
    pub recorded_penalty: Decimal,
    /// Late rows for audit display, tagged [`AttendanceSource::Daily`].
    pub late_records: Vec<LateRecord>,
    /// Absence rows for audit display, tagged [`AttendanceSource::Daily`].
    pub absent_records: Vec<AbsenceRecord>,
    /// Audit steps recording each contribution.
    pub audit_steps: Vec<AuditStep>,
}

/// Runs the dual-session pass over daily attendance records.
///
/// Each record inside `range` contributes independently:
/// 1. A stored `penalty_amount` is added to `recorded_penalty` as-is.
/// 2. `late_minutes > 0` accumulates minutes and the per-minute rate.
/// 3. A record with neither clock-in nor clock-out counts one absence.
///
/// A single record can contribute through all three paths at once; the
/// contributions are never reconciled against each other.
///
/// # Arguments
///
/// * `records` - The daily attendance records for one employee.
/// * `range` - The effective calculation window.
/// * `rates` - The penalty rates to apply.
/// * `first_step` - The step number for the first audit step produced.
pub fn run_session_pass(
    records: &[AttendanceRecord],
    range: &DateRange,
    rates: &PenaltyRates,
    first_step: u32,
) -> SessionPassResult {
    let mut result = SessionPassResult::default();
    let mut step_number = first_step;

    for record in records.iter().filter(|r| range.contains_date(r.date)) {
        if let Some(amount) = record.penalty_amount {
            result.recorded_penalty += amount;
            result.audit_steps.push(AuditStep {
                step_number,
                rule_id: "recorded_penalty".to_string(),
                rule_name: "Stored Record Penalty".to_string(),
                policy_ref: "recorded_penalty".to_string(),
                input: serde_json::json!({
                    "date": record.date.to_string(),
                    "penalty_amount": amount.to_string(),
                }),
                output: serde_json::json!({
                    "recorded_penalty": result.recorded_penalty.to_string(),
                }),
                reasoning: format!(
                    "Carried stored penalty {} from the {} attendance record",
                    amount, record.date
                ),
            });
            step_number += 1;
        }

        if let Some(minutes) = record.late_minutes {
            if minutes > 0 {
                let penalty = Decimal::from(minutes) * rates.late_rate_per_minute;
                result.late_minutes += minutes;
                result.late_penalty += penalty;
                result.late_records.push(LateRecord {
                    source: AttendanceSource::Daily,
                    date: record.date,
                    schedule_id: None,
                    subject: None,
                    minutes_late: minutes,
                    penalty,
                });
                result.audit_steps.push(AuditStep {
                    step_number,
                    rule_id: "session_late".to_string(),
                    rule_name: "Daily Late Arrival".to_string(),
                    policy_ref: "late_rate_per_minute".to_string(),
                    input: serde_json::json!({
                        "date": record.date.to_string(),
                        "late_minutes": minutes,
                    }),
                    output: serde_json::json!({
                        "penalty": penalty.to_string(),
                    }),
                    reasoning: format!(
                        "{} minutes late on {} at {}/minute",
                        minutes, record.date, rates.late_rate_per_minute
                    ),
                });
                step_number += 1;
            }
        }

        if record.is_absent() {
            result.absent_count += 1;
            result.absent_penalty += rates.absence_penalty;
            result.absent_records.push(AbsenceRecord {
                source: AttendanceSource::Daily,
                date: record.date,
                schedule_id: None,
                subject: None,
                penalty: rates.absence_penalty,
            });
            result.audit_steps.push(AuditStep {
                step_number,
                rule_id: "session_absence".to_string(),
                rule_name: "Daily Absence".to_string(),
                policy_ref: "absence_penalty".to_string(),
                input: serde_json::json!({
                    "date": record.date.to_string(),
                }),
                output: serde_json::json!({
                    "penalty": rates.absence_penalty.to_string(),
                }),
                reasoning: format!(
                    "No clock-in or clock-out on {}, charged {}",
                    record.date, rates.absence_penalty
                ),
            });
            step_number += 1;
        }
    }

    result
}
