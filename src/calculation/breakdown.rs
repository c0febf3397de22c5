//! Breakdown assembly.
//!
//! Combines the dual-session and class-schedule passes into one
//! [`PenaltyBreakdown`]. Totals are accumulated independently in each pass
//! and summed here; the two sources are additive with no cross-source
//! deduplication (the `source_combination: additive` policy). The only
//! reconciliation is display-side: a daily row is not listed when a
//! class-schedule row for the same date is already shown.

use chrono::NaiveDate;

use crate::config::PenaltyPolicy;
use crate::models::{
    AttendanceRecord, AuditStep, AuditWarning, ClassAttendanceRecord, DateRange,
    PenaltyBreakdown, ScheduleEntry,
};

use super::{run_schedule_pass, run_session_pass};

/// A computed breakdown together with its audit material.
#[derive(Debug, Clone)]
pub struct BreakdownOutcome {
    /// The penalty breakdown.
    pub breakdown: PenaltyBreakdown,
    /// Audit steps from both passes plus the totals step.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings from quirk paths.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates the complete penalty breakdown for one employee.
///
/// This is a pure function over the fetched record sets: no I/O, no shared
/// state, and identical inputs always produce identical output. Callers that
/// need the stored-data entry point should use
/// [`crate::calculation::calculate_for_user`] instead.
///
/// # Arguments
///
/// * `attendance` - Dual-session daily records for the employee.
/// * `schedules` - The employee's recurring schedule entries.
/// * `class_attendance` - Class attendance records for the employee.
/// * `range` - The effective calculation window.
/// * `today` - Placeholder occurrence date for schedules with no history.
/// * `policy` - The penalty policy to apply.
pub fn calculate_breakdown(
    attendance: &[AttendanceRecord],
    schedules: &[ScheduleEntry],
    class_attendance: &[ClassAttendanceRecord],
    range: DateRange,
    today: NaiveDate,
    policy: &PenaltyPolicy,
) -> BreakdownOutcome {
    let rates = &policy.rates;

    let class_pass = run_schedule_pass(schedules, class_attendance, &range, today, rates, 1);
    let next_step = 1 + class_pass.audit_steps.len() as u32;
    let session_pass = run_session_pass(attendance, &range, rates, next_step);

    let late_minutes = class_pass.late_minutes + session_pass.late_minutes;
    let late_penalty = class_pass.late_penalty + session_pass.late_penalty;
    let absent_count = class_pass.absent_count + session_pass.absent_count;
    let absent_penalty = class_pass.absent_penalty + session_pass.absent_penalty;
    let recorded_penalty = session_pass.recorded_penalty;
    let total_penalty = late_penalty + absent_penalty + recorded_penalty;

    // Display lists only: class rows first, then daily rows for dates not
    // already listed. Totals above are final before this point.
    let mut late_records = class_pass.late_records;
    let listed_late_dates: Vec<NaiveDate> = late_records.iter().map(|r| r.date).collect();
    late_records.extend(
        session_pass
            .late_records
            .into_iter()
            .filter(|r| !listed_late_dates.contains(&r.date)),
    );

    let mut absent_records = class_pass.absent_records;
    let listed_absent_dates: Vec<NaiveDate> = absent_records.iter().map(|r| r.date).collect();
    absent_records.extend(
        session_pass
            .absent_records
            .into_iter()
            .filter(|r| !listed_absent_dates.contains(&r.date)),
    );

    let mut audit_steps = class_pass.audit_steps;
    audit_steps.extend(session_pass.audit_steps);
    audit_steps.push(AuditStep {
        step_number: audit_steps.len() as u32 + 1,
        rule_id: "totals".to_string(),
        rule_name: "Penalty Totals".to_string(),
        policy_ref: "totals".to_string(),
        input: serde_json::json!({
            "late_penalty": late_penalty.to_string(),
            "absent_penalty": absent_penalty.to_string(),
            "recorded_penalty": recorded_penalty.to_string(),
        }),
        output: serde_json::json!({
            "total_penalty": total_penalty.to_string(),
        }),
        reasoning: format!(
            "{} late + {} absent + {} recorded = {}",
            late_penalty, absent_penalty, recorded_penalty, total_penalty
        ),
    });

    BreakdownOutcome {
        breakdown: PenaltyBreakdown {
            date_range: range,
            total_penalty,
            late_minutes,
            late_penalty,
            absent_count,
            absent_penalty,
            recorded_penalty,
            late_records,
            absent_records,
        },
        audit_steps,
        warnings: class_pass.warnings,
    }
}
