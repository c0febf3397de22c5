//! Core data models for the Attendance Penalty Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod audit;
mod calculation_result;
mod penalty_breakdown;
mod period;
mod schedule;

pub use attendance::{AttendanceRecord, ClassAttendanceRecord, ClassAttendanceStatus};
pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use calculation_result::{CalculationResult, PenaltyTotals};
pub use penalty_breakdown::{AbsenceRecord, AttendanceSource, LateRecord, PenaltyBreakdown};
pub use period::{DateRange, PeriodSelector};
pub use schedule::{DayOfWeek, ScheduleEntry};
