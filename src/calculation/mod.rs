//! Calculation logic for the Attendance Penalty Engine.
//!
//! This module contains the penalty calculation passes: late-minute
//! computation, the dual-session daily attendance pass, the class-schedule
//! occurrence pass, breakdown assembly, and the store-driven entry points
//! used for single-employee and batch calculations.

mod batch;
mod breakdown;
mod late_minutes;
mod schedule_pass;
mod session_pass;

pub use batch::{calculate_batch, calculate_for_user};
pub use breakdown::{BreakdownOutcome, calculate_breakdown};
pub use late_minutes::minutes_late;
pub use schedule_pass::{
    ScheduleOccurrence, SchedulePassResult, resolve_occurrences, run_schedule_pass,
};
pub use session_pass::{SessionPassResult, run_session_pass};
