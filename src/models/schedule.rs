//! Schedule entry model.
//!
//! This module defines the [`ScheduleEntry`] struct representing a recurring
//! weekly commitment (e.g., a class), maintained by HR as reference data.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Day of the week a schedule entry recurs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

/// A recurring weekly schedule entry for an employee.
///
/// Schedules are immutable reference data: the engine never filters them by
/// date. Each entry is joined against class attendance records by
/// `schedule_id` during the class-schedule pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Unique identifier for the schedule entry.
    pub id: String,
    /// Identifier of the employee the schedule belongs to.
    pub user_id: String,
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
