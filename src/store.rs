//! Persistence collaborator interface.
//!
//! The engine reads attendance data through the [`AttendanceStore`] trait:
//! three read-only query capabilities owned by the surrounding application.
//! [`MemoryStore`] is the in-memory implementation used by tests and by
//! embedding callers that already hold the records.

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, ClassAttendanceRecord, DateRange, ScheduleEntry};

/// Read-only attendance queries consumed by the engine.
///
/// Implementations own their I/O concerns, including per-request timeouts.
/// Failures surface as [`EngineError::DataFetch`]; "no rows" is an empty
/// `Vec`, never an error.
pub trait AttendanceStore {
    /// Fetches dual-session daily records for a user within a date range.
    fn fetch_attendance(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Fetches all recurring schedule entries for a user.
    ///
    /// Schedules carry no date filter: they are recurring reference data.
    fn fetch_schedules(&self, user_id: &str) -> EngineResult<Vec<ScheduleEntry>>;

    /// Fetches class attendance records for a user within a date range.
    fn fetch_class_attendance(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> EngineResult<Vec<ClassAttendanceRecord>>;
}

/// In-memory [`AttendanceStore`] backed by plain vectors.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    attendance: Vec<AttendanceRecord>,
    schedules: Vec<ScheduleEntry>,
    class_attendance: Vec<ClassAttendanceRecord>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a daily attendance record.
    pub fn insert_attendance(&mut self, record: AttendanceRecord) {
        self.attendance.push(record);
    }

    /// Adds a schedule entry.
    pub fn insert_schedule(&mut self, entry: ScheduleEntry) {
        self.schedules.push(entry);
    }

    /// Adds a class attendance record.
    pub fn insert_class_attendance(&mut self, record: ClassAttendanceRecord) {
        self.class_attendance.push(record);
    }
}

impl AttendanceStore for MemoryStore {
    fn fetch_attendance(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        Ok(self
            .attendance
            .iter()
            .filter(|r| r.user_id == user_id && range.contains_date(r.date))
            .cloned()
            .collect())
    }

    fn fetch_schedules(&self, user_id: &str) -> EngineResult<Vec<ScheduleEntry>> {
        Ok(self
            .schedules
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    fn fetch_class_attendance(
        &self,
        user_id: &str,
        range: &DateRange,
    ) -> EngineResult<Vec<ClassAttendanceRecord>> {
        Ok(self
            .class_attendance
            .iter()
            .filter(|r| r.user_id == user_id && range.contains_date(r.date))
            .cloned()
            .collect())
    }
}

/// Retry bound applied to store fetches at the engine boundary.
#[derive(Debug, Clone, Copy)]
pub struct FetchPolicy {
    /// Total attempts per fetch, including the first (minimum 1).
    pub max_attempts: u32,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self { max_attempts: 3 }
    }
}

/// Runs a fetch with bounded retries.
///
/// Only [`EngineError::DataFetch`] is retried; any other error returns
/// immediately. The final attempt's error is returned unchanged.
pub fn fetch_with_retry<T>(
    policy: &FetchPolicy,
    mut fetch: impl FnMut() -> EngineResult<T>,
) -> EngineResult<T> {
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match fetch() {
            Ok(value) => return Ok(value),
            Err(err @ EngineError::DataFetch { .. }) if attempt < max_attempts => {
                warn!(attempt, max_attempts, error = %err, "retrying attendance fetch");
            }
            Err(err) => return Err(err),
        }
    }
}
