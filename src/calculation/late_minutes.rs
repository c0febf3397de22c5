//! Late-minute computation.
//!
//! This module provides the single place where "how late was the check-in"
//! is decided, so the truncation and clamping semantics stay consistent
//! across both attendance passes.

use chrono::NaiveDateTime;

/// Computes whole minutes late for a check-in against an expected start.
///
/// The signed duration is truncated to whole minutes (sub-minute lateness
/// counts as zero) and clamped at zero: arriving early or exactly on time
/// yields `0`, never a credit.
///
/// # Arguments
///
/// * `expected_start` - The scheduled start applied to the occurrence date.
/// * `actual_in` - The actual check-in on the same date.
///
/// # Examples
///
/// ```
/// use penalty_engine::calculation::minutes_late;
/// use chrono::NaiveDateTime;
///
/// let expected =
///     NaiveDateTime::parse_from_str("2025-07-14 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let actual =
///     NaiveDateTime::parse_from_str("2025-07-14 08:10:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// assert_eq!(minutes_late(expected, actual), 10);
/// assert_eq!(minutes_late(expected, expected), 0);
/// ```
pub fn minutes_late(expected_start: NaiveDateTime, actual_in: NaiveDateTime) -> i64 {
    (actual_in - expected_start).num_minutes().max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    /// LM-001: ten minutes after the start is ten minutes late
    #[test]
    fn test_ten_minutes_late() {
        let expected = make_datetime("2025-07-14", "08:00:00");
        let actual = make_datetime("2025-07-14", "08:10:00");
        assert_eq!(minutes_late(expected, actual), 10);
    }

    /// LM-002: exactly on time is zero minutes late
    #[test]
    fn test_exactly_on_time_is_zero() {
        let expected = make_datetime("2025-07-14", "08:00:00");
        assert_eq!(minutes_late(expected, expected), 0);
    }

    /// LM-003: arriving early clamps to zero, never a credit
    #[test]
    fn test_early_arrival_clamps_to_zero() {
        let expected = make_datetime("2025-07-14", "08:00:00");
        let actual = make_datetime("2025-07-14", "07:45:00");
        assert_eq!(minutes_late(expected, actual), 0);
    }

    /// LM-004: sub-minute lateness truncates down, never rounds
    #[test]
    fn test_sub_minute_lateness_truncates() {
        let expected = make_datetime("2025-07-14", "08:00:00");
        let actual = make_datetime("2025-07-14", "08:00:59");
        assert_eq!(minutes_late(expected, actual), 0);

        let actual = make_datetime("2025-07-14", "08:01:59");
        assert_eq!(minutes_late(expected, actual), 1);
    }

    #[test]
    fn test_hours_late_counts_all_minutes() {
        let expected = make_datetime("2025-07-14", "08:00:00");
        let actual = make_datetime("2025-07-14", "10:30:00");
        assert_eq!(minutes_late(expected, actual), 150);
    }
}
