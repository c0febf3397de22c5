//! Pay period models.
//!
//! This module contains the [`DateRange`] and [`PeriodSelector`] types used
//! to define the calculation window for penalty calculations.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive calendar date range.
///
/// # Example
///
/// ```
/// use penalty_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange {
///     start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
/// };
///
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap()));
/// assert!(!range.contains_date(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// The start date of the range (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the range (inclusive).
    pub end_date: NaiveDate,
}

impl DateRange {
    /// Checks if a given date falls within this range.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Selects the calculation window for a penalty calculation.
///
/// A calendar month resolves to its first through last day. An explicit
/// range is used as-is. When no selector is given, the engine falls back to
/// a rolling window ending today (see [`PeriodSelector::resolve`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PeriodSelector {
    /// A calendar month, e.g. `{"year": 2025, "month": 7}`.
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

impl PeriodSelector {
    /// Resolves an optional selector to an effective date range.
    ///
    /// * `Some(Month)` resolves to the first through last day of the month.
    /// * `Some(Range)` is used as-is after validating `start <= end`.
    /// * `None` resolves to the rolling window
    ///   `today - window_days` through `today`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPeriod` when the month is out of range or the explicit
    /// range is inverted.
    pub fn resolve(
        selector: Option<&PeriodSelector>,
        today: NaiveDate,
        window_days: i64,
    ) -> EngineResult<DateRange> {
        match selector {
            Some(PeriodSelector::Month { year, month }) => month_range(*year, *month),
            Some(PeriodSelector::Range {
                start_date,
                end_date,
            }) => {
                if start_date > end_date {
                    return Err(EngineError::InvalidPeriod {
                        message: format!(
                            "start date {} is after end date {}",
                            start_date, end_date
                        ),
                    });
                }
                Ok(DateRange {
                    start_date: *start_date,
                    end_date: *end_date,
                })
            }
            None => Ok(DateRange {
                start_date: today - Duration::days(window_days),
                end_date: today,
            }),
        }
    }
}

/// Resolves a calendar month to its first-through-last-day range.
fn month_range(year: i32, month: u32) -> EngineResult<DateRange> {
    let start_date =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| EngineError::InvalidPeriod {
            message: format!("{}-{:02} is not a valid calendar month", year, month),
        })?;

    let first_of_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| EngineError::InvalidPeriod {
        message: format!("{}-{:02} has no following month", year, month),
    })?;

    let end_date = first_of_next.pred_opt().ok_or_else(|| EngineError::InvalidPeriod {
        message: format!("{}-{:02} has no last day", year, month),
    })?;

    Ok(DateRange {
        start_date,
        end_date,
    })
}
