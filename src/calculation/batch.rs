//! Store-driven calculation entry points.
//!
//! These functions resolve the calculation window, fetch records through an
//! [`AttendanceStore`], and delegate to the pure breakdown calculation. Fetch
//! failures propagate as errors — a zero breakdown always means genuinely
//! clean attendance, never a swallowed failure.

use chrono::NaiveDate;

use crate::config::PenaltyPolicy;
use crate::error::EngineResult;
use crate::models::{PenaltyBreakdown, PeriodSelector};
use crate::store::{AttendanceStore, FetchPolicy, fetch_with_retry};

use super::calculate_breakdown;

/// Calculates the penalty breakdown for one employee from stored data.
///
/// Resolves the effective date range from `selector` (calendar month,
/// explicit range, or the policy's rolling window when `None`), fetches the
/// three record sets with bounded retries, and runs the pure calculation.
///
/// # Arguments
///
/// * `store` - The persistence collaborator.
/// * `policy` - The penalty policy to apply.
/// * `fetch_policy` - Retry bound for store fetches.
/// * `user_id` - The employee to calculate for.
/// * `selector` - Optional pay period.
/// * `today` - The calculation date (end of the default rolling window and
///   placeholder occurrence date for schedules without history).
///
/// # Errors
///
/// Returns `InvalidPeriod` for an unresolvable selector and `DataFetch` when
/// a fetch still fails after retries.
pub fn calculate_for_user<S: AttendanceStore + ?Sized>(
    store: &S,
    policy: &PenaltyPolicy,
    fetch_policy: &FetchPolicy,
    user_id: &str,
    selector: Option<&PeriodSelector>,
    today: NaiveDate,
) -> EngineResult<PenaltyBreakdown> {
    let range = PeriodSelector::resolve(selector, today, policy.rates.rolling_window_days)?;

    let attendance = fetch_with_retry(fetch_policy, || store.fetch_attendance(user_id, &range))?;
    let schedules = fetch_with_retry(fetch_policy, || store.fetch_schedules(user_id))?;
    let class_attendance =
        fetch_with_retry(fetch_policy, || store.fetch_class_attendance(user_id, &range))?;

    let outcome = calculate_breakdown(
        &attendance,
        &schedules,
        &class_attendance,
        range,
        today,
        policy,
    );

    Ok(outcome.breakdown)
}

/// Calculates penalty breakdowns for a batch of employees.
///
/// Runs sequentially, one employee at a time; each computation is independent
/// and side-effect-free, so callers may instead fan the user ids out across
/// threads — there is no shared accumulator state to protect. A failure for
/// one employee does not stop the batch.
pub fn calculate_batch<S: AttendanceStore + ?Sized>(
    store: &S,
    policy: &PenaltyPolicy,
    fetch_policy: &FetchPolicy,
    user_ids: &[String],
    selector: Option<&PeriodSelector>,
    today: NaiveDate,
) -> Vec<(String, EngineResult<PenaltyBreakdown>)> {
    user_ids
        .iter()
        .map(|user_id| {
            let result =
                calculate_for_user(store, policy, fetch_policy, user_id, selector, today);
            (user_id.clone(), result)
        })
        .collect()
}
