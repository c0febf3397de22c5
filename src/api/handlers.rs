//! HTTP request handlers for the Attendance Penalty Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_breakdown;
use crate::config::PenaltyPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AuditTrace, CalculationResult, ClassAttendanceRecord, PenaltyTotals,
    PeriodSelector, ScheduleEntry,
};

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a calculation request and returns the penalty breakdown result.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let today = Utc::now().date_naive();
    let policy = state.config().policy();

    match perform_calculation(request, policy, today) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                user_id = %result.user_id,
                total_penalty = %result.totals.total_penalty,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Performs the penalty calculation for one request.
fn perform_calculation(
    request: CalculationRequest,
    policy: &PenaltyPolicy,
    today: NaiveDate,
) -> EngineResult<CalculationResult> {
    let selector: Option<PeriodSelector> = request.period.map(Into::into);
    let range =
        PeriodSelector::resolve(selector.as_ref(), today, policy.rates.rolling_window_days)?;

    let user_id = request.user_id;
    let attendance: Vec<AttendanceRecord> = request
        .attendance
        .into_iter()
        .map(|r| r.into_record(&user_id))
        .collect();
    let schedules: Vec<ScheduleEntry> = request
        .schedules
        .into_iter()
        .map(|s| s.into_entry(&user_id))
        .collect();
    let class_attendance: Vec<ClassAttendanceRecord> = request
        .class_attendance
        .into_iter()
        .map(|r| r.into_record(&user_id))
        .collect();

    for schedule in &schedules {
        if schedule.end_time <= schedule.start_time {
            return Err(EngineError::InvalidTime {
                value: schedule.end_time.to_string(),
                message: format!(
                    "schedule {} ends at or before its {} start",
                    schedule.id, schedule.start_time
                ),
            });
        }
    }

    let start_time = Instant::now();
    let outcome = calculate_breakdown(
        &attendance,
        &schedules,
        &class_attendance,
        range,
        today,
        policy,
    );
    let duration_us = start_time.elapsed().as_micros() as u64;

    let breakdown = outcome.breakdown;
    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        user_id,
        date_range: breakdown.date_range,
        totals: PenaltyTotals {
            total_penalty: breakdown.total_penalty,
            late_minutes: breakdown.late_minutes,
            late_penalty: breakdown.late_penalty,
            absent_count: breakdown.absent_count,
            absent_penalty: breakdown.absent_penalty,
            recorded_penalty: breakdown.recorded_penalty,
        },
        late_records: breakdown.late_records,
        absent_records: breakdown.absent_records,
        audit_trace: AuditTrace {
            steps: outcome.audit_steps,
            warnings: outcome.warnings,
            duration_us,
        },
    })
}
