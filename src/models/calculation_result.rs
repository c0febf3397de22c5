//! Calculation result envelope.
//!
//! This module contains the [`CalculationResult`] type returned by the HTTP
//! API: the penalty breakdown plus identity, provenance, and audit fields.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AbsenceRecord, AuditTrace, DateRange, LateRecord};

/// Aggregated penalty totals for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenaltyTotals {
    /// Sum of all penalty components, in pesos.
    pub total_penalty: Decimal,
    /// Total minutes late across both attendance sources.
    pub late_minutes: i64,
    /// Late-arrival penalty, in pesos.
    pub late_penalty: Decimal,
    /// Number of absences across both attendance sources.
    pub absent_count: u32,
    /// Absence penalty, in pesos.
    pub absent_penalty: Decimal,
    /// Sum of penalty amounts already stored on daily records, in pesos.
    pub recorded_penalty: Decimal,
}

/// The complete result of a penalty calculation as returned by the API.
///
/// Wraps the breakdown with a calculation id, timestamp, and engine version
/// so payroll entries can reference the exact computation that produced a
/// deduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub user_id: String,
    /// The effective calculation window.
    pub date_range: DateRange,
    /// Aggregated penalty totals.
    pub totals: PenaltyTotals,
    /// Late-arrival rows retained for audit display.
    pub late_records: Vec<LateRecord>,
    /// Absence rows retained for audit display.
    pub absent_records: Vec<AbsenceRecord>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> CalculationResult {
        CalculationResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2025-07-31T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            user_id: "emp_001".to_string(),
            date_range: DateRange {
                start_date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
            },
            totals: PenaltyTotals {
                total_penalty: dec("255"),
                late_minutes: 15,
                late_penalty: dec("15"),
                absent_count: 1,
                absent_penalty: dec("240"),
                recorded_penalty: dec("0"),
            },
            late_records: vec![],
            absent_records: vec![],
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![],
                duration_us: 42,
            },
        }
    }

    #[test]
    fn test_calculation_result_serialization() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"user_id\":\"emp_001\""));
        assert!(json.contains("\"date_range\":{"));
        assert!(json.contains("\"totals\":{"));
        assert!(json.contains("\"audit_trace\":{"));
    }

    #[test]
    fn test_calculation_result_deserialization() {
        let json = serde_json::to_string(&sample_result()).unwrap();
        let result: CalculationResult = serde_json::from_str(&json).unwrap();

        assert_eq!(result.user_id, "emp_001");
        assert_eq!(result.totals.total_penalty, dec("255"));
        assert!(result.late_records.is_empty());
    }

    #[test]
    fn test_totals_serialize_decimals_as_strings() {
        let totals = PenaltyTotals {
            total_penalty: dec("255"),
            late_minutes: 15,
            late_penalty: dec("15"),
            absent_count: 1,
            absent_penalty: dec("240"),
            recorded_penalty: dec("0"),
        };

        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"total_penalty\":\"255\""));
        assert!(json.contains("\"late_minutes\":15"));
        assert!(json.contains("\"absent_count\":1"));
    }
}
