//! Overtime result models.
//!
//! This module contains the [`OvertimeResult`] produced by the calculation,
//! the hour-based [`OvertimeSummary`] shown to users, and the [`OvertimeReport`]
//! envelope with its audit trace.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::DateRange;

/// The raw outcome of an overtime calculation, in seconds.
///
/// # Example
///
/// ```
/// use overtime_engine::models::OvertimeResult;
/// use rust_decimal::Decimal;
///
/// let result = OvertimeResult {
///     allocated_seconds: Decimal::from(150_000),
///     business_seconds: Decimal::from(144_000),
///     overtime_seconds: Decimal::from(6_000),
///     missing_dates: vec![],
/// };
/// assert_eq!(result.overtime_seconds, result.allocated_seconds - result.business_seconds);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Seconds logged by the user over the range.
    pub allocated_seconds: Decimal,
    /// Seconds the user was expected to work over the range.
    pub business_seconds: Decimal,
    /// `allocated_seconds - business_seconds`; negative means undertime.
    pub overtime_seconds: Decimal,
    /// Expected working days without any logged entry, ascending.
    pub missing_dates: Vec<NaiveDate>,
}

/// The overtime balance in hours, including carryover from prior periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSummary {
    /// Expected hours over the range.
    pub business_hours: Decimal,
    /// Logged hours over the range.
    pub allocated_hours: Decimal,
    /// Overtime hours over the range alone.
    pub overtime_hours: Decimal,
    /// Balance carried over from prior periods.
    pub carryover_hours: Decimal,
    /// `overtime_hours + carryover_hours`.
    pub total_overtime_hours: Decimal,
    /// True if the total balance is strictly positive.
    pub is_over: bool,
    /// Expected working days without any logged entry, ascending.
    pub missing_dates: Vec<NaiveDate>,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag suspicious input that does not change the result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The envelope returned for an overtime request.
///
/// `result` and `summary` are `None` when the report contained no data for
/// the user and range.
///
/// # Example
///
/// ```
/// use overtime_engine::models::{AuditTrace, DateRange, OvertimeReport};
/// use chrono::{NaiveDate, Utc};
/// use uuid::Uuid;
///
/// let report = OvertimeReport {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     user_id: "6180ff00f9914c556e304294".to_string(),
///     range: DateRange::new(
///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     ).unwrap(),
///     result: None,
///     summary: None,
///     audit_trace: AuditTrace::default(),
/// };
/// assert!(report.result.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The user the calculation is for.
    pub user_id: String,
    /// The calculated range.
    pub range: DateRange,
    /// The raw result in seconds.
    pub result: Option<OvertimeResult>,
    /// The hour summary including carryover.
    pub summary: Option<OvertimeSummary>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
