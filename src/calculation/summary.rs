//! Hour summary of an overtime result.

use rust_decimal::Decimal;

use crate::models::{OvertimeResult, OvertimeSummary};

use super::business_days::SECONDS_PER_HOUR;

/// Converts a number of seconds into hours.
pub fn seconds_to_hours(seconds: Decimal) -> Decimal {
    seconds / Decimal::from(SECONDS_PER_HOUR)
}

/// Converts a raw result into hours and adds the carried-over balance.
///
/// `is_over` is true only if the total balance is strictly positive.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::summarize;
/// use overtime_engine::models::OvertimeResult;
/// use rust_decimal::Decimal;
///
/// let result = OvertimeResult {
///     allocated_seconds: Decimal::from(136_800),
///     business_seconds: Decimal::from(144_000),
///     overtime_seconds: Decimal::from(-7_200),
///     missing_dates: vec![],
/// };
/// let summary = summarize(&result, Decimal::from(2));
///
/// assert_eq!(summary.overtime_hours, Decimal::from(-2));
/// assert_eq!(summary.total_overtime_hours, Decimal::ZERO);
/// assert!(!summary.is_over);
/// ```
pub fn summarize(result: &OvertimeResult, carryover_hours: Decimal) -> OvertimeSummary {
    let overtime_hours = seconds_to_hours(result.overtime_seconds);
    let total_overtime_hours = overtime_hours + carryover_hours;

    OvertimeSummary {
        business_hours: seconds_to_hours(result.business_seconds),
        allocated_hours: seconds_to_hours(result.allocated_seconds),
        overtime_hours,
        carryover_hours,
        total_overtime_hours,
        is_over: total_overtime_hours > Decimal::ZERO,
        missing_dates: result.missing_dates.clone(),
    }
}
