//! Overtime calculation.
//!
//! This module composes business-day counting and missing-date detection
//! into the overtime balance of one user over a date range.

use rust_decimal::Decimal;

use crate::holidays::HolidayCalendar;
use crate::models::{
    AuditStep, AuditWarning, DateRange, HolidayPolicy, OvertimeResult, ReportGroup, SummaryReport,
    WorkingDaysConfig,
};

use super::business_days::count_business_days;
use super::missing_dates::find_missing_dates;

/// The outcome of an overtime calculation with its audit steps and warnings.
#[derive(Debug, Clone)]
pub struct OvertimeCalculation {
    /// The calculated result.
    pub result: OvertimeResult,
    /// The audit steps recording this calculation, in order.
    pub audit_steps: Vec<AuditStep>,
    /// Warnings about the report contents.
    pub warnings: Vec<AuditWarning>,
}

/// Calculates the overtime balance of a report group over a range.
///
/// The steps are:
/// 1. Count business days and the seconds they are worth
/// 2. Subtract them from the logged seconds of the group
/// 3. Find working days without an entry
///
/// The calculation is pure; it never fails for validated inputs. Report
/// entries that are not ISO dates or fall outside the range only raise
/// warnings.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::calculate_overtime;
/// use overtime_engine::holidays::GermanHolidays;
/// use overtime_engine::models::{
///     DateRange, DaySummary, HolidayPolicy, ReportGroup, WorkingDaysConfig,
/// };
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let group = ReportGroup {
///     duration: 3 * 8 * 3600,
///     amount: None,
///     name: "Jane Doe".to_string(),
///     children: ["2024-01-08", "2024-01-09", "2024-01-10"]
///         .iter()
///         .map(|d| DaySummary { name: d.to_string(), duration: 8 * 3600 })
///         .collect(),
/// };
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
/// ).unwrap();
/// let working_days = WorkingDaysConfig::new([1, 2, 3, 4, 5], Decimal::from(8)).unwrap();
/// let policy = HolidayPolicy { region: "BY".to_string(), cutover_date: None };
///
/// let calculation = calculate_overtime(&group, &range, &working_days, &policy, &GermanHolidays, 1);
///
/// assert_eq!(calculation.result.overtime_seconds, Decimal::from(-2 * 8 * 3600));
/// assert_eq!(calculation.result.missing_dates.len(), 2);
/// ```
pub fn calculate_overtime(
    group: &ReportGroup,
    range: &DateRange,
    working_days: &WorkingDaysConfig,
    policy: &HolidayPolicy,
    calendar: &dyn HolidayCalendar,
    start_step_number: u32,
) -> OvertimeCalculation {
    let mut audit_steps = Vec::new();
    let mut current_step = start_step_number;

    // Step 1: Expected time
    let business = count_business_days(
        range,
        working_days.hours_per_day,
        policy,
        calendar,
        current_step,
    );
    audit_steps.push(business.audit_step);
    current_step += 1;

    // Step 2: Delta against logged time
    let allocated_seconds = Decimal::from(group.duration);
    let overtime_seconds = allocated_seconds - business.business_seconds;
    audit_steps.push(AuditStep {
        step_number: current_step,
        rule_id: "overtime_delta".to_string(),
        rule_name: "Overtime Delta".to_string(),
        input: serde_json::json!({
            "allocated_seconds": allocated_seconds.to_string(),
            "business_seconds": business.business_seconds.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_seconds": overtime_seconds.normalize().to_string()
        }),
        reasoning: format!(
            "{}s logged - {}s expected = {}s ({})",
            allocated_seconds,
            business.business_seconds.normalize(),
            overtime_seconds.normalize(),
            if overtime_seconds > Decimal::ZERO {
                "overtime"
            } else if overtime_seconds < Decimal::ZERO {
                "undertime"
            } else {
                "balanced"
            }
        ),
    });
    current_step += 1;

    // Step 3: Working days without entries
    let missing = find_missing_dates(
        group,
        range,
        working_days,
        &policy.region,
        calendar,
        current_step,
    );
    audit_steps.push(missing.audit_step);

    OvertimeCalculation {
        result: OvertimeResult {
            allocated_seconds,
            business_seconds: business.business_seconds,
            overtime_seconds,
            missing_dates: missing.missing_dates,
        },
        audit_steps,
        warnings: check_report_entries(group, range),
    }
}

/// Calculates overtime for a whole report, or `None` if it has no data.
///
/// A report without any user group means nothing was logged for the user
/// in the range. That is "no result", which is different from a zero
/// balance, so the calculation is skipped.
pub fn calculate_overtime_for_report(
    report: &SummaryReport,
    range: &DateRange,
    working_days: &WorkingDaysConfig,
    policy: &HolidayPolicy,
    calendar: &dyn HolidayCalendar,
    start_step_number: u32,
) -> Option<OvertimeCalculation> {
    let group = report.primary_group()?;
    Some(calculate_overtime(
        group,
        range,
        working_days,
        policy,
        calendar,
        start_step_number,
    ))
}

/// Calculates the overtime result without audit information.
pub fn compute(
    group: &ReportGroup,
    range: &DateRange,
    working_days: &WorkingDaysConfig,
    policy: &HolidayPolicy,
    calendar: &dyn HolidayCalendar,
) -> OvertimeResult {
    calculate_overtime(group, range, working_days, policy, calendar, 1).result
}

fn check_report_entries(group: &ReportGroup, range: &DateRange) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();
    for entry in &group.children {
        match entry.date() {
            None => warnings.push(AuditWarning {
                code: "UNRECOGNISED_ENTRY_NAME".to_string(),
                message: format!(
                    "Report entry '{}' is not an ISO date and cannot match a working day",
                    entry.name
                ),
                severity: "medium".to_string(),
            }),
            Some(date) if !range.contains_date(date) => warnings.push(AuditWarning {
                code: "ENTRY_OUTSIDE_RANGE".to_string(),
                message: format!(
                    "Report entry for {} lies outside {} to {}",
                    date, range.start_date, range.end_date
                ),
                severity: "low".to_string(),
            }),
            Some(_) => {}
        }
    }
    warnings
}
