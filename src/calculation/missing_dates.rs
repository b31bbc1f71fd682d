//! Missing-date detection.
//!
//! Finds the expected working days of a range on which the user logged
//! nothing.

use chrono::NaiveDate;

use crate::holidays::HolidayCalendar;
use crate::models::{AuditStep, DateRange, ReportGroup, WorkingDaysConfig};

use super::day_detection::{is_weekend, weekday_index};

/// The result of missing-date detection, including the audit step.
#[derive(Debug, Clone)]
pub struct MissingDatesResult {
    /// Working days without a report entry, ascending.
    pub missing_dates: Vec<NaiveDate>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Lists the days of `range` that should have a time entry but do not.
///
/// A date is missing when it is not a weekend, not a public holiday in
/// `region`, is one of the configured working days, and no day entry of
/// `group` is named with its ISO date.
///
/// Holidays are skipped here regardless of any cutover date, unlike
/// [`count_business_days`](super::count_business_days).
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::find_missing_dates;
/// use overtime_engine::holidays::GermanHolidays;
/// use overtime_engine::models::{DateRange, DaySummary, ReportGroup, WorkingDaysConfig};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let group = ReportGroup {
///     duration: 28800,
///     amount: None,
///     name: "Jane Doe".to_string(),
///     children: vec![DaySummary { name: "2024-01-08".to_string(), duration: 28800 }],
/// };
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
/// ).unwrap();
/// let working_days = WorkingDaysConfig::new([1, 2, 3, 4, 5], Decimal::from(8)).unwrap();
///
/// let result = find_missing_dates(&group, &range, &working_days, "BY", &GermanHolidays, 1);
/// assert_eq!(result.missing_dates, vec![NaiveDate::from_ymd_opt(2024, 1, 9).unwrap()]);
/// ```
pub fn find_missing_dates(
    group: &ReportGroup,
    range: &DateRange,
    working_days: &WorkingDaysConfig,
    region: &str,
    calendar: &dyn HolidayCalendar,
    step_number: u32,
) -> MissingDatesResult {
    let logged = group.entry_names();

    let missing_dates: Vec<NaiveDate> = range
        .days()
        .filter(|&date| {
            !is_weekend(date)
                && !calendar.is_holiday(date, region)
                && !logged.contains(date.format("%Y-%m-%d").to_string().as_str())
                && working_days.is_working_day(date)
        })
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "missing_dates".to_string(),
        rule_name: "Missing Time Entries".to_string(),
        input: serde_json::json!({
            "start_date": range.start_date.to_string(),
            "end_date": range.end_date.to_string(),
            "region": region,
            "working_days": working_days.working_days,
            "logged_days": group.children.len()
        }),
        output: serde_json::json!({
            "missing_dates": missing_dates.iter().map(|d| d.to_string()).collect::<Vec<_>>()
        }),
        reasoning: if missing_dates.is_empty() {
            "Every expected working day has a time entry".to_string()
        } else {
            format!(
                "{} expected working day(s) have no time entry: {}",
                missing_dates.len(),
                missing_dates
                    .iter()
                    .map(|d| format!("{} ({})", d, weekday_name(weekday_index(*d))))
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        },
    };

    MissingDatesResult {
        missing_dates,
        audit_step,
    }
}

fn weekday_name(index: u8) -> &'static str {
    match index {
        0 => "Sun",
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        _ => "Sat",
    }
}
