//! Business-day counting.
//!
//! Counts the days of a range the user is expected to work and converts
//! them into expected seconds.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::holidays::HolidayCalendar;
use crate::models::{AuditStep, DateRange, HolidayPolicy};

use super::day_detection::is_weekend;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 3600;

/// The result of counting business days, including the audit step.
#[derive(Debug, Clone)]
pub struct BusinessDaysResult {
    /// Number of business days in the range.
    pub business_days: u32,
    /// `business_days * hours_per_day * 3600`.
    pub business_seconds: Decimal,
    /// Holidays that were removed from the count.
    pub excluded_holidays: Vec<NaiveDate>,
    /// Holidays on or before the cutover date that still counted.
    pub counted_holidays: Vec<NaiveDate>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts business days in `range` and the seconds they are worth.
///
/// A day counts unless it is a Saturday or Sunday, or it is a public holiday
/// in the policy's region that lies strictly after the cutover date.
/// Holidays on or before the cutover date still count.
///
/// The count does not look at the configured working days: every weekday of
/// the range is owed `hours_per_day`.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::count_business_days;
/// use overtime_engine::holidays::GermanHolidays;
/// use overtime_engine::models::{DateRange, HolidayPolicy};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
/// ).unwrap();
/// let policy = HolidayPolicy { region: "BY".to_string(), cutover_date: None };
///
/// // Mon 1 Jan is New Year's Day and Sat 6 Jan Epiphany; the weekend drops out too
/// let result = count_business_days(&range, Decimal::from(8), &policy, &GermanHolidays, 1);
/// assert_eq!(result.business_days, 4);
/// assert_eq!(result.business_seconds, Decimal::from(4 * 8 * 3600));
/// ```
pub fn count_business_days(
    range: &DateRange,
    hours_per_day: Decimal,
    policy: &HolidayPolicy,
    calendar: &dyn HolidayCalendar,
    step_number: u32,
) -> BusinessDaysResult {
    let mut business_days: u32 = 0;
    let mut weekend_days: u32 = 0;
    let mut excluded_holidays = Vec::new();
    let mut counted_holidays = Vec::new();

    for date in range.days() {
        if is_weekend(date) {
            weekend_days += 1;
            continue;
        }
        if calendar.is_holiday(date, &policy.region) {
            if policy.excludes_holiday_on(date) {
                excluded_holidays.push(date);
                continue;
            }
            counted_holidays.push(date);
        }
        business_days += 1;
    }

    // Cannot saturate for hours_per_day within 0..=24
    let business_seconds = Decimal::from(business_days)
        .saturating_mul(hours_per_day)
        .saturating_mul(Decimal::from(SECONDS_PER_HOUR));

    let audit_step = AuditStep {
        step_number,
        rule_id: "business_day_count".to_string(),
        rule_name: "Business Day Count".to_string(),
        input: serde_json::json!({
            "start_date": range.start_date.to_string(),
            "end_date": range.end_date.to_string(),
            "region": policy.region,
            "cutover_date": policy.cutover_date.map(|d| d.to_string()),
            "hours_per_day": hours_per_day.normalize().to_string()
        }),
        output: serde_json::json!({
            "calendar_days": range.day_count(),
            "weekend_days": weekend_days,
            "excluded_holidays": excluded_holidays.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
            "counted_holidays": counted_holidays.iter().map(|d| d.to_string()).collect::<Vec<_>>(),
            "business_days": business_days,
            "business_seconds": business_seconds.normalize().to_string()
        }),
        reasoning: format!(
            "{} of {} days are business days ({} weekend days, {} holidays excluded, {} holidays on or before cutover counted): {} days x {}h = {}s",
            business_days,
            range.day_count(),
            weekend_days,
            excluded_holidays.len(),
            counted_holidays.len(),
            business_days,
            hours_per_day.normalize(),
            business_seconds.normalize()
        ),
    };

    BusinessDaysResult {
        business_days,
        business_seconds,
        excluded_holidays,
        counted_holidays,
        audit_step,
    }
}
