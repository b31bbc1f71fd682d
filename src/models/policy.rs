//! Policy models: holiday policy, public holidays and per-user tables.
//!
//! These are the values the overtime calculation is parameterised with.
//! They are loaded from configuration rather than embedded in code.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which public holidays reduce the expected working time.
///
/// Holidays on or before `cutover_date` still count as business days in the
/// business-day count. Without a cutover date every holiday is excluded.
///
/// # Example
///
/// ```
/// use overtime_engine::models::HolidayPolicy;
/// use chrono::NaiveDate;
///
/// let policy = HolidayPolicy {
///     region: "BY".to_string(),
///     cutover_date: NaiveDate::from_ymd_opt(2022, 6, 30),
/// };
///
/// assert!(!policy.excludes_holiday_on(NaiveDate::from_ymd_opt(2022, 6, 30).unwrap()));
/// assert!(policy.excludes_holiday_on(NaiveDate::from_ymd_opt(2022, 7, 1).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPolicy {
    /// Holiday region code (e.g. "BY" for Bavaria).
    pub region: String,
    /// Holidays are only excluded from the business-day count strictly after this date.
    #[serde(default)]
    pub cutover_date: Option<NaiveDate>,
}

impl HolidayPolicy {
    /// Returns true if a holiday on `date` is excluded from the business-day count.
    pub fn excludes_holiday_on(&self, date: NaiveDate) -> bool {
        self.cutover_date.is_none_or(|cutover| date > cutover)
    }
}

/// Represents a single public holiday.
///
/// # Example
///
/// ```
/// use overtime_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 10, 3).unwrap(),
///     name: "Tag der Deutschen Einheit".to_string(),
///     region: "BY".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
    /// The region where this holiday applies (e.g. "BY").
    pub region: String,
}

/// Overtime or undertime carried over from a prior period.
///
/// Positive hours are overtime, negative hours are missing time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarryoverEntry {
    /// The user the balance belongs to.
    pub user_id: String,
    /// The calendar year the balance is carried into.
    pub year: i32,
    /// Signed balance in hours.
    pub overtime_hours: Decimal,
}

/// Contracted weekly hours for a user who does not work the default week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHoursOverride {
    /// The user the override applies to.
    pub user_id: String,
    /// Contracted hours per week.
    pub hours_per_week: Decimal,
}
