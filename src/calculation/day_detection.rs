//! Day detection logic.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday) of a calendar date and its weekday index.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for business-day counting.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Returns true for Saturday and Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2024-01-06 is a Saturday, 2024-01-07 a Sunday, 2024-01-08 a Monday
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()), DayType::Saturday);
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()), DayType::Sunday);
/// assert_eq!(get_day_type(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap()), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Returns true if `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    get_day_type(date).is_weekend()
}

/// Returns the weekday index of `date` with 0 = Sunday … 6 = Saturday.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}
