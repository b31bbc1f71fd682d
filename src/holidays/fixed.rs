//! Holiday calendar backed by an explicit list.

use chrono::{Datelike, NaiveDate};

use crate::models::PublicHoliday;

use super::HolidayCalendar;

/// A calendar backed by an explicit list of holidays.
///
/// Region codes are compared case-insensitively.
///
/// # Example
///
/// ```
/// use overtime_engine::holidays::{FixedHolidays, HolidayCalendar};
/// use overtime_engine::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let calendar = FixedHolidays::new(vec![PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(),
///     name: "Australia Day".to_string(),
///     region: "AU".to_string(),
/// }]);
///
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(), "au"));
/// assert!(!calendar.is_holiday(NaiveDate::from_ymd_opt(2024, 1, 26).unwrap(), "NZ"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FixedHolidays {
    holidays: Vec<PublicHoliday>,
}

impl FixedHolidays {
    /// Creates a calendar from a list of holidays.
    pub fn new(mut holidays: Vec<PublicHoliday>) -> Self {
        holidays.sort_by(|a, b| a.date.cmp(&b.date));
        Self { holidays }
    }

    fn in_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a PublicHoliday> + 'a {
        self.holidays
            .iter()
            .filter(move |h| h.region.eq_ignore_ascii_case(region))
    }
}

impl HolidayCalendar for FixedHolidays {
    fn is_holiday(&self, date: NaiveDate, region: &str) -> bool {
        self.in_region(region).any(|h| h.date == date)
    }

    fn holidays_in_year(&self, year: i32, region: &str) -> Vec<PublicHoliday> {
        self.in_region(region)
            .filter(|h| h.date.year() == year)
            .cloned()
            .collect()
    }

    fn supports_region(&self, region: &str) -> bool {
        self.in_region(region).next().is_some()
    }
}
