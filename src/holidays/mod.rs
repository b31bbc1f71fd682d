//! Public holiday calendars.
//!
//! The overtime calculation asks a [`HolidayCalendar`] whether a date is a
//! public holiday in a region. Two calendars are provided: [`GermanHolidays`],
//! which computes the statutory holidays of every German state, and
//! [`FixedHolidays`], which answers from an explicit list.

mod fixed;
mod german;

use chrono::NaiveDate;

use crate::models::PublicHoliday;

pub use fixed::FixedHolidays;
pub use german::{GermanHolidays, GermanRegion, easter_sunday};

/// A source of public holidays per region.
pub trait HolidayCalendar: Send + Sync {
    /// Returns true if `date` is a public holiday in `region`.
    fn is_holiday(&self, date: NaiveDate, region: &str) -> bool;

    /// Lists the holidays of `year` in `region`, ordered by date.
    fn holidays_in_year(&self, year: i32, region: &str) -> Vec<PublicHoliday>;

    /// Returns true if the calendar knows the given region code.
    fn supports_region(&self, region: &str) -> bool;
}
