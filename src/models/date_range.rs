//! Date range model.
//!
//! This module contains the [`DateRange`] type that bounds an overtime
//! calculation. Both ends are inclusive and always aligned to whole days.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An inclusive range of calendar days.
///
/// The range is stored as whole dates, so a range built from partial-day
/// timestamps never clips its first or last business day.
///
/// # Example
///
/// ```
/// use overtime_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
/// ).unwrap();
///
/// assert_eq!(range.day_count(), 5);
/// assert!(range.contains_date(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
}

/// Unvalidated wire form of [`DateRange`].
#[derive(Deserialize)]
struct RawDateRange {
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = EngineError;

    fn try_from(raw: RawDateRange) -> EngineResult<Self> {
        Self::new(raw.start_date, raw.end_date)
    }
}

impl DateRange {
    /// Creates a range from two dates.
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `end` is before `start`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InvalidDateRange { start, end });
        }
        Ok(Self {
            start_date: start,
            end_date: end,
        })
    }

    /// Creates a range from two timestamps, truncating both to their day.
    ///
    /// The start is moved back to 00:00:00 and the end forward to 23:59:59
    /// of their respective days before the range is built.
    ///
    /// # Example
    ///
    /// ```
    /// use overtime_engine::models::DateRange;
    /// use chrono::NaiveDateTime;
    ///
    /// let start = NaiveDateTime::parse_from_str("2024-01-01 14:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let end = NaiveDateTime::parse_from_str("2024-01-05 08:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let range = DateRange::from_datetimes(start, end).unwrap();
    ///
    /// assert_eq!(range.start_of_range().to_string(), "2024-01-01 00:00:00");
    /// assert_eq!(range.end_of_range().to_string(), "2024-01-05 23:59:59");
    /// ```
    pub fn from_datetimes(start: NaiveDateTime, end: NaiveDateTime) -> EngineResult<Self> {
        Self::new(start.date(), end.date())
    }

    /// Returns the first instant of the range (00:00:00 on the start date).
    pub fn start_of_range(&self) -> NaiveDateTime {
        self.start_date.and_time(NaiveTime::MIN)
    }

    /// Returns the last whole second of the range (23:59:59 on the end date).
    pub fn end_of_range(&self) -> NaiveDateTime {
        let last_second = NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN);
        self.end_date.and_time(last_second)
    }

    /// Checks if a given date falls within this range (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Returns every date of the range in ascending order, one per day.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let end = self.end_date;
        std::iter::successors(Some(self.start_date), |date| date.succ_opt())
            .take_while(move |date| *date <= end)
    }

    /// Returns the number of calendar days in the range.
    pub fn day_count(&self) -> u32 {
        let days = (self.end_date - self.start_date).num_days() + 1;
        u32::try_from(days.max(0)).unwrap_or(u32::MAX)
    }
}
