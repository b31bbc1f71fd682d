//! Working-day configuration.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The most hours a single business day can be worth.
pub const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The weekdays a user is expected to work and the hours owed per business day.
///
/// Weekday indices follow the 0 = Sunday … 6 = Saturday convention.
///
/// # Example
///
/// ```
/// use overtime_engine::models::WorkingDaysConfig;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let config = WorkingDaysConfig::new([1, 2, 3, 4, 5], Decimal::from(8)).unwrap();
///
/// // 2024-01-01 is a Monday, 2024-01-06 a Saturday
/// assert!(config.is_working_day(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
/// assert!(!config.is_working_day(NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingDaysConfig {
    /// Weekday indices (0 = Sunday) considered working days.
    pub working_days: BTreeSet<u8>,
    /// Expected hours per business day.
    pub hours_per_day: Decimal,
}

impl WorkingDaysConfig {
    /// Creates a validated working-day configuration.
    ///
    /// Returns an error if no working day is given, any index is above 6,
    /// or `hours_per_day` lies outside `0..=24`.
    pub fn new(
        working_days: impl IntoIterator<Item = u8>,
        hours_per_day: Decimal,
    ) -> EngineResult<Self> {
        let working_days: BTreeSet<u8> = working_days.into_iter().collect();

        if working_days.is_empty() {
            return Err(EngineError::InvalidWorkingDays {
                message: "at least one working day is required".to_string(),
            });
        }
        if let Some(invalid) = working_days.iter().find(|&&day| day > 6) {
            return Err(EngineError::InvalidWorkingDays {
                message: format!("weekday index {} is outside 0..=6", invalid),
            });
        }
        if hours_per_day < Decimal::ZERO || hours_per_day > MAX_HOURS_PER_DAY {
            return Err(EngineError::InvalidHoursPerDay {
                value: hours_per_day,
            });
        }

        Ok(Self {
            working_days,
            hours_per_day,
        })
    }

    /// Builds a configuration from contracted weekly hours.
    ///
    /// Daily hours are `weekly_hours / days_per_week`, independent of how
    /// many working days are selected.
    pub fn from_weekly_hours(
        working_days: impl IntoIterator<Item = u8>,
        weekly_hours: Decimal,
        days_per_week: u32,
    ) -> EngineResult<Self> {
        if days_per_week == 0 {
            return Err(EngineError::InvalidWorkingDays {
                message: "days per week must be positive".to_string(),
            });
        }
        Self::new(working_days, weekly_hours / Decimal::from(days_per_week))
    }

    /// Checks whether the weekday of `date` is one of the configured working days.
    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        let index = date.weekday().num_days_from_sunday() as u8;
        self.working_days.contains(&index)
    }
}
