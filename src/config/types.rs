//! Configuration types for the overtime policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{CarryoverEntry, HolidayPolicy, WeeklyHoursOverride};

/// Holiday section of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaySection {
    /// Holiday region code (e.g. "BY").
    pub region: String,
    /// Holidays only reduce expected time strictly after this date.
    #[serde(default)]
    pub cutover_date: Option<NaiveDate>,
}

/// Working-time defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingTimeSection {
    /// Weekly hours for users without an override.
    #[serde(default = "default_weekly_hours")]
    pub default_weekly_hours: Decimal,
    /// Divisor turning weekly hours into hours per business day.
    #[serde(default = "default_days_per_week")]
    pub days_per_week: u32,
    /// Weekday indices (0 = Sunday) worked when a request does not say otherwise.
    #[serde(default = "default_working_days")]
    pub default_working_days: Vec<u8>,
}

fn default_weekly_hours() -> Decimal {
    Decimal::from(40)
}

fn default_days_per_week() -> u32 {
    5
}

fn default_working_days() -> Vec<u8> {
    vec![1, 2, 3, 4, 5]
}

/// Policy configuration from policy.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Holiday policy.
    pub holidays: HolidaySection,
    /// Working-time defaults.
    pub working_time: WorkingTimeSection,
}

/// Carryover table from carryover.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CarryoverFile {
    /// Carried-over balances.
    #[serde(default)]
    pub carryover: Vec<CarryoverEntry>,
}

/// Weekly-hours override table from weekly_hours.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyHoursFile {
    /// Per-user weekly hours.
    #[serde(default)]
    pub weekly_hours: Vec<WeeklyHoursOverride>,
}

/// The complete overtime policy loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PolicyConfig {
    holiday_policy: HolidayPolicy,
    working_time: WorkingTimeSection,
    carryover: Vec<CarryoverEntry>,
    weekly_hours: Vec<WeeklyHoursOverride>,
}

impl PolicyConfig {
    /// Creates a new PolicyConfig from its component parts.
    pub fn new(
        policy: PolicyFile,
        carryover: Vec<CarryoverEntry>,
        weekly_hours: Vec<WeeklyHoursOverride>,
    ) -> Self {
        Self {
            holiday_policy: HolidayPolicy {
                region: policy.holidays.region,
                cutover_date: policy.holidays.cutover_date,
            },
            working_time: policy.working_time,
            carryover,
            weekly_hours,
        }
    }

    /// Returns the holiday policy.
    pub fn holiday_policy(&self) -> &HolidayPolicy {
        &self.holiday_policy
    }

    /// Returns the working-time defaults.
    pub fn working_time(&self) -> &WorkingTimeSection {
        &self.working_time
    }

    /// Returns the carryover table.
    pub fn carryover(&self) -> &[CarryoverEntry] {
        &self.carryover
    }

    /// Returns the weekly-hours override table.
    pub fn weekly_hours(&self) -> &[WeeklyHoursOverride] {
        &self.weekly_hours
    }
}
