//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the overtime
//! policy from YAML files.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::carryover_hours;
use crate::error::{EngineError, EngineResult};
use crate::holidays::HolidayCalendar;
use crate::models::{HolidayPolicy, WorkingDaysConfig};

use super::types::{CarryoverFile, PolicyConfig, PolicyFile, WeeklyHoursFile};

/// Loads and provides access to the overtime policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml        # Holiday region, cutover date, working-time defaults
/// ├── carryover.yaml     # Balances carried into a year per user
/// └── weekly_hours.yaml  # Per-user weekly hours that differ from the default
/// ```
///
/// # Example
///
/// ```no_run
/// use overtime_engine::config::ConfigLoader;
/// use overtime_engine::holidays::GermanHolidays;
///
/// let loader = ConfigLoader::load("./config/default", &GermanHolidays).unwrap();
/// println!("Holiday region: {}", loader.holiday_policy().region);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any file is missing
    /// - Any file contains invalid YAML
    /// - The holiday region is not known to `calendar`
    /// - The default working days or weekly hours are invalid
    pub fn load<P: AsRef<Path>>(path: P, calendar: &dyn HolidayCalendar) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<PolicyFile>(&path.join("policy.yaml"))?;
        let carryover = Self::load_yaml::<CarryoverFile>(&path.join("carryover.yaml"))?;
        let weekly_hours = Self::load_yaml::<WeeklyHoursFile>(&path.join("weekly_hours.yaml"))?;

        let config = PolicyConfig::new(policy, carryover.carryover, weekly_hours.weekly_hours);
        let loader = Self::from_config(config, calendar)?;

        info!(
            path = %path.display(),
            region = %loader.holiday_policy().region,
            carryover_entries = loader.config.carryover().len(),
            weekly_hours_overrides = loader.config.weekly_hours().len(),
            "Loaded overtime policy"
        );
        Ok(loader)
    }

    /// Wraps an already-built configuration after validating it.
    pub fn from_config(config: PolicyConfig, calendar: &dyn HolidayCalendar) -> EngineResult<Self> {
        let region = &config.holiday_policy().region;
        if !calendar.supports_region(region) {
            return Err(EngineError::UnknownRegion {
                code: region.clone(),
            });
        }

        let working_time = config.working_time();
        WorkingDaysConfig::from_weekly_hours(
            working_time.default_working_days.iter().copied(),
            working_time.default_weekly_hours,
            working_time.days_per_week,
        )?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();
        debug!(path = %path_str, "Reading configuration file");

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the holiday policy.
    pub fn holiday_policy(&self) -> &HolidayPolicy {
        self.config.holiday_policy()
    }

    /// Returns the default weekday indices worked per week.
    pub fn default_working_days(&self) -> &[u8] {
        &self.config.working_time().default_working_days
    }

    /// Returns the contracted weekly hours of a user.
    ///
    /// An override is used only when it is present and non-zero; every other
    /// user gets the configured default.
    pub fn weekly_hours_for(&self, user_id: &str) -> Decimal {
        self.config
            .weekly_hours()
            .iter()
            .find(|o| o.user_id == user_id)
            .map(|o| o.hours_per_week)
            .filter(|hours| !hours.is_zero())
            .unwrap_or(self.config.working_time().default_weekly_hours)
    }

    /// Builds the working-day configuration for a request.
    ///
    /// `working_days` and `weekly_hours` fall back to the configured default
    /// and the user's weekly hours when not given.
    pub fn working_days_for(
        &self,
        user_id: &str,
        working_days: Option<&[u8]>,
        weekly_hours: Option<Decimal>,
    ) -> EngineResult<WorkingDaysConfig> {
        let days = working_days.unwrap_or_else(|| self.default_working_days());
        let weekly_hours = weekly_hours.unwrap_or_else(|| self.weekly_hours_for(user_id));
        if weekly_hours < Decimal::ZERO {
            return Err(EngineError::InvalidHoursPerDay {
                value: weekly_hours,
            });
        }
        WorkingDaysConfig::from_weekly_hours(
            days.iter().copied(),
            weekly_hours,
            self.config.working_time().days_per_week,
        )
    }

    /// Returns the hours carried into `year` for a user.
    pub fn carryover_hours(&self, user_id: &str, year: i32) -> Decimal {
        carryover_hours(self.config.carryover(), user_id, year)
    }
}
