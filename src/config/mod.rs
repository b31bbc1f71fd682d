//! Configuration loading and management for the Overtime Engine.
//!
//! This module loads the overtime policy from YAML files: the holiday region
//! and cutover date, working-time defaults, the carryover table and the
//! per-user weekly-hours overrides.
//!
//! # Example
//!
//! ```no_run
//! use overtime_engine::config::ConfigLoader;
//! use overtime_engine::holidays::GermanHolidays;
//!
//! let config = ConfigLoader::load("./config/default", &GermanHolidays).unwrap();
//! println!("Weekly hours: {}", config.weekly_hours_for("6180ff00f9914c556e304294"));
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CarryoverFile, HolidaySection, PolicyConfig, PolicyFile, WeeklyHoursFile, WorkingTimeSection,
};
