//! Application state for the Overtime Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::holidays::HolidayCalendar;

/// Shared application state.
///
/// Holds the loaded overtime policy and the holiday calendar it was
/// validated against.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calendar: Arc<dyn HolidayCalendar>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: ConfigLoader, calendar: impl HolidayCalendar + 'static) -> Self {
        Self {
            config: Arc::new(config),
            calendar: Arc::new(calendar),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the holiday calendar.
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }
}
