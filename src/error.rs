//! Error types for the Overtime Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can be rejected before an overtime calculation
//! runs. The calculation itself is infallible for validated inputs.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Overtime Engine.
///
/// # Example
///
/// ```
/// use overtime_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The holiday region code is not supported by the holiday calendar.
    #[error("Unknown holiday region: {code}")]
    UnknownRegion {
        /// The region code that was rejected.
        code: String,
    },

    /// The end of a date range lies before its start.
    #[error("Invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The working-day selection was empty or contained an invalid weekday index.
    #[error("Invalid working days: {message}")]
    InvalidWorkingDays {
        /// A description of what made the selection invalid.
        message: String,
    },

    /// The date range spans more days than a single calculation accepts.
    #[error("Date range too long: {days} days exceeds the limit of {max}")]
    RangeTooLong {
        /// Days in the requested range.
        days: u32,
        /// The largest accepted number of days.
        max: u32,
    },

    /// Hours per day must lie between 0 and 24.
    #[error("Invalid hours per day: {value}")]
    InvalidHoursPerDay {
        /// The rejected value.
        value: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
