//! Request types for the Overtime Engine API.
//!
//! This module defines the JSON request structures for the `/overtime` endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::SummaryReport;

/// Request body for the `/overtime` endpoint.
///
/// Carries the summary report already fetched from the time-tracking service
/// together with the range and working-time settings it was fetched for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OvertimeRequest {
    /// The user the report belongs to.
    pub user_id: String,
    /// The first day of the range (inclusive).
    pub start_date: NaiveDate,
    /// The last day of the range (inclusive).
    pub end_date: NaiveDate,
    /// Weekday indices (0 = Sunday) the user works. Defaults to the configured days.
    #[serde(default)]
    pub working_days: Option<Vec<u8>>,
    /// Contracted weekly hours. Defaults to the user's configured hours.
    #[serde(default)]
    pub weekly_hours: Option<Decimal>,
    /// The summary report for the user and range.
    pub report: SummaryReport,
}

/// Query parameters for the `/users/:user_id/policy` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyQuery {
    /// The year to look up carryover for. Defaults to the current year.
    #[serde(default)]
    pub year: Option<i32>,
}
