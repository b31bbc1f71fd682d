//! Summary report models.
//!
//! This module contains the [`SummaryReport`] payload returned by the
//! time-tracking service for a summary grouped by user and then by date.
//! Only the parts read by the overtime calculation are modelled; other
//! fields of the payload are ignored on deserialization.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Time logged by the user on a single day.
///
/// The `name` carries the day as an ISO `YYYY-MM-DD` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// The ISO date of this entry (e.g. "2024-01-05").
    pub name: String,
    /// The logged duration in seconds.
    pub duration: i64,
}

impl DaySummary {
    /// Parses the entry name as a date, if it is a well-formed ISO date.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.name, "%Y-%m-%d").ok()
    }
}

/// A top-level group of the report, one per user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportGroup {
    /// Total logged seconds for this user over the report range.
    pub duration: i64,
    /// Monetary amount, hidden by most report requests.
    #[serde(default)]
    pub amount: Option<f64>,
    /// The group name (the user's display name).
    #[serde(default)]
    pub name: String,
    /// Per-day totals, ordered by date.
    #[serde(default)]
    pub children: Vec<DaySummary>,
}

impl ReportGroup {
    /// Returns the ISO names of all day entries for fast membership checks.
    pub fn entry_names(&self) -> HashSet<&str> {
        self.children.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Aggregated totals across the whole report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTotals {
    /// Total logged seconds.
    #[serde(default)]
    pub total_time: i64,
    /// Total billable seconds.
    #[serde(default)]
    pub total_billable_time: i64,
    /// Number of time entries.
    #[serde(default)]
    pub entries_count: u64,
}

/// The summary report payload.
///
/// # Example
///
/// ```
/// use overtime_engine::models::SummaryReport;
///
/// let json = r#"{
///     "totals": [{"totalTime": 28800, "totalBillableTime": 0, "entriesCount": 2}],
///     "groupOne": [{
///         "duration": 28800,
///         "name": "Jane Doe",
///         "children": [{"name": "2024-01-02", "duration": 28800}]
///     }]
/// }"#;
/// let report: SummaryReport = serde_json::from_str(json).unwrap();
///
/// assert_eq!(report.primary_group().unwrap().duration, 28800);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    /// Report-wide totals. Not used by the calculation.
    #[serde(default)]
    pub totals: Vec<ReportTotals>,
    /// User groups. Empty when the user logged nothing in the range.
    #[serde(default)]
    pub group_one: Vec<ReportGroup>,
}

impl SummaryReport {
    /// Returns the first user group, or `None` when the report has no data.
    pub fn primary_group(&self) -> Option<&ReportGroup> {
        self.group_one.first()
    }

    /// Returns true when the report carries no user group at all.
    pub fn is_empty(&self) -> bool {
        self.group_one.is_empty()
    }
}
