//! Core data models for the Overtime Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod date_range;
mod overtime_result;
mod policy;
mod report;
mod working_days;

pub use date_range::DateRange;
pub use overtime_result::{
    AuditStep, AuditTrace, AuditWarning, OvertimeReport, OvertimeResult, OvertimeSummary,
};
pub use policy::{CarryoverEntry, HolidayPolicy, PublicHoliday, WeeklyHoursOverride};
pub use report::{DaySummary, ReportGroup, ReportTotals, SummaryReport};
pub use working_days::{MAX_HOURS_PER_DAY, WorkingDaysConfig};
