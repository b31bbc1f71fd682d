//! Calculation logic for the Overtime Engine.
//!
//! This module contains the functions that turn a summary report, a date
//! range and a working-time policy into an overtime balance: day detection,
//! business-day counting, missing-date detection, the overtime delta,
//! carryover lookup and the hour summary.

mod business_days;
mod carryover;
mod day_detection;
mod missing_dates;
mod overtime;
mod summary;

pub use business_days::{BusinessDaysResult, SECONDS_PER_HOUR, count_business_days};
pub use carryover::{CarryoverResult, carryover_hours, lookup_carryover};
pub use day_detection::{DayType, get_day_type, is_weekend, weekday_index};
pub use missing_dates::{MissingDatesResult, find_missing_dates};
pub use overtime::{
    OvertimeCalculation, calculate_overtime, calculate_overtime_for_report, compute,
};
pub use summary::{seconds_to_hours, summarize};
