//! Overtime Engine for time-tracking summary reports
//!
//! This crate computes a user's overtime balance over a date range from a
//! Clockify-style summary report: the expected working time after weekends
//! and regional public holidays, the delta against logged time, working days
//! without any entry, and the balance carried over from prior years.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod holidays;
pub mod models;
