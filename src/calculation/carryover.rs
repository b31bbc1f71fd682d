//! Carryover lookup.
//!
//! Sums the overtime balance carried into a year for a user.

use rust_decimal::Decimal;

use crate::models::{AuditStep, CarryoverEntry};

/// The result of a carryover lookup, including the audit step.
#[derive(Debug, Clone)]
pub struct CarryoverResult {
    /// Sum of all matching carryover entries, in hours.
    pub carryover_hours: Decimal,
    /// Number of entries that matched.
    pub matched_entries: usize,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Sums the carried-over hours of `user_id` for `year`.
///
/// Returns zero when no entry matches.
///
/// # Example
///
/// ```
/// use overtime_engine::calculation::carryover_hours;
/// use overtime_engine::models::CarryoverEntry;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = vec![CarryoverEntry {
///     user_id: "u1".to_string(),
///     year: 2026,
///     overtime_hours: Decimal::from_str("24.87").unwrap(),
/// }];
///
/// assert_eq!(carryover_hours(&table, "u1", 2026), Decimal::from_str("24.87").unwrap());
/// assert_eq!(carryover_hours(&table, "u1", 2025), Decimal::ZERO);
/// ```
pub fn carryover_hours(entries: &[CarryoverEntry], user_id: &str, year: i32) -> Decimal {
    entries
        .iter()
        .filter(|e| e.user_id == user_id && e.year == year)
        .map(|e| e.overtime_hours)
        .sum()
}

/// Looks up the carryover for `user_id` and `year` and records an audit step.
pub fn lookup_carryover(
    entries: &[CarryoverEntry],
    user_id: &str,
    year: i32,
    step_number: u32,
) -> CarryoverResult {
    let matched_entries = entries
        .iter()
        .filter(|e| e.user_id == user_id && e.year == year)
        .count();
    let hours = carryover_hours(entries, user_id, year);

    let audit_step = AuditStep {
        step_number,
        rule_id: "carryover_lookup".to_string(),
        rule_name: "Carryover Lookup".to_string(),
        input: serde_json::json!({
            "user_id": user_id,
            "year": year
        }),
        output: serde_json::json!({
            "matched_entries": matched_entries,
            "carryover_hours": hours.normalize().to_string()
        }),
        reasoning: if matched_entries == 0 {
            format!("No carryover recorded for {} in {}", user_id, year)
        } else {
            format!(
                "{} carryover entr{} for {} in {} sum to {}h",
                matched_entries,
                if matched_entries == 1 { "y" } else { "ies" },
                user_id,
                year,
                hours.normalize()
            )
        },
    };

    CarryoverResult {
        carryover_hours: hours,
        matched_entries,
        audit_step,
    }
}
