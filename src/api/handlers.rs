//! HTTP request handlers for the Overtime Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{Datelike, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_overtime_for_report, is_weekend, lookup_carryover, summarize};
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::holidays::HolidayCalendar;
use crate::models::{AuditTrace, AuditWarning, DateRange, OvertimeReport};

use super::request::{OvertimeRequest, PolicyQuery};
use super::response::{
    ApiError, ApiErrorResponse, HolidayEntry, HolidayListResponse, UserPolicyResponse,
};
use super::state::AppState;

/// The longest range, in days, a single overtime request may cover.
pub const MAX_RANGE_DAYS: u32 = 3660;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/overtime", post(overtime_handler))
        .route("/users/:user_id/policy", get(user_policy_handler))
        .route("/holidays/:year", get(holidays_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Handler for POST /overtime endpoint.
///
/// Accepts a summary report with its range and returns the overtime balance.
async fn overtime_handler(
    State(state): State<AppState>,
    payload: Result<Json<OvertimeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing overtime request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // serde's message is only in the body text
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match perform_calculation(&request, state.config(), state.calendar()) {
        Ok(report) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                user_id = %report.user_id,
                start_date = %report.range.start_date,
                end_date = %report.range.end_date,
                has_result = report.result.is_some(),
                total_overtime_hours = ?report.summary.as_ref().map(|s| s.total_overtime_hours),
                duration_us = duration.as_micros(),
                "Overtime calculation completed"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                user_id = %request.user_id,
                error = %err,
                "Overtime calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Validates the request and runs the overtime calculation with carryover.
fn perform_calculation(
    request: &OvertimeRequest,
    config: &ConfigLoader,
    calendar: &dyn HolidayCalendar,
) -> EngineResult<OvertimeReport> {
    let start_time = Instant::now();

    let range = DateRange::new(request.start_date, request.end_date)?;
    if range.day_count() > MAX_RANGE_DAYS {
        return Err(EngineError::RangeTooLong {
            days: range.day_count(),
            max: MAX_RANGE_DAYS,
        });
    }
    let working_days = config.working_days_for(
        &request.user_id,
        request.working_days.as_deref(),
        request.weekly_hours,
    )?;

    let mut audit_trace = AuditTrace::default();

    let (result, summary) = match calculate_overtime_for_report(
        &request.report,
        &range,
        &working_days,
        config.holiday_policy(),
        calendar,
        1,
    ) {
        Some(calculation) => {
            let next_step = calculation.audit_steps.len() as u32 + 1;
            let carryover = lookup_carryover(
                config.config().carryover(),
                &request.user_id,
                range.start_date.year(),
                next_step,
            );
            let summary = summarize(&calculation.result, carryover.carryover_hours);

            audit_trace.steps = calculation.audit_steps;
            audit_trace.steps.push(carryover.audit_step);
            audit_trace.warnings = calculation.warnings;
            (Some(calculation.result), Some(summary))
        }
        None => {
            audit_trace.warnings.push(AuditWarning {
                code: "EMPTY_REPORT".to_string(),
                message: format!(
                    "No time was logged for {} between {} and {}",
                    request.user_id, range.start_date, range.end_date
                ),
                severity: "low".to_string(),
            });
            (None, None)
        }
    };

    audit_trace.duration_us = start_time.elapsed().as_micros() as u64;

    Ok(OvertimeReport {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        user_id: request.user_id.clone(),
        range,
        result,
        summary,
        audit_trace,
    })
}

/// Handler for GET /users/:user_id/policy endpoint.
///
/// Reports the working-time settings and carryover the engine would use
/// for the user.
async fn user_policy_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<PolicyQuery>,
) -> Response {
    let config = state.config();
    let year = query.year.unwrap_or_else(|| Utc::now().year());

    match config.working_days_for(&user_id, None, None) {
        Ok(working_days) => Json(UserPolicyResponse {
            weekly_hours: config.weekly_hours_for(&user_id),
            hours_per_day: working_days.hours_per_day,
            working_days: working_days.working_days.iter().copied().collect(),
            carryover_hours: config.carryover_hours(&user_id, year),
            user_id,
            year,
        })
        .into_response(),
        Err(err) => {
            warn!(user_id = %user_id, error = %err, "Policy lookup failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /holidays/:year endpoint.
async fn holidays_handler(State(state): State<AppState>, Path(year): Path<i32>) -> Response {
    let policy = state.config().holiday_policy();
    let holidays = state
        .calendar()
        .holidays_in_year(year, &policy.region)
        .into_iter()
        .map(|holiday| HolidayEntry {
            counts_as_business_day: !is_weekend(holiday.date)
                && !policy.excludes_holiday_on(holiday.date),
            date: holiday.date,
            name: holiday.name,
        })
        .collect();

    Json(HolidayListResponse {
        region: policy.region.clone(),
        year,
        holidays,
    })
    .into_response()
}

/// Handler for GET /health endpoint.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
