//! Response types for the Overtime Engine API.
//!
//! This module defines the error response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Response body for the `/users/:user_id/policy` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPolicyResponse {
    /// The user the policy applies to.
    pub user_id: String,
    /// The year carryover was looked up for.
    pub year: i32,
    /// Contracted weekly hours.
    pub weekly_hours: Decimal,
    /// Expected hours per business day.
    pub hours_per_day: Decimal,
    /// Default weekday indices (0 = Sunday).
    pub working_days: Vec<u8>,
    /// Hours carried into `year`.
    pub carryover_hours: Decimal,
}

/// A holiday as reported by the `/holidays/:year` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayEntry {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// True if the cutover rule keeps this holiday in the business-day count.
    pub counts_as_business_day: bool,
}

/// Response body for the `/holidays/:year` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayListResponse {
    /// The configured holiday region.
    pub region: String,
    /// The requested year.
    pub year: i32,
    /// Holidays of the year, ordered by date.
    pub holidays: Vec<HolidayEntry>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::UnknownRegion { code } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    message,
                    format!("The holiday calendar has no region '{}'", code),
                ),
            },
            EngineError::InvalidDateRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE_RANGE",
                    message,
                    "end_date must not be before start_date",
                ),
            },
            EngineError::RangeTooLong { max, .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "RANGE_TOO_LONG",
                    message,
                    format!("A calculation covers at most {} days", max),
                ),
            },
            EngineError::InvalidWorkingDays { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WORKING_DAYS",
                    message,
                    "working_days must list at least one weekday index between 0 (Sunday) and 6 (Saturday)",
                ),
            },
            EngineError::InvalidHoursPerDay { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_HOURS",
                    message,
                    "weekly_hours divided by the days per week must lie between 0 and 24",
                ),
            },
        }
    }
}
