//! HTTP API module for the Overtime Engine.
//!
//! This module provides the REST API endpoints for calculating overtime
//! balances from time-tracking summary reports and for inspecting the
//! loaded policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{MAX_RANGE_DAYS, create_router};
pub use request::{OvertimeRequest, PolicyQuery};
pub use response::{
    ApiError, ApiErrorResponse, HolidayEntry, HolidayListResponse, UserPolicyResponse,
};
pub use state::AppState;
