//! Integration tests for the Overtime Engine HTTP API.
//!
//! This test suite covers:
//! - Balanced, overtime and undertime weeks
//! - Missing working days
//! - Regional holidays before and after the cutover date
//! - Per-user weekly hours and carryover
//! - The empty-report case
//! - Policy and holiday endpoints
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use overtime_engine::api::{AppState, create_router};
use overtime_engine::config::ConfigLoader;
use overtime_engine::holidays::GermanHolidays;

// =============================================================================
// Test Helpers
// =============================================================================

const PART_TIME_USER: &str = "6180ff00f9914c556e304294";

fn create_test_state() -> AppState {
    let config =
        ConfigLoader::load("./config/default", &GermanHolidays).expect("Failed to load config");
    AppState::new(config, GermanHolidays)
}

fn create_router_for_test() -> Router {
    create_router(create_test_state())
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post_overtime(router: Router, body: Value) -> (StatusCode, Value) {
    send(
        router,
        Request::builder()
            .method("POST")
            .uri("/overtime")
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    send(
        router,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

/// Builds a report with one user group and one entry per `(date, hours)`.
fn create_report(entries: &[(&str, &str)]) -> Value {
    let children: Vec<Value> = entries
        .iter()
        .map(|(date, hours)| {
            json!({
                "name": date,
                "duration": hours_to_seconds(hours)
            })
        })
        .collect();
    let total: i64 = entries.iter().map(|(_, hours)| hours_to_seconds(hours)).sum();

    json!({
        "totals": [{
            "totalTime": total,
            "totalBillableTime": 0,
            "entriesCount": entries.len()
        }],
        "groupOne": [{
            "duration": total,
            "name": "Jane Doe",
            "children": children
        }]
    })
}

fn hours_to_seconds(hours: &str) -> i64 {
    let seconds = Decimal::from_str(hours).unwrap() * Decimal::from(3600);
    i64::from_str(&seconds.normalize().to_string()).unwrap()
}

fn create_request(user_id: &str, start_date: &str, end_date: &str, report: Value) -> Value {
    json!({
        "user_id": user_id,
        "start_date": start_date,
        "end_date": end_date,
        "report": report
    })
}

fn assert_decimal(actual: &Value, expected: &str, field: &str) {
    let actual = actual
        .as_str()
        .unwrap_or_else(|| panic!("{} is not a decimal string", field));
    assert_eq!(
        normalize_decimal(actual),
        normalize_decimal(expected),
        "Expected {} {}, got {}",
        field,
        expected,
        actual
    );
}

fn missing_dates(result: &Value) -> Vec<&str> {
    result["result"]["missing_dates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d.as_str().unwrap())
        .collect()
}

// =============================================================================
// SECTION 1: Overtime Balance
// =============================================================================

#[tokio::test]
async fn test_full_week_all_entries_is_balanced() {
    let router = create_router_for_test();
    let report = create_report(&[
        ("2024-01-08", "8"),
        ("2024-01-09", "8"),
        ("2024-01-10", "8"),
        ("2024-01-11", "8"),
        ("2024-01-12", "8"),
    ]);
    let request = create_request("user_001", "2024-01-08", "2024-01-12", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["result"]["business_seconds"], "144000", "business_seconds");
    assert_decimal(&result["result"]["allocated_seconds"], "144000", "allocated_seconds");
    assert_decimal(&result["result"]["overtime_seconds"], "0", "overtime_seconds");
    assert!(missing_dates(&result).is_empty());
    assert_decimal(&result["summary"]["overtime_hours"], "0", "overtime_hours");
    assert_eq!(result["summary"]["is_over"], json!(false));
}

#[tokio::test]
async fn test_only_monday_to_wednesday_logged() {
    let router = create_router_for_test();
    let report = create_report(&[
        ("2024-01-08", "8"),
        ("2024-01-09", "8"),
        ("2024-01-10", "8"),
    ]);
    let request = create_request("user_001", "2024-01-08", "2024-01-12", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["result"]["overtime_seconds"], "-57600", "overtime_seconds");
    assert_eq!(missing_dates(&result), vec!["2024-01-11", "2024-01-12"]);
    assert_decimal(&result["summary"]["overtime_hours"], "-16", "overtime_hours");
}

#[tokio::test]
async fn test_long_days_produce_overtime() {
    let router = create_router_for_test();
    let report = create_report(&[
        ("2024-01-08", "10"),
        ("2024-01-09", "9.5"),
        ("2024-01-10", "8"),
        ("2024-01-11", "8"),
        ("2024-01-12", "8"),
    ]);
    let request = create_request("user_001", "2024-01-08", "2024-01-12", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["result"]["overtime_seconds"], "12600", "overtime_seconds");
    assert_decimal(&result["summary"]["overtime_hours"], "3.5", "overtime_hours");
    assert_eq!(result["summary"]["is_over"], json!(true));
}

#[tokio::test]
async fn test_weekend_only_range_expects_nothing() {
    let router = create_router_for_test();
    let report = create_report(&[("2024-01-06", "3")]);
    let request = create_request("user_001", "2024-01-06", "2024-01-07", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["result"]["business_seconds"], "0", "business_seconds");
    assert_decimal(&result["result"]["overtime_seconds"], "10800", "overtime_seconds");
    assert!(missing_dates(&result).is_empty());
}

#[tokio::test]
async fn test_identity_holds_for_fractional_hours() {
    let router = create_router_for_test();
    let report = create_report(&[("2024-01-08", "7.25"), ("2024-01-09", "6.75")]);
    let request = create_request("user_001", "2024-01-08", "2024-01-09", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let allocated =
        Decimal::from_str(result["result"]["allocated_seconds"].as_str().unwrap()).unwrap();
    let business =
        Decimal::from_str(result["result"]["business_seconds"].as_str().unwrap()).unwrap();
    let overtime =
        Decimal::from_str(result["result"]["overtime_seconds"].as_str().unwrap()).unwrap();
    assert_eq!(overtime, allocated - business);
}

// =============================================================================
// SECTION 2: Public Holidays and Cutover
// =============================================================================

#[tokio::test]
async fn test_holiday_after_cutover_reduces_expected_time() {
    // 2024-01-01 Neujahrstag, after the 2022-06-30 cutover
    let router = create_router_for_test();
    let report = create_report(&[
        ("2024-01-02", "8"),
        ("2024-01-03", "8"),
        ("2024-01-04", "8"),
        ("2024-01-05", "8"),
    ]);
    let request = create_request("user_001", "2024-01-01", "2024-01-05", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["result"]["business_seconds"], "115200", "business_seconds");
    assert_decimal(&result["result"]["overtime_seconds"], "0", "overtime_seconds");
    assert!(missing_dates(&result).is_empty());
}

#[tokio::test]
async fn test_holiday_before_cutover_still_counts_as_business_day() {
    // 2022-06-16 Fronleichnam (Thursday), before the cutover
    let router = create_router_for_test();
    let report = create_report(&[
        ("2022-06-13", "8"),
        ("2022-06-14", "8"),
        ("2022-06-15", "8"),
        ("2022-06-17", "8"),
    ]);
    let request = create_request("user_001", "2022-06-13", "2022-06-17", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["result"]["business_seconds"], "144000", "business_seconds");
    assert_decimal(&result["result"]["overtime_seconds"], "-28800", "overtime_seconds");
    assert!(
        missing_dates(&result).is_empty(),
        "Holidays are never reported as missing"
    );
}

#[tokio::test]
async fn test_holidays_endpoint_applies_cutover() {
    // Cutover is 2022-06-30: earlier weekday holidays still count
    let router = create_router_for_test();
    let (status, holidays) = get(router, "/holidays/2022").await;

    assert_eq!(status, StatusCode::OK);
    let fronleichnam = holidays["holidays"]
        .as_array()
        .unwrap()
        .iter()
        .find(|h| h["date"] == json!("2022-06-16"))
        .expect("Fronleichnam 2022 missing");
    assert_eq!(fronleichnam["counts_as_business_day"], json!(true));

    let unity_day = holidays["holidays"]
        .as_array()
        .unwrap()
        .iter()
        .find(|h| h["date"] == json!("2022-10-03"))
        .expect("Tag der Deutschen Einheit 2022 missing");
    assert_eq!(unity_day["counts_as_business_day"], json!(false));
}

// =============================================================================
// SECTION 3: Working Days and Weekly Hours
// =============================================================================

#[tokio::test]
async fn test_custom_working_days_limit_missing_dates() {
    let router = create_router_for_test();
    let mut request = create_request(
        "user_001",
        "2024-01-08",
        "2024-01-12",
        create_report(&[("2024-01-08", "8")]),
    );
    request["working_days"] = json!([1, 3]);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(missing_dates(&result), vec!["2024-01-10"]);
    // Expected time still covers every weekday of the range
    assert_decimal(&result["result"]["business_seconds"], "144000", "business_seconds");
}

#[tokio::test]
async fn test_request_weekly_hours_override_user_default() {
    let router = create_router_for_test();
    let mut request = create_request(
        "user_001",
        "2024-01-08",
        "2024-01-12",
        create_report(&[("2024-01-08", "6")]),
    );
    request["weekly_hours"] = json!("30");

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["result"]["business_seconds"], "108000", "business_seconds");
    assert_decimal(&result["summary"]["business_hours"], "30", "business_hours");
}

#[tokio::test]
async fn test_part_time_user_with_carryover() {
    let router = create_router_for_test();
    let report = create_report(&[
        ("2026-01-12", "3.8"),
        ("2026-01-13", "3.8"),
        ("2026-01-14", "3.8"),
        ("2026-01-15", "3.8"),
        ("2026-01-16", "3.8"),
    ]);
    let request = create_request(PART_TIME_USER, "2026-01-12", "2026-01-16", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["result"]["business_seconds"], "68400", "business_seconds");
    assert_decimal(&result["summary"]["overtime_hours"], "0", "overtime_hours");
    assert_decimal(&result["summary"]["carryover_hours"], "24.87", "carryover_hours");
    assert_decimal(
        &result["summary"]["total_overtime_hours"],
        "24.87",
        "total_overtime_hours",
    );
    assert_eq!(result["summary"]["is_over"], json!(true));
}

#[tokio::test]
async fn test_carryover_only_applies_to_its_year() {
    let router = create_router_for_test();
    let report = create_report(&[("2025-01-13", "3.8")]);
    let request = create_request(PART_TIME_USER, "2025-01-13", "2025-01-13", report);

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&result["summary"]["carryover_hours"], "0", "carryover_hours");
}

// =============================================================================
// SECTION 4: Empty Report
// =============================================================================

#[tokio::test]
async fn test_empty_report_has_no_result() {
    let router = create_router_for_test();
    let request = create_request(
        "user_001",
        "2024-01-08",
        "2024-01-12",
        json!({"totals": [], "groupOne": []}),
    );

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["result"].is_null());
    assert!(result["summary"].is_null());
    assert_eq!(result["audit_trace"]["warnings"][0]["code"], json!("EMPTY_REPORT"));
}

#[tokio::test]
async fn test_report_without_group_field_has_no_result() {
    let router = create_router_for_test();
    let request = create_request("user_001", "2024-01-08", "2024-01-12", json!({}));

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["result"].is_null());
}

// =============================================================================
// SECTION 5: Error Cases
// =============================================================================

#[tokio::test]
async fn test_error_end_before_start() {
    let router = create_router_for_test();
    let request = create_request("user_001", "2024-01-12", "2024-01-08", create_report(&[]));

    let (status, error) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("INVALID_DATE_RANGE"));
}

#[tokio::test]
async fn test_error_empty_working_days() {
    let router = create_router_for_test();
    let mut request = create_request("user_001", "2024-01-08", "2024-01-12", create_report(&[]));
    request["working_days"] = json!([]);

    let (status, error) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("INVALID_WORKING_DAYS"));
}

#[tokio::test]
async fn test_error_weekday_index_out_of_range() {
    let router = create_router_for_test();
    let mut request = create_request("user_001", "2024-01-08", "2024-01-12", create_report(&[]));
    request["working_days"] = json!([1, 7]);

    let (status, error) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("INVALID_WORKING_DAYS"));
}

#[tokio::test]
async fn test_error_negative_weekly_hours() {
    let router = create_router_for_test();
    let mut request = create_request("user_001", "2024-01-08", "2024-01-12", create_report(&[]));
    request["weekly_hours"] = json!("-5");

    let (status, error) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("INVALID_HOURS"));
}

#[tokio::test]
async fn test_error_huge_weekly_hours() {
    let router = create_router_for_test();
    let mut request = create_request(
        "user_001",
        "2024-01-08",
        "2024-01-12",
        create_report(&[("2024-01-08", "8")]),
    );
    request["weekly_hours"] = json!("79228162514264337593543950335");

    let (status, error) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("INVALID_HOURS"));
}

#[tokio::test]
async fn test_error_weekly_hours_above_full_days() {
    let router = create_router_for_test();
    let mut request = create_request("user_001", "2024-01-08", "2024-01-12", create_report(&[]));
    request["weekly_hours"] = json!("121");

    let (status, error) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("INVALID_HOURS"));
}

#[tokio::test]
async fn test_error_range_longer_than_limit() {
    let router = create_router_for_test();
    let request = create_request(
        "user_001",
        "2000-01-01",
        "2020-12-31",
        create_report(&[("2000-01-03", "8")]),
    );

    let (status, error) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("RANGE_TOO_LONG"));
}

#[tokio::test]
async fn test_ten_year_range_is_accepted() {
    let router = create_router_for_test();
    let request = create_request(
        "user_001",
        "2014-01-01",
        "2023-12-31",
        create_report(&[("2014-01-02", "8")]),
    );

    let (status, _) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_error_missing_report() {
    let router = create_router_for_test();
    let body = json!({
        "user_id": "user_001",
        "start_date": "2024-01-08",
        "end_date": "2024-01-12"
    });

    let (status, error) = post_overtime(router, body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("VALIDATION_ERROR"));
    assert!(error["message"].as_str().unwrap().contains("missing field"));
}

#[tokio::test]
async fn test_error_invalid_date_format() {
    let router = create_router_for_test();
    let request = create_request("user_001", "08.01.2024", "2024-01-12", create_report(&[]));

    let (status, error) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("MALFORMED_JSON"));
}

#[tokio::test]
async fn test_error_missing_content_type() {
    let router = create_router_for_test();
    let (status, error) = send(
        router,
        Request::builder()
            .method("POST")
            .uri("/overtime")
            .body(Body::from("{}"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], json!("MISSING_CONTENT_TYPE"));
}

// =============================================================================
// SECTION 6: Audit Trace & Response Fields
// =============================================================================

#[tokio::test]
async fn test_audit_trace_contains_ordered_steps() {
    let router = create_router_for_test();
    let request = create_request(
        "user_001",
        "2024-01-08",
        "2024-01-12",
        create_report(&[("2024-01-08", "8")]),
    );

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let steps = result["audit_trace"]["steps"].as_array().unwrap();
    let rule_ids: Vec<&str> = steps
        .iter()
        .map(|s| s["rule_id"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec![
            "business_day_count",
            "overtime_delta",
            "missing_dates",
            "carryover_lookup"
        ]
    );
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step["step_number"], json!(i + 1));
        assert!(step["reasoning"].is_string());
    }
}

#[tokio::test]
async fn test_unrecognised_entry_name_raises_warning() {
    let router = create_router_for_test();
    let request = create_request(
        "user_001",
        "2024-01-08",
        "2024-01-08",
        create_report(&[("2024-01-08", "8"), ("Monday", "1")]),
    );

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    let warnings = result["audit_trace"]["warnings"].as_array().unwrap();
    assert!(
        warnings
            .iter()
            .any(|w| w["code"] == json!("UNRECOGNISED_ENTRY_NAME"))
    );
    assert_decimal(&result["result"]["overtime_seconds"], "3600", "overtime_seconds");
}

#[tokio::test]
async fn test_result_contains_all_required_fields() {
    let router = create_router_for_test();
    let request = create_request(
        "user_001",
        "2024-01-08",
        "2024-01-12",
        create_report(&[("2024-01-08", "8")]),
    );

    let (status, result) = post_overtime(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(result["calculation_id"].is_string());
    assert!(result["timestamp"].is_string());
    assert!(result["engine_version"].is_string());
    assert_eq!(result["user_id"], json!("user_001"));
    assert_eq!(result["range"]["start_date"], json!("2024-01-08"));
    assert_eq!(result["range"]["end_date"], json!("2024-01-12"));
    assert!(result["summary"]["missing_dates"].is_array());
    assert!(result["audit_trace"]["duration_us"].is_number());
}

// =============================================================================
// SECTION 7: Policy, Holiday and Health Endpoints
// =============================================================================

#[tokio::test]
async fn test_user_policy_for_part_time_user() {
    let router = create_router_for_test();
    let uri = format!("/users/{}/policy?year=2026", PART_TIME_USER);

    let (status, policy) = get(router, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&policy["weekly_hours"], "19", "weekly_hours");
    assert_decimal(&policy["hours_per_day"], "3.8", "hours_per_day");
    assert_decimal(&policy["carryover_hours"], "24.87", "carryover_hours");
    assert_eq!(policy["working_days"], json!([1, 2, 3, 4, 5]));
    assert_eq!(policy["year"], json!(2026));
}

#[tokio::test]
async fn test_user_policy_defaults_for_unknown_user() {
    let router = create_router_for_test();

    let (status, policy) = get(router, "/users/nobody/policy?year=2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&policy["weekly_hours"], "40", "weekly_hours");
    assert_decimal(&policy["hours_per_day"], "8", "hours_per_day");
    assert_decimal(&policy["carryover_hours"], "0", "carryover_hours");
}

#[tokio::test]
async fn test_holidays_for_bavaria_2024() {
    let router = create_router_for_test();

    let (status, holidays) = get(router, "/holidays/2024").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(holidays["region"], json!("BY"));
    let entries = holidays["holidays"].as_array().unwrap();
    let dates: Vec<&str> = entries.iter().map(|h| h["date"].as_str().unwrap()).collect();
    assert!(dates.contains(&"2024-01-06"));
    assert!(dates.contains(&"2024-03-29"));
    assert!(dates.contains(&"2024-05-30"));
    assert!(!dates.contains(&"2024-10-31"), "Reformationstag is not a BY holiday");
    assert!(
        entries
            .iter()
            .all(|h| h["counts_as_business_day"] == json!(false))
    );
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);
}

#[tokio::test]
async fn test_health() {
    let router = create_router_for_test();

    let (status, health) = get(router, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], json!("ok"));
}
