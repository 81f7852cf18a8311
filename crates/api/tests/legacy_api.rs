//! HTTP-level tests for the original endpoints: status, listings, reports
//! and the `{success, message}` action routes.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use parking_db::DbPool;
use serde_json::json;

// ---------------------------------------------------------------------------
// Read endpoints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_status_reports_row_counts(pool: DbPool) {
    let app = common::seeded_app(pool).await;
    let response = get(app, "/api/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["employees"], 12);
    assert_eq!(json["parking"], 10);
    assert_eq!(json["waitlist"], 3);
}

#[sqlx::test(migrations = false)]
async fn test_employee_list_includes_department(pool: DbPool) {
    let app = common::seeded_app(pool).await;
    let response = get(app.clone(), "/api/employees").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let employees = json.as_array().expect("bare array");
    assert_eq!(employees.len(), 12);
    assert_eq!(employees[0]["employeeId"], 1);
    assert_eq!(employees[0]["departmentName"], "Engineering");

    let json = body_json(get(app, "/api/employees?status=PT").await).await;
    assert_eq!(json.as_array().map(Vec::len), Some(4));
}

#[sqlx::test(migrations = false)]
async fn test_unknown_status_filter_is_400(pool: DbPool) {
    let app = common::seeded_app(pool).await;
    let response = get(app, "/api/employees?status=contractor").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = false)]
async fn test_parking_list_shows_occupant(pool: DbPool) {
    let app = common::seeded_app(pool).await;
    let json = body_json(get(app.clone(), "/api/parking").await).await;

    let spots = json.as_array().expect("bare array");
    assert_eq!(spots.len(), 10);
    assert!(spots[0]["employeeId"].is_null());
    assert_eq!(spots[1]["employeeName"], "Alice Nguyen");

    let json = body_json(get(app, "/api/parking?available=true").await).await;
    let free: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["parkingNum"].as_i64().unwrap())
        .collect();
    assert_eq!(free, vec![1, 5, 8, 10]);
}

#[sqlx::test(migrations = false)]
async fn test_get_single_rows(pool: DbPool) {
    let app = common::seeded_app(pool).await;

    let json = body_json(get(app.clone(), "/api/employees/11").await).await;
    assert_eq!(json["firstName"], "Kara");

    let response = get(app.clone(), "/api/employees/404").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");

    let response = get(app, "/api/parking/abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = false)]
async fn test_reports_shape(pool: DbPool) {
    let app = common::seeded_app(pool).await;
    let json = body_json(get(app, "/api/reports").await).await;

    assert_eq!(json["employeeStatus"][0]["status"], "FT");
    assert_eq!(json["employeeStatus"][0]["count"], 8);
    assert_eq!(json["parkingUtilization"]["total"], 10);
    assert_eq!(json["parkingUtilization"]["occupied"], 6);
    assert_eq!(json["parkingUtilization"]["available"], 4);
    assert_eq!(json["waitlistCount"], 2);
}

#[sqlx::test(migrations = false)]
async fn test_report_sub_routes(pool: DbPool) {
    let app = common::seeded_app(pool).await;

    let json = body_json(get(app.clone(), "/api/reports/status/PT").await).await;
    assert_eq!(json[0]["employeeId"], 11);

    let response = get(app.clone(), "/api/reports/status/XX").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get(app.clone(), "/api/reports/youngest").await).await;
    assert_eq!(json["employeeId"], 11);
    assert_eq!(json["age"], 22);

    let json = body_json(get(app, "/api/reports/buildings").await).await;
    assert_eq!(json[0]["buildingName"], "North Tower");
    assert_eq!(json[0]["occupiedSpots"], 3);
    assert_eq!(json[0]["availableSpots"], 37);
}

// ---------------------------------------------------------------------------
// Action endpoints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_add_employee(pool: DbPool) {
    let app = common::seeded_app(pool).await;
    let body = json!({
        "employeeId": 13,
        "firstName": "Nora",
        "lastName": "Field",
        "status": "PT",
        "departmentId": 5,
        "age": 26
    });

    let response = post_json(app.clone(), "/api/employee/add", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Employee added successfully");

    let json = body_json(get(app, "/api/employees/13").await).await;
    assert_eq!(json["employeeStatus"], "PT");
    assert_eq!(json["buildingName"], "Research Center");
}

#[sqlx::test(migrations = false)]
async fn test_add_employee_with_missing_department(pool: DbPool) {
    let app = common::seeded_app(pool).await;
    let body = json!({
        "employeeId": 13,
        "firstName": "Nora",
        "lastName": "Field",
        "status": "FT",
        "departmentId": 99,
        "age": 26
    });

    let response = post_json(app.clone(), "/api/employee/add", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "CONSTRAINT_VIOLATION");
    assert!(json["message"].as_str().unwrap().contains("Department 99"));

    let response = get(app, "/api/employees/13").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = false)]
async fn test_add_employee_with_malformed_body(pool: DbPool) {
    let app = common::seeded_app(pool).await;
    let response = post_json(app, "/api/employee/add", json!({ "employeeId": "x" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].is_string());
}

#[sqlx::test(migrations = false)]
async fn test_assign_then_conflict(pool: DbPool) {
    let app = common::seeded_app(pool).await;

    let response = post_json(
        app.clone(),
        "/api/parking/assign",
        json!({ "parkingNum": 1, "employeeId": 11 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Parking assigned successfully");

    let response = post_json(
        app.clone(),
        "/api/parking/assign",
        json!({ "parkingNum": 1, "employeeId": 12 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "SPOT_UNAVAILABLE");

    let json = body_json(get(app, "/api/parking/1").await).await;
    assert_eq!(json["employeeId"], 11);
}

#[sqlx::test(migrations = false)]
async fn test_release_twice(pool: DbPool) {
    let app = common::seeded_app(pool).await;

    for _ in 0..2 {
        let response = post_json(app.clone(), "/api/parking/release", json!({ "parkingNum": 2 })).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["success"], true);
    }

    let json = body_json(get(app.clone(), "/api/parking/2").await).await;
    assert!(json["employeeId"].is_null());

    let response = post_json(app, "/api/parking/release", json!({ "parkingNum": 77 })).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Waitlist and bookings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_waitlist_routes(pool: DbPool) {
    let app = common::seeded_app(pool).await;

    let response = post_json(
        app.clone(),
        "/api/waitlist",
        json!({ "waitlistId": 4, "employeeId": 6 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["data"]["parkingNum"].is_null());

    let json = body_json(get(app, "/api/waitlist?active=true").await).await;
    let ids: Vec<i64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["waitlistId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[sqlx::test(migrations = false)]
async fn test_booking_routes(pool: DbPool) {
    let app = common::seeded_app(pool).await;

    let body = json!({
        "bookingId": 4,
        "parkingNum": 2,
        "employeeId": 3,
        "bookingDate": "2024-05-01",
        "startTime": "08:00:00"
    });
    let response = post_json(app.clone(), "/api/bookings", body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let body = json!({
        "bookingId": 4,
        "parkingNum": 8,
        "employeeId": 3,
        "bookingDate": "2024-05-01",
        "startTime": "08:00:00"
    });
    let response = post_json(app.clone(), "/api/bookings", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(get(app, "/api/bookings").await).await;
    assert_eq!(json.as_array().map(Vec::len), Some(4));
}
