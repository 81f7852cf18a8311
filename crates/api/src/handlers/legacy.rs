//! Action endpoints kept in their original `{success, message}` shape.

use axum::extract::State;
use axum::Json;
use parking_db::models::employee::CreateEmployee;
use parking_db::models::parking_spot::{AssignSpotRequest, ReleaseSpotRequest};
use parking_db::repositories::{EmployeeRepo, ParkingSpotRepo};
use parking_db::resource::Resource;

use crate::error::ActionError;
use crate::extract::ActionJson;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/employee/add
///
/// Body: `{employeeId, firstName, lastName, status, departmentId, age}`.
pub async fn add_employee(
    State(state): State<AppState>,
    ActionJson(input): ActionJson<CreateEmployee>,
) -> Result<Json<MessageResponse>, ActionError> {
    EmployeeRepo::validate_create(&input)?;
    EmployeeRepo::create(&state.pool, &input).await?;
    Ok(Json(MessageResponse::ok("Employee added successfully")))
}

/// POST /api/parking/assign
///
/// Body: `{parkingNum, employeeId}`. Fails with 400 when the spot is taken.
pub async fn assign_spot(
    State(state): State<AppState>,
    ActionJson(input): ActionJson<AssignSpotRequest>,
) -> Result<Json<MessageResponse>, ActionError> {
    ParkingSpotRepo::assign(&state.pool, input.parking_num, input.employee_id).await?;
    Ok(Json(MessageResponse::ok("Parking assigned successfully")))
}

/// POST /api/parking/release
///
/// Body: `{parkingNum}`. Releasing a free spot succeeds.
pub async fn release_spot(
    State(state): State<AppState>,
    ActionJson(input): ActionJson<ReleaseSpotRequest>,
) -> Result<Json<MessageResponse>, ActionError> {
    ParkingSpotRepo::release(&state.pool, input.parking_num).await?;
    Ok(Json(MessageResponse::ok("Parking released successfully")))
}
