use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use parking_db::models::waitlist::{CreateWaitlistEntry, WaitlistEntry};
use parking_db::repositories::WaitlistRepo;
use parking_db::resource::{ListFilter, Resource};

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/waitlist
///
/// Longest-waiting first. `?active=true` hides entries that already got a spot.
pub async fn list_waitlist(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ListFilter>,
) -> AppResult<Json<Vec<WaitlistEntry>>> {
    let entries = WaitlistRepo::list(&state.pool, &filter).await?;
    Ok(Json(entries))
}

/// POST /api/waitlist
///
/// Put an employee on the waitlist as of today.
pub async fn add_waitlist_entry(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateWaitlistEntry>,
) -> AppResult<(StatusCode, Json<DataResponse<WaitlistEntry>>)> {
    WaitlistRepo::validate_create(&input)?;
    let entry = WaitlistRepo::add_entry(&state.pool, input.waitlist_id, input.employee_id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(entry))))
}
