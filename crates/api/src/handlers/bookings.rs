use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use parking_db::models::booking::{CreateEvBooking, EvBooking};
use parking_db::repositories::EvBookingRepo;
use parking_db::resource::{ListFilter, Resource};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/bookings
pub async fn list_bookings(State(state): State<AppState>) -> AppResult<Json<Vec<EvBooking>>> {
    let bookings = EvBookingRepo::list(&state.pool, &ListFilter::default()).await?;
    Ok(Json(bookings))
}

/// POST /api/bookings
///
/// Book an EV-capable spot. Non-EV spots are rejected with 400.
pub async fn create_booking(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEvBooking>,
) -> AppResult<(StatusCode, Json<DataResponse<EvBooking>>)> {
    EvBookingRepo::validate_create(&input)?;
    let booking = EvBookingRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(booking))))
}
