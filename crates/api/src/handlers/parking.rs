use axum::extract::State;
use axum::Json;
use parking_core::error::CoreError;
use parking_core::types::DbId;
use parking_db::models::parking_spot::ParkingSpot;
use parking_db::repositories::ParkingSpotRepo;
use parking_db::resource::{ListFilter, Resource};

use crate::error::AppResult;
use crate::extract::{AppPath, AppQuery};
use crate::state::AppState;

/// GET /api/parking
///
/// Every spot with its occupant's name. `?available=true` keeps free spots only.
pub async fn list_spots(
    State(state): State<AppState>,
    AppQuery(filter): AppQuery<ListFilter>,
) -> AppResult<Json<Vec<ParkingSpot>>> {
    let spots = ParkingSpotRepo::list(&state.pool, &filter).await?;
    Ok(Json(spots))
}

/// GET /api/parking/{num}
pub async fn get_spot(
    State(state): State<AppState>,
    AppPath(parking_num): AppPath<DbId>,
) -> AppResult<Json<ParkingSpot>> {
    let spot = ParkingSpotRepo::find_by_id(&state.pool, parking_num)
        .await?
        .ok_or_else(|| CoreError::not_found("Parking spot", parking_num))?;
    Ok(Json(spot))
}
