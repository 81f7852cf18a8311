//! Generic CRUD over every record kind: `/api/records?table=..&id=..`.
//!
//! The `table` parameter is parsed into a [`ResourceKind`] before anything
//! touches the store, so an unknown table is always a 400. `table=stats` is a
//! read-only alias for the statistics report.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use parking_core::employee_status::EmployeeStatus;
use parking_core::error::CoreError;
use parking_core::resource::ResourceKind;
use parking_core::types::DbId;
use parking_db::repositories::{ParkingSpotRepo, ReportRepo};
use parking_db::resource::{self, ListFilter};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::AppQuery;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Name accepted in `table` besides the resource kinds.
const STATS_TABLE: &str = "stats";

/// Query string for `/api/records`.
///
/// Filter fields are spelled out rather than flattened from [`ListFilter`]
/// because flattened fields lose their types in query-string decoding.
#[derive(Debug, Deserialize)]
pub struct RecordParams {
    pub table: String,
    pub id: Option<DbId>,
    pub action: Option<RecordAction>,
    /// Bare `assign` / `release` flags, equivalent to `action=..`.
    pub assign: Option<String>,
    pub release: Option<String>,
    pub status: Option<EmployeeStatus>,
    #[serde(default)]
    pub available: bool,
    #[serde(default)]
    pub active: bool,
}

/// Occupancy operations reachable through `PUT ?table=parking&action=..`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordAction {
    Assign,
    Release,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AssignBody {
    employee_id: DbId,
}

enum Target {
    Stats,
    Kind(ResourceKind),
}

impl RecordParams {
    fn target(&self) -> Result<Target, CoreError> {
        if self.table == STATS_TABLE {
            Ok(Target::Stats)
        } else {
            self.table.parse().map(Target::Kind)
        }
    }

    /// The resource kind for a write. Statistics cannot be written.
    fn writable_kind(&self) -> AppResult<ResourceKind> {
        match self.target()? {
            Target::Kind(kind) => Ok(kind),
            Target::Stats => Err(AppError::BadRequest(
                "The stats table is read-only".into(),
            )),
        }
    }

    /// `action` wins over the bare flags.
    fn action(&self) -> Option<RecordAction> {
        self.action.or_else(|| {
            if self.assign.is_some() {
                Some(RecordAction::Assign)
            } else if self.release.is_some() {
                Some(RecordAction::Release)
            } else {
                None
            }
        })
    }

    fn required_id(&self) -> AppResult<DbId> {
        self.id
            .ok_or_else(|| AppError::BadRequest("The id parameter is required".into()))
    }

    fn filter(&self) -> ListFilter {
        ListFilter {
            status: self.status,
            available: self.available,
            active: self.active,
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| AppError::InternalError(format!("Serialization failed: {e}")))
}

/// Parse a request body, treating an empty body as `{}`.
fn parse_body(body: &Bytes) -> AppResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/records?table=..[&id=..]
///
/// Without `id` lists the table (honouring `status`, `available`, `active`);
/// with `id` returns one row or 404.
pub async fn get_records(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecordParams>,
) -> AppResult<Json<DataResponse<Value>>> {
    let data = match params.target()? {
        Target::Stats => to_value(&ReportRepo::statistics(&state.pool).await?)?,
        Target::Kind(kind) => match params.id {
            Some(id) => resource::get_record(&state.pool, kind, id).await?,
            None => resource::list_records(&state.pool, kind, &params.filter()).await?,
        },
    };
    Ok(Json(DataResponse::new(data)))
}

/// POST /api/records?table=..
///
/// Create a row from the JSON body. Returns 201 with the stored row.
pub async fn create_record(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecordParams>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<DataResponse<Value>>)> {
    let kind = params.writable_kind()?;
    let created = resource::create_record(&state.pool, kind, parse_body(&body)?).await?;
    tracing::info!(table = %kind, "Record created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(created))))
}

/// PUT /api/records?table=..&id=..[&action=assign|release]
///
/// Apply a partial update. For `table=parking`, `action=assign` (body
/// `{employeeId}`) and `action=release` change occupancy instead; the bare
/// `assign` / `release` flags do the same. An update naming no field is a 400.
pub async fn update_record(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecordParams>,
    body: Bytes,
) -> AppResult<Json<DataResponse<Value>>> {
    let kind = params.writable_kind()?;
    let id = params.required_id()?;
    let body = parse_body(&body)?;

    let updated = match (kind, params.action()) {
        (ResourceKind::Parking, Some(RecordAction::Assign)) => {
            let input: AssignBody = serde_json::from_value(body)
                .map_err(|e| CoreError::Validation(format!("Invalid request body: {e}")))?;
            to_value(&ParkingSpotRepo::assign(&state.pool, id, input.employee_id).await?)?
        }
        (ResourceKind::Parking, Some(RecordAction::Release)) => {
            to_value(&ParkingSpotRepo::release(&state.pool, id).await?)?
        }
        (_, Some(_)) => {
            return Err(AppError::BadRequest(format!(
                "The action parameter is only supported for table=parking, not {kind}"
            )));
        }
        (ResourceKind::Parking, None) if body.get("employeeId").is_some() => {
            return Err(CoreError::Validation(
                "employeeId cannot be updated directly; use action=assign or action=release"
                    .into(),
            )
            .into());
        }
        (_, None) => resource::update_record(&state.pool, kind, id, body).await?,
    };
    Ok(Json(DataResponse::new(updated)))
}

/// DELETE /api/records?table=..&id=..
///
/// Dependent rows are left in place.
pub async fn delete_record(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<RecordParams>,
) -> AppResult<Json<MessageResponse>> {
    let kind = params.writable_kind()?;
    let id = params.required_id()?;
    resource::delete_record(&state.pool, kind, id).await?;
    tracing::info!(table = %kind, id, "Record deleted");
    Ok(Json(MessageResponse::ok(format!(
        "{} {id} deleted",
        kind.entity_name()
    ))))
}
