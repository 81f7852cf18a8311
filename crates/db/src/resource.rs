//! Uniform record access over the closed set of [`ResourceKind`]s.
//!
//! Every entity repository implements [`Resource`]. The `*_record` functions
//! take a runtime [`ResourceKind`] (parsed from a request) and dispatch to the
//! matching implementation, exchanging JSON so the generic CRUD endpoint does
//! not need to know any row type.

use async_trait::async_trait;
use parking_core::employee_status::EmployeeStatus;
use parking_core::error::CoreError;
use parking_core::resource::ResourceKind;
use parking_core::types::DbId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};
use crate::repositories::{
    BuildingRepo, DepartmentRepo, EmployeeRepo, EvBookingRepo, ParkingSpotRepo, WaitlistRepo,
};
use crate::DbPool;

/// Optional listing filters. Each applies only to the kind it names and is
/// ignored by the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListFilter {
    /// Employees: only this status.
    pub status: Option<EmployeeStatus>,
    /// Parking: only free spots.
    #[serde(default)]
    pub available: bool,
    /// Waitlist: only entries without an assigned spot.
    #[serde(default)]
    pub active: bool,
}

/// CRUD access to one entity table.
#[async_trait]
pub trait Resource {
    const KIND: ResourceKind;

    type Row: Serialize + Send;
    type Create: DeserializeOwned + Send + Sync;
    type Update: DeserializeOwned + Send + Sync;

    /// Field checks run before `create` touches the database.
    fn validate_create(_input: &Self::Create) -> Result<(), CoreError> {
        Ok(())
    }

    /// Field checks run before `update` touches the database.
    fn validate_update(_input: &Self::Update) -> Result<(), CoreError> {
        Ok(())
    }

    async fn list(pool: &DbPool, filter: &ListFilter) -> StoreResult<Vec<Self::Row>>;

    async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Self::Row>>;

    /// Insert a row. Missing parents and duplicate keys are
    /// `ConstraintViolation`s; nothing is persisted on failure.
    async fn create(pool: &DbPool, input: &Self::Create) -> StoreResult<Self::Row>;

    /// Apply the non-`None` fields. Returns `None` if no row has `id`.
    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &Self::Update,
    ) -> StoreResult<Option<Self::Row>>;

    /// Remove a row without touching rows that reference it.
    /// Returns `true` if a row was deleted.
    async fn delete(pool: &DbPool, id: DbId) -> StoreResult<bool>;
}

macro_rules! dispatch {
    ($kind:expr, $func:ident($($arg:expr),*)) => {
        match $kind {
            ResourceKind::Employees => $func::<EmployeeRepo>($($arg),*).await,
            ResourceKind::Parking => $func::<ParkingSpotRepo>($($arg),*).await,
            ResourceKind::Departments => $func::<DepartmentRepo>($($arg),*).await,
            ResourceKind::Buildings => $func::<BuildingRepo>($($arg),*).await,
            ResourceKind::Waitlist => $func::<WaitlistRepo>($($arg),*).await,
            ResourceKind::Bookings => $func::<EvBookingRepo>($($arg),*).await,
        }
    };
}

/// List every row of `kind` (joined with its parents), ordered by primary key
/// except the waitlist, which is ordered by wait-since date.
pub async fn list_records(pool: &DbPool, kind: ResourceKind, filter: &ListFilter) -> StoreResult<Value> {
    dispatch!(kind, list_as(pool, filter))
}

/// Fetch one row, or `NotFound`.
pub async fn get_record(pool: &DbPool, kind: ResourceKind, id: DbId) -> StoreResult<Value> {
    dispatch!(kind, get_as(pool, id))
}

/// Deserialize `body` into the kind's create DTO, validate it and insert it.
pub async fn create_record(pool: &DbPool, kind: ResourceKind, body: Value) -> StoreResult<Value> {
    dispatch!(kind, create_as(pool, body))
}

/// Deserialize `body` into the kind's update DTO, validate it and apply it.
/// Unknown fields and a body that sets no field are `Validation` errors.
pub async fn update_record(
    pool: &DbPool,
    kind: ResourceKind,
    id: DbId,
    body: Value,
) -> StoreResult<Value> {
    dispatch!(kind, update_as(pool, id, body))
}

/// Delete one row, or `NotFound` if nothing matched. No cascading.
pub async fn delete_record(pool: &DbPool, kind: ResourceKind, id: DbId) -> StoreResult<()> {
    dispatch!(kind, delete_as(pool, id))
}

async fn list_as<R: Resource>(pool: &DbPool, filter: &ListFilter) -> StoreResult<Value> {
    let rows = R::list(pool, filter).await?;
    to_json(&rows)
}

async fn get_as<R: Resource>(pool: &DbPool, id: DbId) -> StoreResult<Value> {
    let row = R::find_by_id(pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(R::KIND.entity_name(), id))?;
    to_json(&row)
}

async fn create_as<R: Resource>(pool: &DbPool, body: Value) -> StoreResult<Value> {
    let input: R::Create = parse_body(body)?;
    R::validate_create(&input)?;
    let row = R::create(pool, &input).await?;
    to_json(&row)
}

async fn update_as<R: Resource>(pool: &DbPool, id: DbId, body: Value) -> StoreResult<Value> {
    if body.as_object().is_some_and(|fields| fields.values().all(Value::is_null)) {
        return Err(CoreError::Validation("No fields to update".into()).into());
    }
    let input: R::Update = parse_body(body)?;
    R::validate_update(&input)?;
    let row = R::update(pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(R::KIND.entity_name(), id))?;
    to_json(&row)
}

async fn delete_as<R: Resource>(pool: &DbPool, id: DbId) -> StoreResult<()> {
    if R::delete(pool, id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found(R::KIND.entity_name(), id).into())
    }
}

fn parse_body<T: DeserializeOwned>(body: Value) -> Result<T, CoreError> {
    serde_json::from_value(body)
        .map_err(|e| CoreError::Validation(format!("Invalid request body: {e}")))
}

fn to_json<T: Serialize>(value: &T) -> StoreResult<Value> {
    serde_json::to_value(value)
        .map_err(|e| StoreError::Core(CoreError::Internal(format!("Serialization failed: {e}"))))
}
