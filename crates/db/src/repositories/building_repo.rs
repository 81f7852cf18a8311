//! Repository for the `buildings` table.

use async_trait::async_trait;
use parking_core::error::CoreError;
use parking_core::resource::ResourceKind;
use parking_core::types::DbId;
use parking_core::validation::{validate_id, validate_name, validate_non_negative};

use crate::error::StoreResult;
use crate::models::building::{Building, CreateBuilding, UpdateBuilding};
use crate::resource::{ListFilter, Resource};
use crate::DbPool;

/// Column list for `buildings` queries.
const COLUMNS: &str = "building_id, building_name, parking_capacity";

pub struct BuildingRepo;

#[async_trait]
impl Resource for BuildingRepo {
    const KIND: ResourceKind = ResourceKind::Buildings;

    type Row = Building;
    type Create = CreateBuilding;
    type Update = UpdateBuilding;

    fn validate_create(input: &CreateBuilding) -> Result<(), CoreError> {
        validate_id(input.building_id, "buildingId")?;
        validate_name(&input.building_name, "buildingName")?;
        validate_non_negative(input.parking_capacity, "parkingCapacity")
    }

    fn validate_update(input: &UpdateBuilding) -> Result<(), CoreError> {
        if let Some(name) = &input.building_name {
            validate_name(name, "buildingName")?;
        }
        if let Some(capacity) = input.parking_capacity {
            validate_non_negative(capacity, "parkingCapacity")?;
        }
        Ok(())
    }

    async fn list(pool: &DbPool, _filter: &ListFilter) -> StoreResult<Vec<Building>> {
        let query = format!("SELECT {COLUMNS} FROM buildings ORDER BY building_id");
        let rows = sqlx::query_as::<_, Building>(&query).fetch_all(pool).await?;
        Ok(rows)
    }

    async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Building>> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE building_id = ?1");
        let row = sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    async fn create(pool: &DbPool, input: &CreateBuilding) -> StoreResult<Building> {
        let query = format!(
            "INSERT INTO buildings (building_id, building_name, parking_capacity) \
             VALUES (?1, ?2, ?3) \
             RETURNING {COLUMNS}"
        );
        let building = sqlx::query_as::<_, Building>(&query)
            .bind(input.building_id)
            .bind(input.building_name.trim())
            .bind(input.parking_capacity)
            .fetch_one(pool)
            .await?;
        tracing::info!(building_id = building.building_id, "Building created");
        Ok(building)
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateBuilding,
    ) -> StoreResult<Option<Building>> {
        let query = format!(
            "UPDATE buildings SET \
                 building_name = COALESCE(?2, building_name), \
                 parking_capacity = COALESCE(?3, parking_capacity) \
             WHERE building_id = ?1 \
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .bind(input.building_name.as_deref().map(str::trim))
            .bind(input.parking_capacity)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    async fn delete(pool: &DbPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM buildings WHERE building_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
