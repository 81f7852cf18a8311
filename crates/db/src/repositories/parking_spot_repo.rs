//! Repository for the `parking_spots` table.
//!
//! Occupancy changes only through [`ParkingSpotRepo::assign`] and
//! [`ParkingSpotRepo::release`]. Assignment is a single conditional `UPDATE`
//! that only matches a free spot, so of any number of concurrent assignments
//! to one spot exactly one can affect a row.

use async_trait::async_trait;
use parking_core::error::CoreError;
use parking_core::resource::ResourceKind;
use parking_core::types::DbId;
use parking_core::validation::validate_id;
use sqlx::SqliteConnection;

use crate::error::StoreResult;
use crate::models::parking_spot::{CreateParkingSpot, ParkingSpot, UpdateParkingSpot};
use crate::repositories::row_exists;
use crate::resource::{ListFilter, Resource};
use crate::DbPool;

/// Spots joined with their occupant's name.
const SELECT_SPOT: &str = "\
    SELECT p.parking_num, p.employee_id, p.ev_charge, p.temp_assign, p.fast_charge, \
           e.first_name, e.last_name, \
           e.first_name || ' ' || e.last_name AS employee_name \
    FROM parking_spots p \
    LEFT JOIN employees e ON e.employee_id = p.employee_id";

pub struct ParkingSpotRepo;

impl ParkingSpotRepo {
    /// Give a free spot to an existing employee.
    ///
    /// Fails with `SpotUnavailable` if the spot is occupied or does not exist,
    /// and with `ConstraintViolation` if the employee does not exist. Nothing
    /// changes on failure.
    pub async fn assign(
        pool: &DbPool,
        parking_num: DbId,
        employee_id: DbId,
    ) -> StoreResult<ParkingSpot> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "UPDATE parking_spots SET employee_id = ?2 \
             WHERE parking_num = ?1 \
               AND employee_id IS NULL \
               AND EXISTS (SELECT 1 FROM employees WHERE employee_id = ?2)",
        )
        .bind(parking_num)
        .bind(employee_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let employee_known = row_exists(&mut tx, "employees", "employee_id", employee_id).await?;
            tx.rollback().await?;
            if !employee_known {
                return Err(CoreError::missing_reference("Employee", employee_id).into());
            }
            tracing::debug!(parking_num, employee_id, "Spot assignment refused");
            return Err(CoreError::SpotUnavailable { parking_num }.into());
        }

        let spot = fetch_spot(&mut tx, parking_num)
            .await?
            .ok_or_else(|| CoreError::Internal("assigned spot vanished".into()))?;
        tx.commit().await?;
        tracing::info!(parking_num, employee_id, "Parking spot assigned");
        Ok(spot)
    }

    /// Mark a spot as free. Releasing a spot that is already free succeeds;
    /// an unknown spot number is `NotFound`.
    pub async fn release(pool: &DbPool, parking_num: DbId) -> StoreResult<ParkingSpot> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query("UPDATE parking_spots SET employee_id = NULL WHERE parking_num = ?1")
            .bind(parking_num)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(CoreError::not_found("Parking spot", parking_num).into());
        }

        let spot = fetch_spot(&mut tx, parking_num)
            .await?
            .ok_or_else(|| CoreError::Internal("released spot vanished".into()))?;
        tx.commit().await?;
        tracing::info!(parking_num, "Parking spot released");
        Ok(spot)
    }
}

async fn fetch_spot(
    conn: &mut SqliteConnection,
    parking_num: DbId,
) -> Result<Option<ParkingSpot>, sqlx::Error> {
    let query = format!("{SELECT_SPOT} WHERE p.parking_num = ?1");
    sqlx::query_as::<_, ParkingSpot>(&query)
        .bind(parking_num)
        .fetch_optional(&mut *conn)
        .await
}

#[async_trait]
impl Resource for ParkingSpotRepo {
    const KIND: ResourceKind = ResourceKind::Parking;

    type Row = ParkingSpot;
    type Create = CreateParkingSpot;
    type Update = UpdateParkingSpot;

    fn validate_create(input: &CreateParkingSpot) -> Result<(), CoreError> {
        validate_id(input.parking_num, "parkingNum")?;
        if let Some(employee_id) = input.employee_id {
            validate_id(employee_id, "employeeId")?;
        }
        Ok(())
    }

    async fn list(pool: &DbPool, filter: &ListFilter) -> StoreResult<Vec<ParkingSpot>> {
        let query = if filter.available {
            format!("{SELECT_SPOT} WHERE p.employee_id IS NULL ORDER BY p.parking_num")
        } else {
            format!("{SELECT_SPOT} ORDER BY p.parking_num")
        };
        let rows = sqlx::query_as::<_, ParkingSpot>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<ParkingSpot>> {
        let mut conn = pool.acquire().await?;
        Ok(fetch_spot(&mut conn, id).await?)
    }

    async fn create(pool: &DbPool, input: &CreateParkingSpot) -> StoreResult<ParkingSpot> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO parking_spots \
                 (parking_num, employee_id, ev_charge, temp_assign, fast_charge) \
             SELECT ?1, ?2, ?3, ?4, ?5 \
             WHERE ?2 IS NULL OR EXISTS (SELECT 1 FROM employees WHERE employee_id = ?2)",
        )
        .bind(input.parking_num)
        .bind(input.employee_id)
        .bind(input.ev_charge)
        .bind(input.temp_assign)
        .bind(input.fast_charge)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            let employee_id = input.employee_id.unwrap_or_default();
            return Err(CoreError::missing_reference("Employee", employee_id).into());
        }

        let spot = fetch_spot(&mut tx, input.parking_num)
            .await?
            .ok_or_else(|| CoreError::Internal("inserted spot vanished".into()))?;
        tx.commit().await?;
        tracing::info!(parking_num = spot.parking_num, "Parking spot created");
        Ok(spot)
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateParkingSpot,
    ) -> StoreResult<Option<ParkingSpot>> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "UPDATE parking_spots SET \
                 ev_charge = COALESCE(?2, ev_charge), \
                 temp_assign = COALESCE(?3, temp_assign), \
                 fast_charge = COALESCE(?4, fast_charge) \
             WHERE parking_num = ?1",
        )
        .bind(id)
        .bind(input.ev_charge)
        .bind(input.temp_assign)
        .bind(input.fast_charge)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let spot = fetch_spot(&mut tx, id).await?;
        tx.commit().await?;
        Ok(spot)
    }

    async fn delete(pool: &DbPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM parking_spots WHERE parking_num = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
