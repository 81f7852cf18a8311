//! Repository for the `ev_bookings` table.

use async_trait::async_trait;
use parking_core::error::CoreError;
use parking_core::resource::ResourceKind;
use parking_core::types::DbId;
use parking_core::validation::validate_id;
use sqlx::SqliteConnection;

use crate::error::StoreResult;
use crate::models::booking::{CreateEvBooking, EvBooking, UpdateEvBooking};
use crate::repositories::row_exists;
use crate::resource::{ListFilter, Resource};
use crate::DbPool;

/// Bookings joined with the booking employee's name.
const SELECT_BOOKING: &str = "\
    SELECT k.booking_id, k.parking_num, k.employee_id, k.booking_date, k.start_time, \
           e.first_name, e.last_name \
    FROM ev_bookings k \
    LEFT JOIN employees e ON e.employee_id = k.employee_id";

pub struct EvBookingRepo;

async fn fetch_booking(
    conn: &mut SqliteConnection,
    id: DbId,
) -> Result<Option<EvBooking>, sqlx::Error> {
    let query = format!("{SELECT_BOOKING} WHERE k.booking_id = ?1");
    sqlx::query_as::<_, EvBooking>(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

/// Explain why a booking insert matched nothing. Runs inside the failed
/// transaction so it sees the same rows the insert did.
async fn diagnose_rejected_booking(
    conn: &mut SqliteConnection,
    input: &CreateEvBooking,
) -> Result<CoreError, sqlx::Error> {
    let ev_charge: Option<bool> =
        sqlx::query_scalar("SELECT ev_charge FROM parking_spots WHERE parking_num = ?1")
            .bind(input.parking_num)
            .fetch_optional(&mut *conn)
            .await?;

    let err = match ev_charge {
        None => CoreError::missing_reference("Parking spot", input.parking_num),
        Some(false) => CoreError::Validation(format!(
            "Parking spot {} does not support EV charging",
            input.parking_num
        )),
        Some(true) => {
            if row_exists(conn, "employees", "employee_id", input.employee_id).await? {
                CoreError::Internal("EV booking insert matched no rows".into())
            } else {
                CoreError::missing_reference("Employee", input.employee_id)
            }
        }
    };
    Ok(err)
}

#[async_trait]
impl Resource for EvBookingRepo {
    const KIND: ResourceKind = ResourceKind::Bookings;

    type Row = EvBooking;
    type Create = CreateEvBooking;
    type Update = UpdateEvBooking;

    fn validate_create(input: &CreateEvBooking) -> Result<(), CoreError> {
        validate_id(input.booking_id, "bookingId")?;
        validate_id(input.parking_num, "parkingNum")?;
        validate_id(input.employee_id, "employeeId")
    }

    async fn list(pool: &DbPool, _filter: &ListFilter) -> StoreResult<Vec<EvBooking>> {
        let query = format!(
            "{SELECT_BOOKING} ORDER BY k.booking_date ASC, k.start_time ASC, k.booking_id ASC"
        );
        let rows = sqlx::query_as::<_, EvBooking>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<EvBooking>> {
        let mut conn = pool.acquire().await?;
        Ok(fetch_booking(&mut conn, id).await?)
    }

    /// The spot must exist and support EV charging; the employee must exist.
    async fn create(pool: &DbPool, input: &CreateEvBooking) -> StoreResult<EvBooking> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO ev_bookings \
                 (booking_id, parking_num, employee_id, booking_date, start_time) \
             SELECT ?1, ?2, ?3, ?4, ?5 \
             WHERE EXISTS (SELECT 1 FROM parking_spots WHERE parking_num = ?2 AND ev_charge = 1) \
               AND EXISTS (SELECT 1 FROM employees WHERE employee_id = ?3)",
        )
        .bind(input.booking_id)
        .bind(input.parking_num)
        .bind(input.employee_id)
        .bind(input.booking_date)
        .bind(input.start_time)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let err = diagnose_rejected_booking(&mut tx, input).await?;
            tx.rollback().await?;
            return Err(err.into());
        }

        let booking = fetch_booking(&mut tx, input.booking_id)
            .await?
            .ok_or_else(|| CoreError::Internal("inserted booking vanished".into()))?;
        tx.commit().await?;
        tracing::info!(
            booking_id = booking.booking_id,
            parking_num = booking.parking_num,
            employee_id = booking.employee_id,
            "EV booking created"
        );
        Ok(booking)
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateEvBooking,
    ) -> StoreResult<Option<EvBooking>> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "UPDATE ev_bookings SET \
                 booking_date = COALESCE(?2, booking_date), \
                 start_time = COALESCE(?3, start_time) \
             WHERE booking_id = ?1",
        )
        .bind(id)
        .bind(input.booking_date)
        .bind(input.start_time)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(None);
        }

        let booking = fetch_booking(&mut tx, id).await?;
        tx.commit().await?;
        Ok(booking)
    }

    async fn delete(pool: &DbPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM ev_bookings WHERE booking_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
