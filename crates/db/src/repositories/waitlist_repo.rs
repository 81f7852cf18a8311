//! Repository for the `waitlist_entries` table.

use async_trait::async_trait;
use chrono::Utc;
use parking_core::error::CoreError;
use parking_core::resource::ResourceKind;
use parking_core::types::{Date, DbId};
use parking_core::validation::validate_id;
use sqlx::SqliteConnection;

use crate::error::StoreResult;
use crate::models::waitlist::{CreateWaitlistEntry, UpdateWaitlistEntry, WaitlistEntry};
use crate::repositories::row_exists;
use crate::resource::{ListFilter, Resource};
use crate::DbPool;

/// Entries joined with the waiting employee and their department.
const SELECT_ENTRY: &str = "\
    SELECT w.waitlist_id, w.employee_id, w.wait_from, w.parking_num, \
           e.first_name, e.last_name, e.employee_status, d.department_name \
    FROM waitlist_entries w \
    LEFT JOIN employees e ON e.employee_id = w.employee_id \
    LEFT JOIN departments d ON d.department_id = e.department_id";

/// Longest-waiting first.
const ORDER_BY_WAIT: &str = "ORDER BY w.wait_from ASC, w.waitlist_id ASC";

pub struct WaitlistRepo;

impl WaitlistRepo {
    /// Put an existing employee on the waitlist as of today, with no spot.
    pub async fn add_entry(
        pool: &DbPool,
        waitlist_id: DbId,
        employee_id: DbId,
    ) -> StoreResult<WaitlistEntry> {
        Self::add_entry_on(pool, waitlist_id, employee_id, Utc::now().date_naive()).await
    }

    /// [`WaitlistRepo::add_entry`] with an explicit wait-since date.
    pub async fn add_entry_on(
        pool: &DbPool,
        waitlist_id: DbId,
        employee_id: DbId,
        wait_from: Date,
    ) -> StoreResult<WaitlistEntry> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO waitlist_entries (waitlist_id, employee_id, wait_from, parking_num) \
             SELECT ?1, ?2, ?3, NULL \
             WHERE EXISTS (SELECT 1 FROM employees WHERE employee_id = ?2)",
        )
        .bind(waitlist_id)
        .bind(employee_id)
        .bind(wait_from)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(CoreError::missing_reference("Employee", employee_id).into());
        }

        let entry = fetch_entry(&mut tx, waitlist_id)
            .await?
            .ok_or_else(|| CoreError::Internal("inserted waitlist entry vanished".into()))?;
        tx.commit().await?;
        tracing::info!(waitlist_id, employee_id, %wait_from, "Employee added to waitlist");
        Ok(entry)
    }
}

async fn fetch_entry(
    conn: &mut SqliteConnection,
    id: DbId,
) -> Result<Option<WaitlistEntry>, sqlx::Error> {
    let query = format!("{SELECT_ENTRY} WHERE w.waitlist_id = ?1");
    sqlx::query_as::<_, WaitlistEntry>(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

#[async_trait]
impl Resource for WaitlistRepo {
    const KIND: ResourceKind = ResourceKind::Waitlist;

    type Row = WaitlistEntry;
    type Create = CreateWaitlistEntry;
    type Update = UpdateWaitlistEntry;

    fn validate_create(input: &CreateWaitlistEntry) -> Result<(), CoreError> {
        validate_id(input.waitlist_id, "waitlistId")?;
        validate_id(input.employee_id, "employeeId")
    }

    fn validate_update(input: &UpdateWaitlistEntry) -> Result<(), CoreError> {
        if let Some(parking_num) = input.parking_num {
            validate_id(parking_num, "parkingNum")?;
        }
        Ok(())
    }

    async fn list(pool: &DbPool, filter: &ListFilter) -> StoreResult<Vec<WaitlistEntry>> {
        let query = if filter.active {
            format!("{SELECT_ENTRY} WHERE w.parking_num IS NULL {ORDER_BY_WAIT}")
        } else {
            format!("{SELECT_ENTRY} {ORDER_BY_WAIT}")
        };
        let rows = sqlx::query_as::<_, WaitlistEntry>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<WaitlistEntry>> {
        let mut conn = pool.acquire().await?;
        Ok(fetch_entry(&mut conn, id).await?)
    }

    async fn create(pool: &DbPool, input: &CreateWaitlistEntry) -> StoreResult<WaitlistEntry> {
        Self::add_entry(pool, input.waitlist_id, input.employee_id).await
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateWaitlistEntry,
    ) -> StoreResult<Option<WaitlistEntry>> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "UPDATE waitlist_entries SET parking_num = COALESCE(?2, parking_num) \
             WHERE waitlist_id = ?1 \
               AND (?2 IS NULL OR EXISTS (SELECT 1 FROM parking_spots WHERE parking_num = ?2))",
        )
        .bind(id)
        .bind(input.parking_num)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let known = row_exists(&mut tx, "waitlist_entries", "waitlist_id", id).await?;
            tx.rollback().await?;
            return match (known, input.parking_num) {
                (true, Some(parking_num)) => {
                    Err(CoreError::missing_reference("Parking spot", parking_num).into())
                }
                _ => Ok(None),
            };
        }

        let entry = fetch_entry(&mut tx, id).await?;
        tx.commit().await?;
        Ok(entry)
    }

    async fn delete(pool: &DbPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM waitlist_entries WHERE waitlist_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
