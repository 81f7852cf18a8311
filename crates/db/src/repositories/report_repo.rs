//! Read-only aggregate queries across tables.

use std::collections::BTreeMap;

use parking_core::resource::ResourceKind;

use crate::error::StoreResult;
use crate::models::report::{BuildingAvailability, ParkingUtilization, Statistics, StatusCount};
use crate::DbPool;

pub struct ReportRepo;

impl ReportRepo {
    /// Status breakdown, spot utilization and active waitlist size.
    ///
    /// All three are read inside one transaction so they describe the same
    /// snapshot.
    pub async fn statistics(pool: &DbPool) -> StoreResult<Statistics> {
        let mut tx = pool.begin().await?;

        let employee_status = sqlx::query_as::<_, StatusCount>(
            "SELECT employee_status AS status, COUNT(*) AS count \
             FROM employees GROUP BY employee_status ORDER BY employee_status",
        )
        .fetch_all(&mut *tx)
        .await?;

        let parking_utilization = sqlx::query_as::<_, ParkingUtilization>(
            "SELECT COUNT(*) AS total, \
                    COUNT(employee_id) AS occupied, \
                    COUNT(*) - COUNT(employee_id) AS available \
             FROM parking_spots",
        )
        .fetch_one(&mut *tx)
        .await?;

        let waitlist_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM waitlist_entries WHERE parking_num IS NULL",
        )
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Statistics {
            employee_status,
            parking_utilization,
            waitlist_count,
        })
    }

    /// Row count per record kind, keyed by the kind's public name.
    pub async fn table_counts(pool: &DbPool) -> StoreResult<BTreeMap<&'static str, i64>> {
        let mut counts = BTreeMap::new();
        for kind in ResourceKind::ALL {
            let query = format!("SELECT COUNT(*) FROM {}", kind.table_name());
            let count: i64 = sqlx::query_scalar(&query).fetch_one(pool).await?;
            counts.insert(kind.as_str(), count);
        }
        Ok(counts)
    }

    /// Capacity against spots held by employees of each building's
    /// departments. `available_spots` never goes below zero.
    pub async fn building_availability(pool: &DbPool) -> StoreResult<Vec<BuildingAvailability>> {
        let rows = sqlx::query_as::<_, BuildingAvailability>(
            "SELECT b.building_id, b.building_name, b.parking_capacity, \
                    COUNT(p.parking_num) AS occupied_spots, \
                    MAX(b.parking_capacity - COUNT(p.parking_num), 0) AS available_spots \
             FROM buildings b \
             LEFT JOIN departments d ON d.building_id = b.building_id \
             LEFT JOIN employees e ON e.department_id = d.department_id \
             LEFT JOIN parking_spots p ON p.employee_id = e.employee_id \
             GROUP BY b.building_id, b.building_name, b.parking_capacity \
             ORDER BY b.building_id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
