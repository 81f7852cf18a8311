//! Occupancy behaviour of parking spots: assignment, release and the
//! assignment race.

use assert_matches::assert_matches;
use futures::future::join_all;
use parking_core::error::CoreError;
use parking_db::error::StoreError;
use parking_db::repositories::{ParkingSpotRepo, ReportRepo};
use parking_db::resource::Resource;
use parking_db::DbPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seeded(pool: &DbPool) {
    parking_db::bootstrap(pool, true).await.unwrap();
}

async fn occupant(pool: &DbPool, parking_num: i64) -> Option<i64> {
    ParkingSpotRepo::find_by_id(pool, parking_num)
        .await
        .unwrap()
        .expect("spot exists")
        .employee_id
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_assign_free_spot_then_conflict(pool: DbPool) {
    seeded(&pool).await;
    assert_eq!(occupant(&pool, 1).await, None);

    let spot = ParkingSpotRepo::assign(&pool, 1, 11).await.unwrap();
    assert_eq!(spot.employee_id, Some(11));
    assert_eq!(spot.employee_name.as_deref(), Some("Kara Walsh"));

    let err = ParkingSpotRepo::assign(&pool, 1, 12).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::SpotUnavailable { parking_num: 1 })
    );
    assert_eq!(occupant(&pool, 1).await, Some(11));
}

#[sqlx::test(migrations = false)]
async fn test_assign_missing_spot_is_unavailable(pool: DbPool) {
    seeded(&pool).await;

    let err = ParkingSpotRepo::assign(&pool, 99, 11).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::SpotUnavailable { parking_num: 99 })
    );
}

#[sqlx::test(migrations = false)]
async fn test_assign_unknown_employee_leaves_spot_free(pool: DbPool) {
    seeded(&pool).await;

    let err = ParkingSpotRepo::assign(&pool, 5, 404).await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::ConstraintViolation(msg)) if msg.contains("404"));
    assert_eq!(occupant(&pool, 5).await, None);
}

// ---------------------------------------------------------------------------
// Release
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_release_is_idempotent(pool: DbPool) {
    seeded(&pool).await;
    assert_eq!(occupant(&pool, 2).await, Some(1));

    let first = ParkingSpotRepo::release(&pool, 2).await.unwrap();
    assert_eq!(first.employee_id, None);

    let second = ParkingSpotRepo::release(&pool, 2).await.unwrap();
    assert_eq!(second.employee_id, None);
    assert_eq!(second.employee_name, None);
}

#[sqlx::test(migrations = false)]
async fn test_release_unknown_spot_is_not_found(pool: DbPool) {
    seeded(&pool).await;

    let err = ParkingSpotRepo::release(&pool, 99).await.unwrap_err();
    assert_matches!(err, StoreError::Core(CoreError::NotFound { .. }));
}

#[sqlx::test(migrations = false)]
async fn test_released_spot_can_be_reassigned(pool: DbPool) {
    seeded(&pool).await;

    ParkingSpotRepo::release(&pool, 4).await.unwrap();
    let spot = ParkingSpotRepo::assign(&pool, 4, 12).await.unwrap();
    assert_eq!(spot.employee_id, Some(12));
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = false)]
async fn test_concurrent_assignment_has_one_winner(pool: DbPool) {
    seeded(&pool).await;
    let contenders = [3_i64, 6, 8, 10, 11, 12];

    let attempts = contenders.iter().map(|&employee_id| {
        let pool = pool.clone();
        async move { ParkingSpotRepo::assign(&pool, 8, employee_id).await }
    });
    let results = join_all(attempts).await;

    let winners: Vec<i64> = results
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .filter_map(|spot| spot.employee_id)
        .collect();
    assert_eq!(winners.len(), 1, "exactly one assignment must succeed");

    for result in &results {
        if let Err(err) = result {
            assert_matches!(
                err,
                StoreError::Core(CoreError::SpotUnavailable { parking_num: 8 })
            );
        }
    }
    assert_eq!(occupant(&pool, 8).await, Some(winners[0]));
}

#[sqlx::test(migrations = false)]
async fn test_utilization_stays_consistent_across_changes(pool: DbPool) {
    seeded(&pool).await;

    ParkingSpotRepo::assign(&pool, 10, 12).await.unwrap();
    ParkingSpotRepo::release(&pool, 9).await.unwrap();
    ParkingSpotRepo::release(&pool, 9).await.unwrap();

    let stats = ReportRepo::statistics(&pool).await.unwrap();
    let utilization = stats.parking_utilization;
    assert_eq!(utilization.total, 10);
    assert_eq!(utilization.occupied, 6);
    assert_eq!(utilization.occupied + utilization.available, utilization.total);
}
