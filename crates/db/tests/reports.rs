use parking_core::employee_status::EmployeeStatus;
use parking_db::repositories::{EmployeeRepo, ReportRepo, WaitlistRepo};
use parking_db::DbPool;

async fn seeded(pool: &DbPool) {
    parking_db::bootstrap(pool, true).await.unwrap();
}

#[sqlx::test(migrations = false)]
async fn test_statistics_on_seed(pool: DbPool) {
    seeded(&pool).await;

    let stats = ReportRepo::statistics(&pool).await.unwrap();

    let by_status: Vec<(&str, i64)> = stats
        .employee_status
        .iter()
        .map(|s| (s.status.as_str(), s.count))
        .collect();
    assert_eq!(by_status, vec![("FT", 8), ("PT", 4)]);

    assert_eq!(stats.parking_utilization.total, 10);
    assert_eq!(stats.parking_utilization.occupied, 6);
    assert_eq!(stats.parking_utilization.available, 4);
    assert_eq!(stats.waitlist_count, 2);
}

#[sqlx::test(migrations = false)]
async fn test_waitlist_count_tracks_active_entries(pool: DbPool) {
    seeded(&pool).await;

    WaitlistRepo::add_entry(&pool, 4, 6).await.unwrap();
    let stats = ReportRepo::statistics(&pool).await.unwrap();
    assert_eq!(stats.waitlist_count, 3);
}

#[sqlx::test(migrations = false)]
async fn test_table_counts(pool: DbPool) {
    seeded(&pool).await;

    let counts = ReportRepo::table_counts(&pool).await.unwrap();
    assert_eq!(counts["employees"], 12);
    assert_eq!(counts["parking"], 10);
    assert_eq!(counts["departments"], 5);
    assert_eq!(counts["buildings"], 3);
    assert_eq!(counts["waitlist"], 3);
    assert_eq!(counts["bookings"], 3);
}

#[sqlx::test(migrations = false)]
async fn test_status_report_groups_by_department(pool: DbPool) {
    seeded(&pool).await;

    let part_time = EmployeeRepo::list_by_status(&pool, EmployeeStatus::PartTime)
        .await
        .unwrap();
    let rows: Vec<(i64, Option<&str>)> = part_time
        .iter()
        .map(|e| (e.employee_id, e.department_name.as_deref()))
        .collect();
    assert_eq!(
        rows,
        vec![
            (11, Some("Engineering")),
            (3, Some("Finance")),
            (8, Some("Human Resources")),
            (6, Some("Marketing")),
        ]
    );
}

#[sqlx::test(migrations = false)]
async fn test_youngest_employee(pool: DbPool) {
    seeded(&pool).await;

    let youngest = EmployeeRepo::youngest(&pool).await.unwrap().unwrap();
    assert_eq!(youngest.employee_id, 11);
    assert_eq!(youngest.age, 22);
    assert_eq!(youngest.building_name.as_deref(), Some("North Tower"));
}

#[sqlx::test(migrations = false)]
async fn test_youngest_on_empty_table(pool: DbPool) {
    seeded(&pool).await;
    sqlx::query("DELETE FROM employees")
        .execute(&pool)
        .await
        .unwrap();

    assert!(EmployeeRepo::youngest(&pool).await.unwrap().is_none());
}

#[sqlx::test(migrations = false)]
async fn test_building_availability(pool: DbPool) {
    seeded(&pool).await;

    let rows = ReportRepo::building_availability(&pool).await.unwrap();
    let summary: Vec<(i64, i64, i64)> = rows
        .iter()
        .map(|b| (b.building_id, b.occupied_spots, b.available_spots))
        .collect();
    assert_eq!(summary, vec![(1, 3, 37), (2, 2, 23), (3, 1, 14)]);
}

#[sqlx::test(migrations = false)]
async fn test_building_availability_never_negative(pool: DbPool) {
    seeded(&pool).await;
    sqlx::query("UPDATE buildings SET parking_capacity = 1 WHERE building_id = 1")
        .execute(&pool)
        .await
        .unwrap();

    let rows = ReportRepo::building_availability(&pool).await.unwrap();
    assert_eq!(rows[0].occupied_spots, 3);
    assert_eq!(rows[0].available_spots, 0);
}
