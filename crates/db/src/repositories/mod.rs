//! Repository layer.
//!
//! Each repository is a zero-sized struct. Entity CRUD lives in its
//! [`Resource`](crate::resource::Resource) impl; operations specific to one
//! table (assignment, reports, credentials) are inherent async fns that take
//! `&DbPool` as the first argument.
//!
//! Writes that depend on another row embed the existence check in the write
//! statement itself and, when nothing was written, diagnose the cause inside
//! the same transaction.

use parking_core::types::DbId;
use sqlx::SqliteConnection;

pub mod booking_repo;
pub mod building_repo;
pub mod department_repo;
pub mod employee_repo;
pub mod login_repo;
pub mod parking_spot_repo;
pub mod report_repo;
pub mod waitlist_repo;

pub use booking_repo::EvBookingRepo;
pub use building_repo::BuildingRepo;
pub use department_repo::DepartmentRepo;
pub use employee_repo::EmployeeRepo;
pub use login_repo::LoginRepo;
pub use parking_spot_repo::ParkingSpotRepo;
pub use report_repo::ReportRepo;
pub use waitlist_repo::WaitlistRepo;

/// Whether `table` has a row whose `key_column` equals `id`.
///
/// `table` and `key_column` are always literals from this crate.
pub(crate) async fn row_exists(
    conn: &mut SqliteConnection,
    table: &str,
    key_column: &str,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!("SELECT COUNT(*) FROM {table} WHERE {key_column} = ?1");
    let count: i64 = sqlx::query_scalar(&query)
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count > 0)
}
