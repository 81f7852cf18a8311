/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool is reference counted. Each request checks its own
/// connection or transaction out of the pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: parking_db::DbPool,
}
