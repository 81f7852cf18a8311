pub mod health;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{
    bookings, directory, employees, legacy, logins, parking, records, reports, waitlist,
};
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /status                              row counts per table
///
/// /employees                           list (?status=FT|PT)
/// /employees/{id}                      get
/// /employee/add                        create (legacy shape)
///
/// /parking                             list (?available=true)
/// /parking/{num}                       get
/// /parking/assign                      assign spot (legacy shape)
/// /parking/release                     release spot (legacy shape)
///
/// /departments                         list
/// /buildings                           list
/// /waitlist                            list (?active=true), add
/// /bookings                            list, create
///
/// /reports                             statistics
/// /reports/status/{status}             employees by status
/// /reports/youngest                    youngest employee
/// /reports/buildings                   availability per building
///
/// /logins                              list, create
/// /logins/{username}                   delete
/// /logins/{username}/password          change password (PUT)
/// /login                               verify credentials (POST)
///
/// /records?table=..&id=..              generic get, create, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(directory::table_counts))
        // Employees
        .route("/employees", get(employees::list_employees))
        .route("/employees/{id}", get(employees::get_employee))
        .route("/employee/add", post(legacy::add_employee))
        // Parking
        .route("/parking", get(parking::list_spots))
        .route("/parking/assign", post(legacy::assign_spot))
        .route("/parking/release", post(legacy::release_spot))
        .route("/parking/{num}", get(parking::get_spot))
        // Organisation
        .route("/departments", get(directory::list_departments))
        .route("/buildings", get(directory::list_buildings))
        // Waitlist and EV bookings
        .route(
            "/waitlist",
            get(waitlist::list_waitlist).post(waitlist::add_waitlist_entry),
        )
        .route(
            "/bookings",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        // Reports
        .route("/reports", get(reports::statistics))
        .route("/reports/status/{status}", get(reports::status_report))
        .route("/reports/youngest", get(reports::youngest_employee))
        .route("/reports/buildings", get(reports::building_availability))
        // Logins
        .route("/logins", get(logins::list_logins).post(logins::create_login))
        .route("/logins/{username}", delete(logins::delete_login))
        .route("/logins/{username}/password", put(logins::change_password))
        .route("/login", post(logins::login))
        // Generic CRUD
        .route(
            "/records",
            get(records::get_records)
                .post(records::create_record)
                .put(records::update_record)
                .delete(records::delete_record),
        )
}
