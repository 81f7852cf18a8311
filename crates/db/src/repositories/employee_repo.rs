//! Repository for the `employees` table.

use async_trait::async_trait;
use parking_core::employee_status::EmployeeStatus;
use parking_core::error::CoreError;
use parking_core::resource::ResourceKind;
use parking_core::types::DbId;
use parking_core::validation::{validate_age, validate_id, validate_name};
use sqlx::SqliteConnection;

use crate::error::StoreResult;
use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};
use crate::repositories::row_exists;
use crate::resource::{ListFilter, Resource};
use crate::DbPool;

/// Employees joined with department, building and the lowest-numbered spot
/// they occupy.
const SELECT_EMPLOYEE: &str = "\
    SELECT e.employee_id, e.first_name, e.last_name, e.employee_status, \
           e.department_id, e.age, \
           d.department_name, d.building_id, b.building_name, \
           (SELECT MIN(p.parking_num) FROM parking_spots p \
             WHERE p.employee_id = e.employee_id) AS parking_num \
    FROM employees e \
    LEFT JOIN departments d ON d.department_id = e.department_id \
    LEFT JOIN buildings b ON b.building_id = d.building_id";

pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Employees holding `status`, grouped by department name.
    pub async fn list_by_status(
        pool: &DbPool,
        status: EmployeeStatus,
    ) -> StoreResult<Vec<Employee>> {
        let query = format!(
            "{SELECT_EMPLOYEE} WHERE e.employee_status = ?1 \
             ORDER BY d.department_name, e.last_name, e.employee_id"
        );
        let rows = sqlx::query_as::<_, Employee>(&query)
            .bind(status.as_str())
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    /// The employee with the lowest age. Ties go to the lowest id.
    pub async fn youngest(pool: &DbPool) -> StoreResult<Option<Employee>> {
        let query = format!("{SELECT_EMPLOYEE} ORDER BY e.age ASC, e.employee_id ASC LIMIT 1");
        let row = sqlx::query_as::<_, Employee>(&query)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}

async fn fetch_employee(
    conn: &mut SqliteConnection,
    id: DbId,
) -> Result<Option<Employee>, sqlx::Error> {
    let query = format!("{SELECT_EMPLOYEE} WHERE e.employee_id = ?1");
    sqlx::query_as::<_, Employee>(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

#[async_trait]
impl Resource for EmployeeRepo {
    const KIND: ResourceKind = ResourceKind::Employees;

    type Row = Employee;
    type Create = CreateEmployee;
    type Update = UpdateEmployee;

    fn validate_create(input: &CreateEmployee) -> Result<(), CoreError> {
        validate_id(input.employee_id, "employeeId")?;
        validate_name(&input.first_name, "firstName")?;
        validate_name(&input.last_name, "lastName")?;
        validate_id(input.department_id, "departmentId")?;
        validate_age(input.age)
    }

    fn validate_update(input: &UpdateEmployee) -> Result<(), CoreError> {
        if let Some(first_name) = &input.first_name {
            validate_name(first_name, "firstName")?;
        }
        if let Some(last_name) = &input.last_name {
            validate_name(last_name, "lastName")?;
        }
        if let Some(department_id) = input.department_id {
            validate_id(department_id, "departmentId")?;
        }
        if let Some(age) = input.age {
            validate_age(age)?;
        }
        Ok(())
    }

    async fn list(pool: &DbPool, filter: &ListFilter) -> StoreResult<Vec<Employee>> {
        let rows = match filter.status {
            Some(status) => {
                let query = format!(
                    "{SELECT_EMPLOYEE} WHERE e.employee_status = ?1 ORDER BY e.employee_id"
                );
                sqlx::query_as::<_, Employee>(&query)
                    .bind(status.as_str())
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!("{SELECT_EMPLOYEE} ORDER BY e.employee_id");
                sqlx::query_as::<_, Employee>(&query).fetch_all(pool).await?
            }
        };
        Ok(rows)
    }

    async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Employee>> {
        let mut conn = pool.acquire().await?;
        Ok(fetch_employee(&mut conn, id).await?)
    }

    async fn create(pool: &DbPool, input: &CreateEmployee) -> StoreResult<Employee> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO employees \
                 (employee_id, first_name, last_name, employee_status, department_id, age) \
             SELECT ?1, ?2, ?3, ?4, ?5, ?6 \
             WHERE EXISTS (SELECT 1 FROM departments WHERE department_id = ?5)",
        )
        .bind(input.employee_id)
        .bind(input.first_name.trim())
        .bind(input.last_name.trim())
        .bind(input.employee_status.as_str())
        .bind(input.department_id)
        .bind(input.age)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(CoreError::missing_reference("Department", input.department_id).into());
        }

        let employee = fetch_employee(&mut tx, input.employee_id)
            .await?
            .ok_or_else(|| CoreError::Internal("inserted employee vanished".into()))?;
        tx.commit().await?;
        tracing::info!(
            employee_id = employee.employee_id,
            department_id = employee.department_id,
            "Employee created"
        );
        Ok(employee)
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> StoreResult<Option<Employee>> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "UPDATE employees SET \
                 first_name = COALESCE(?2, first_name), \
                 last_name = COALESCE(?3, last_name), \
                 employee_status = COALESCE(?4, employee_status), \
                 department_id = COALESCE(?5, department_id), \
                 age = COALESCE(?6, age) \
             WHERE employee_id = ?1 \
               AND (?5 IS NULL OR EXISTS (SELECT 1 FROM departments WHERE department_id = ?5))",
        )
        .bind(id)
        .bind(input.first_name.as_deref().map(str::trim))
        .bind(input.last_name.as_deref().map(str::trim))
        .bind(input.employee_status.map(EmployeeStatus::as_str))
        .bind(input.department_id)
        .bind(input.age)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let known = row_exists(&mut tx, "employees", "employee_id", id).await?;
            tx.rollback().await?;
            return match (known, input.department_id) {
                (true, Some(department_id)) => {
                    Err(CoreError::missing_reference("Department", department_id).into())
                }
                _ => Ok(None),
            };
        }

        let employee = fetch_employee(&mut tx, id).await?;
        tx.commit().await?;
        Ok(employee)
    }

    /// Parking spots, waitlist entries, bookings and logins that reference
    /// the employee are left untouched.
    async fn delete(pool: &DbPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(employee_id = id, "Employee deleted");
        }
        Ok(deleted)
    }
}
