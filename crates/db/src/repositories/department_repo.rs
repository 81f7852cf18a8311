//! Repository for the `departments` table.

use async_trait::async_trait;
use parking_core::error::CoreError;
use parking_core::resource::ResourceKind;
use parking_core::types::DbId;
use parking_core::validation::{validate_id, validate_name};
use sqlx::SqliteConnection;

use crate::error::StoreResult;
use crate::models::department::{CreateDepartment, Department, UpdateDepartment};
use crate::repositories::row_exists;
use crate::resource::{ListFilter, Resource};
use crate::DbPool;

/// Departments joined with their building's name.
const SELECT_DEPARTMENT: &str = "\
    SELECT d.department_id, d.department_name, d.building_id, b.building_name \
    FROM departments d \
    LEFT JOIN buildings b ON b.building_id = d.building_id";

pub struct DepartmentRepo;

async fn fetch_department(
    conn: &mut SqliteConnection,
    id: DbId,
) -> Result<Option<Department>, sqlx::Error> {
    let query = format!("{SELECT_DEPARTMENT} WHERE d.department_id = ?1");
    sqlx::query_as::<_, Department>(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
}

#[async_trait]
impl Resource for DepartmentRepo {
    const KIND: ResourceKind = ResourceKind::Departments;

    type Row = Department;
    type Create = CreateDepartment;
    type Update = UpdateDepartment;

    fn validate_create(input: &CreateDepartment) -> Result<(), CoreError> {
        validate_id(input.department_id, "departmentId")?;
        validate_name(&input.department_name, "departmentName")?;
        validate_id(input.building_id, "buildingId")
    }

    fn validate_update(input: &UpdateDepartment) -> Result<(), CoreError> {
        if let Some(name) = &input.department_name {
            validate_name(name, "departmentName")?;
        }
        if let Some(building_id) = input.building_id {
            validate_id(building_id, "buildingId")?;
        }
        Ok(())
    }

    async fn list(pool: &DbPool, _filter: &ListFilter) -> StoreResult<Vec<Department>> {
        let query = format!("{SELECT_DEPARTMENT} ORDER BY d.department_id");
        let rows = sqlx::query_as::<_, Department>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    async fn find_by_id(pool: &DbPool, id: DbId) -> StoreResult<Option<Department>> {
        let mut conn = pool.acquire().await?;
        Ok(fetch_department(&mut conn, id).await?)
    }

    async fn create(pool: &DbPool, input: &CreateDepartment) -> StoreResult<Department> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "INSERT INTO departments (department_id, department_name, building_id) \
             SELECT ?1, ?2, ?3 \
             WHERE EXISTS (SELECT 1 FROM buildings WHERE building_id = ?3)",
        )
        .bind(input.department_id)
        .bind(input.department_name.trim())
        .bind(input.building_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Err(CoreError::missing_reference("Building", input.building_id).into());
        }

        let department = fetch_department(&mut tx, input.department_id)
            .await?
            .ok_or_else(|| CoreError::Internal("inserted department vanished".into()))?;
        tx.commit().await?;
        tracing::info!(department_id = department.department_id, "Department created");
        Ok(department)
    }

    async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateDepartment,
    ) -> StoreResult<Option<Department>> {
        let mut tx = pool.begin().await?;
        let result = sqlx::query(
            "UPDATE departments SET \
                 department_name = COALESCE(?2, department_name), \
                 building_id = COALESCE(?3, building_id) \
             WHERE department_id = ?1 \
               AND (?3 IS NULL OR EXISTS (SELECT 1 FROM buildings WHERE building_id = ?3))",
        )
        .bind(id)
        .bind(input.department_name.as_deref().map(str::trim))
        .bind(input.building_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            let known = row_exists(&mut tx, "departments", "department_id", id).await?;
            tx.rollback().await?;
            return match (known, input.building_id) {
                (true, Some(building_id)) => {
                    Err(CoreError::missing_reference("Building", building_id).into())
                }
                _ => Ok(None),
            };
        }

        let department = fetch_department(&mut tx, id).await?;
        tx.commit().await?;
        Ok(department)
    }

    async fn delete(pool: &DbPool, id: DbId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM departments WHERE department_id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
