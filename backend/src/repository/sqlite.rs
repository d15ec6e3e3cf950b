//! SQLite implementation of EmployeeRepository.

use super::EmployeeRepository;
use crate::db::DbError;
use crate::models::{Employee, EmployeeId};
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

/// SQLite-backed employee repository
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    /// Create a repository over an open pool
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn save(&self, employee: &Employee) -> Result<Employee, DbError> {
        let saved = match employee.id {
            None => {
                sqlx::query_as::<_, Employee>(
                    r#"
                    INSERT INTO empleados (nombre, apellido, email) VALUES (?, ?, ?)
                    RETURNING id, nombre, apellido, email
                    "#,
                )
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query_as::<_, Employee>(
                    r#"
                    INSERT INTO empleados (id, nombre, apellido, email) VALUES (?, ?, ?, ?)
                    ON CONFLICT(id) DO UPDATE SET
                        nombre = excluded.nombre,
                        apellido = excluded.apellido,
                        email = excluded.email
                    RETURNING id, nombre, apellido, email
                    "#,
                )
                .bind(id)
                .bind(&employee.first_name)
                .bind(&employee.last_name)
                .bind(&employee.email)
                .fetch_one(&self.pool)
                .await?
            }
        };

        debug!(employee_id = ?saved.id, "Saved employee row");
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DbError> {
        let employees = sqlx::query_as::<_, Employee>(
            "SELECT id, nombre, apellido, email FROM empleados ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(employees)
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DbError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, nombre, apellido, email FROM empleados WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT id, nombre, apellido, email FROM empleados WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM empleados WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        debug!(
            employee_id = id,
            rows_affected = result.rows_affected(),
            "Deleted employee row"
        );
        Ok(())
    }
}
