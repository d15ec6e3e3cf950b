//! Employee persistence
//!
//! `EmployeeRepository` is the boundary between the service layer and the
//! store. The SQLite implementation backs the running server; the in-memory
//! implementation is a test double that counts writes.

pub mod memory;
pub mod sqlite;

pub use memory::InMemoryEmployeeRepository;
pub use sqlite::SqliteEmployeeRepository;

use crate::db::DbError;
use crate::models::{Employee, EmployeeId};
use async_trait::async_trait;

/// Repository trait for employee persistence.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Inserts the employee, or overwrites the row with the same id.
    ///
    /// Returns the stored record with its id populated. A clash on the
    /// unique email index is reported as `DbError::Constraint`.
    async fn save(&self, employee: &Employee) -> Result<Employee, DbError>;

    /// Lists all employees in insertion order.
    async fn find_all(&self) -> Result<Vec<Employee>, DbError>;

    /// Gets an employee by id.
    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DbError>;

    /// Gets the employee registered with exactly this email.
    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError>;

    /// Deletes an employee by id. Deleting a missing id is a no-op.
    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), DbError>;
}
