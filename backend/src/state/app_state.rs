// Application state
// Holds the service handles shared by all request handlers

use crate::db::Database;
use crate::repository::{EmployeeRepository, SqliteEmployeeRepository};
use crate::services::EmployeeService;
use std::sync::Arc;

/// State shared by all request handlers
///
/// The store is injected through the repository, so every instance (and
/// every test) works against its own store.
#[derive(Clone)]
pub struct AppState {
    /// Employee business operations
    pub employees: Arc<EmployeeService>,
}

impl AppState {
    /// Build state over any employee repository
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            employees: Arc::new(EmployeeService::new(repository)),
        }
    }

    /// Build state backed by an open SQLite database
    pub fn from_database(db: &Database) -> Self {
        Self::new(Arc::new(SqliteEmployeeRepository::new(db.pool().clone())))
    }
}
