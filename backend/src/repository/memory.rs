//! In-memory implementation of EmployeeRepository for testing.
//!
//! Mirrors the store's unique email index and counts write calls so tests
//! can assert whether a write was attempted.

use super::EmployeeRepository;
use crate::db::DbError;
use crate::models::{Employee, EmployeeId};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
struct Store {
    rows: BTreeMap<EmployeeId, Employee>,
    next_id: EmployeeId,
}

/// Employee repository backed by a map, with write counters
#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    store: RwLock<Store>,
    save_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with employees.
    ///
    /// Employees without an id are assigned one in order.
    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let mut store = Store::default();
        for employee in employees {
            let id = employee.id.unwrap_or(store.next_id + 1);
            store.next_id = store.next_id.max(id);
            store.rows.insert(id, employee.with_id(id));
        }
        Self {
            store: RwLock::new(store),
            ..Self::default()
        }
    }

    /// Number of `save` calls made so far, including rejected ones.
    pub fn save_calls(&self) -> usize {
        self.save_calls.load(Ordering::SeqCst)
    }

    /// Number of `delete_by_id` calls made so far.
    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, employee: &Employee) -> Result<Employee, DbError> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        let mut store = self.store.write().await;

        let clash = store
            .rows
            .values()
            .any(|row| row.email == employee.email && row.id != employee.id);
        if clash {
            return Err(DbError::Constraint(format!(
                "UNIQUE constraint failed: empleados.email ({})",
                employee.email
            )));
        }

        let id = match employee.id {
            Some(id) => id,
            None => store.next_id + 1,
        };
        store.next_id = store.next_id.max(id);

        let saved = employee.clone().with_id(id);
        store.rows.insert(id, saved.clone());
        Ok(saved)
    }

    async fn find_all(&self) -> Result<Vec<Employee>, DbError> {
        let store = self.store.read().await;
        Ok(store.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DbError> {
        let store = self.store.read().await;
        Ok(store.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Employee>, DbError> {
        let store = self.store.read().await;
        Ok(store.rows.values().find(|row| row.email == email).cloned())
    }

    async fn delete_by_id(&self, id: EmployeeId) -> Result<(), DbError> {
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        self.store.write().await.rows.remove(&id);
        Ok(())
    }
}
