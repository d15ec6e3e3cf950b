//! Employee service
//!
//! Business rules over the employee repository. The only rule enforced here
//! is that an email may belong to one employee at most.

use crate::db::DbError;
use crate::error::AppError;
use crate::models::{Employee, EmployeeId};
use crate::repository::EmployeeRepository;
use std::sync::Arc;
use tracing::{info, warn};

/// Employee service
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a service over the given repository
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// Register a new employee
    ///
    /// # Returns
    /// * `Ok(Employee)` - The stored employee with its id
    /// * `Err(AppError::DuplicateEmail)` - The email is already registered
    pub async fn create(&self, employee: Employee) -> Result<Employee, AppError> {
        if self
            .repository
            .find_by_email(&employee.email)
            .await?
            .is_some()
        {
            warn!(email = %employee.email, "Rejected employee with duplicate email");
            return Err(AppError::DuplicateEmail(employee.email));
        }

        // The unique index still has the final word when two creates race
        let saved = self
            .repository
            .save(&employee)
            .await
            .map_err(|e| duplicate_or(e, &employee.email))?;

        info!(employee_id = ?saved.id, email = %saved.email, "Created employee");
        Ok(saved)
    }

    /// List all employees in insertion order
    pub async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.repository.find_all().await?)
    }

    /// Get an employee by id, `None` when absent
    pub async fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, AppError> {
        Ok(self.repository.find_by_id(id).await?)
    }

    /// Save changes to an employee
    ///
    /// No existence check is made: an employee whose id is unknown (or
    /// missing) is inserted. Callers that need update-only semantics must
    /// check with [`EmployeeService::get_by_id`] first.
    pub async fn update(&self, employee: Employee) -> Result<Employee, AppError> {
        let saved = self
            .repository
            .save(&employee)
            .await
            .map_err(|e| duplicate_or(e, &employee.email))?;

        info!(employee_id = ?saved.id, "Updated employee");
        Ok(saved)
    }

    /// Delete an employee by id; deleting a missing id succeeds
    pub async fn delete(&self, id: EmployeeId) -> Result<(), AppError> {
        self.repository.delete_by_id(id).await?;
        info!(employee_id = id, "Deleted employee");
        Ok(())
    }
}

fn duplicate_or(err: DbError, email: &str) -> AppError {
    if err.is_constraint() {
        warn!(email = %email, "Store rejected duplicate email");
        AppError::DuplicateEmail(email.to_string())
    } else {
        AppError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryEmployeeRepository;

    fn employee() -> Employee {
        Employee::new("christian", "Ramirez", "c1@gmail.com").with_id(2)
    }

    fn create_test_service(
        repo: InMemoryEmployeeRepository,
    ) -> (EmployeeService, Arc<InMemoryEmployeeRepository>) {
        let repo = Arc::new(repo);
        (EmployeeService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_create_employee() {
        let (service, repo) = create_test_service(InMemoryEmployeeRepository::new());

        let saved = service
            .create(Employee::new("christian", "Ramirez", "c1@gmail.com"))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.email, "c1@gmail.com");
        assert_eq!(repo.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_email_never_saves() {
        let (service, repo) =
            create_test_service(InMemoryEmployeeRepository::with_employees(vec![employee()]));

        let result = service
            .create(Employee::new("Otro", "Apellido", "c1@gmail.com"))
            .await;

        match result {
            Err(AppError::DuplicateEmail(email)) => assert_eq!(email, "c1@gmail.com"),
            other => panic!("Expected DuplicateEmail error, got: {:?}", other),
        }
        assert_eq!(repo.save_calls(), 0);
    }

    /// Lookup misses as if a concurrent create had not committed yet
    struct RacingRepository(InMemoryEmployeeRepository);

    #[async_trait::async_trait]
    impl EmployeeRepository for RacingRepository {
        async fn save(&self, employee: &Employee) -> Result<Employee, DbError> {
            self.0.save(employee).await
        }
        async fn find_all(&self) -> Result<Vec<Employee>, DbError> {
            self.0.find_all().await
        }
        async fn find_by_id(&self, id: EmployeeId) -> Result<Option<Employee>, DbError> {
            self.0.find_by_id(id).await
        }
        async fn find_by_email(&self, _email: &str) -> Result<Option<Employee>, DbError> {
            Ok(None)
        }
        async fn delete_by_id(&self, id: EmployeeId) -> Result<(), DbError> {
            self.0.delete_by_id(id).await
        }
    }

    #[tokio::test]
    async fn test_create_store_conflict_is_duplicate() {
        let repo = Arc::new(RacingRepository(
            InMemoryEmployeeRepository::with_employees(vec![employee()]),
        ));
        let service = EmployeeService::new(repo.clone());

        let result = service
            .create(Employee::new("Otro", "Apellido", "c1@gmail.com"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
        assert_eq!(repo.0.save_calls(), 1);
        assert_eq!(repo.0.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_employees() {
        let (service, _) = create_test_service(InMemoryEmployeeRepository::with_employees(vec![
            employee(),
            Employee::new("Julen", "Oliva", "j2@gmail.com").with_id(1),
        ]));

        let employees = service.list().await.unwrap();
        assert_eq!(employees.len(), 2);
    }

    #[tokio::test]
    async fn test_list_empty() {
        let (service, _) = create_test_service(InMemoryEmployeeRepository::new());
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let (service, _) =
            create_test_service(InMemoryEmployeeRepository::with_employees(vec![employee()]));

        assert_eq!(service.get_by_id(2).await.unwrap(), Some(employee()));
        assert_eq!(service.get_by_id(7).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_employee() {
        let (service, _) =
            create_test_service(InMemoryEmployeeRepository::with_employees(vec![employee()]));

        let mut changed = employee();
        changed.first_name = "Fernando".to_string();
        changed.last_name = "Fernandez".to_string();
        changed.email = "ff@gmail.com".to_string();

        let updated = service.update(changed).await.unwrap();
        assert_eq!(updated.id, Some(2));
        assert_eq!(updated.first_name, "Fernando");
        assert_eq!(updated.last_name, "Fernandez");
        assert_eq!(updated.email, "ff@gmail.com");
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_inserts() {
        let (service, _) = create_test_service(InMemoryEmployeeRepository::new());

        let saved = service
            .update(Employee::new("Pepe", "Castillo", "ckk2@gmail.com").with_id(99))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(99));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_to_taken_email_is_duplicate() {
        let (service, _) = create_test_service(InMemoryEmployeeRepository::with_employees(vec![
            employee(),
            Employee::new("Julen", "Oliva", "j2@gmail.com").with_id(1),
        ]));

        let mut changed = employee();
        changed.email = "j2@gmail.com".to_string();

        let result = service.update(changed).await;
        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
    }

    #[tokio::test]
    async fn test_delete_employee() {
        let (service, repo) =
            create_test_service(InMemoryEmployeeRepository::with_employees(vec![employee()]));

        service.delete(2).await.unwrap();
        assert_eq!(repo.delete_calls(), 1);
        assert_eq!(service.get_by_id(2).await.unwrap(), None);

        // Deleting again is not an error
        service.delete(2).await.unwrap();
        assert_eq!(repo.delete_calls(), 2);
    }
}
