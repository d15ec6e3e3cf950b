//! Employee data model
//!
//! The wire format and the `empleados` table both use the Spanish field
//! names (`nombre`, `apellido`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Store-assigned employee identifier
pub type EmployeeId = i64;

/// An employee record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Identifier assigned by the store (absent until first saved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    /// First name
    #[serde(rename = "nombre")]
    #[sqlx(rename = "nombre")]
    pub first_name: String,
    /// Last name
    #[serde(rename = "apellido")]
    #[sqlx(rename = "apellido")]
    pub last_name: String,
    /// Email address, unique across all employees
    pub email: String,
}

impl Employee {
    /// Create an unsaved employee
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    /// Return a copy of this employee carrying the given id
    pub fn with_id(mut self, id: EmployeeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Validate employee fields
    ///
    /// # Returns
    /// * `Ok(())` - All fields are usable
    /// * `Err(String)` - Description of the first invalid field
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("nombre cannot be empty".to_string());
        }
        if self.last_name.trim().is_empty() {
            return Err("apellido cannot be empty".to_string());
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err("email cannot be empty".to_string());
        }
        if !email.contains('@') {
            return Err(format!("email is not valid: {}", email));
        }
        Ok(())
    }
}
