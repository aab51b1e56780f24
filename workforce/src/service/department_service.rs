//! This module provides the implementation of `DepartmentService`, the entry
//! point for everything concerning departments: creation, lookup, update,
//! deletion and the list of employees attached to a department.

use crate::error::WorkforceError;
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::types::{Department, Employee};
use crate::validate;
use std::sync::Arc;

pub struct DepartmentService {
    repo: Arc<dyn DepartmentRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
}

impl DepartmentService {
    /// Creates a new instance of `DepartmentService`.
    ///
    /// # Arguments
    ///
    /// * `repo` - Repository holding the department records.
    /// * `employee_repo` - Repository holding the employee records, used to
    ///   list the employees of a department.
    pub(crate) fn new(
        repo: Arc<dyn DepartmentRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
    ) -> Self {
        Self {
            repo,
            employee_repo,
        }
    }

    /// Validates and stores a new department.
    ///
    /// Both fields are trimmed before storage. Validation runs in field
    /// order and the first failure wins.
    ///
    /// # Returns
    ///
    /// The stored department carrying its freshly assigned identifier.
    pub fn create(&self, name: &str, location: &str) -> Result<Department, WorkforceError> {
        let name = validate::non_empty(name, "Department name")?;
        let location = validate::non_empty(location, "Department location")?;

        self.repo.insert(&name, &location)
    }

    /// Returns every department, ordered by identifier.
    pub fn get_all(&self) -> Result<Vec<Department>, WorkforceError> {
        self.repo.find_all()
    }

    /// Looks a department up by identifier given as untrusted text.
    /// Input that does not parse as an integer behaves exactly like an
    /// unknown id and yields `Ok(None)`.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Department>, WorkforceError> {
        match id.trim().parse::<i64>() {
            Ok(id) => self.repo.find_by_id(id),
            Err(_) => Ok(None),
        }
    }

    /// Looks a department up by exact name match.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Department>, WorkforceError> {
        self.repo.find_by_name(name)
    }

    /// Re-validates and overwrites both fields of an existing department.
    pub fn update(
        &self,
        id: i64,
        name: &str,
        location: &str,
    ) -> Result<Department, WorkforceError> {
        let name = validate::non_empty(name, "Department name")?;
        let location = validate::non_empty(location, "Department location")?;

        let department = Department { id, name, location };
        self.repo.update(&department)?;
        Ok(department)
    }

    /// Deletes the department, its employees and their project assignments.
    pub fn delete(&self, id: i64) -> Result<(), WorkforceError> {
        self.repo.delete(id)
    }

    /// Returns the employees currently belonging to the department.
    pub fn employees(&self, department_id: i64) -> Result<Vec<Employee>, WorkforceError> {
        self.employee_repo.find_by_department(department_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_mocks::{MockDepartmentRepo, MockEmployeeRepo};
    use mockall::predicate::eq;

    fn service(repo: MockDepartmentRepo) -> DepartmentService {
        DepartmentService::new(Arc::new(repo), Arc::new(MockEmployeeRepo::new()))
    }

    #[test]
    fn test_create_trims_fields_before_storing() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_insert()
            .with(eq("Engineering"), eq("Building A"))
            .times(1)
            .returning(|name, location| {
                Ok(Department {
                    id: 1,
                    name: name.to_string(),
                    location: location.to_string(),
                })
            });

        let department = service(repo)
            .create("  Engineering  ", " Building A ")
            .unwrap();

        assert_eq!(department.name, "Engineering");
        assert_eq!(department.location, "Building A");
    }

    #[test]
    fn test_create_rejects_blank_name_without_touching_the_store() {
        // No expectations on the mock: any call would fail the test
        let repo = MockDepartmentRepo::new();

        let err = service(repo).create("   ", "Building A").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Department name must be a non-empty string"
        );
    }

    #[test]
    fn test_find_by_id_with_non_numeric_text() {
        let repo = MockDepartmentRepo::new();

        let found = service(repo).find_by_id("abc").unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn test_find_by_id_trims_the_input() {
        let mut repo = MockDepartmentRepo::new();
        repo.expect_find_by_id()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(None));

        let found = service(repo).find_by_id(" 7 ").unwrap();

        assert!(found.is_none());
    }

    #[test]
    fn test_update_revalidates_fields() {
        let repo = MockDepartmentRepo::new();

        let err = service(repo).update(1, "Engineering", "  ").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Department location must be a non-empty string"
        );
    }
}
