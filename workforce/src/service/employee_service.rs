//! This module provides the implementation of `EmployeeService`. Besides the
//! usual CRUD plumbing it enforces the referential rule that every employee
//! belongs to an existing department.

use crate::error::WorkforceError;
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::types::Employee;
use crate::validate;
use std::sync::Arc;

pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
    department_repo: Arc<dyn DepartmentRepository>,
}

impl EmployeeService {
    pub(crate) fn new(
        repo: Arc<dyn EmployeeRepository>,
        department_repo: Arc<dyn DepartmentRepository>,
    ) -> Self {
        Self {
            repo,
            department_repo,
        }
    }

    /// Validates all fields and stores a new employee.
    ///
    /// `salary` and `department_id` arrive as raw text from the caller.
    /// Validation runs in field order (names, email, salary, department)
    /// and the first failure wins. The email is lowercased before storage.
    ///
    /// # Errors
    ///
    /// * `WorkforceError::Validation` when a field fails its check.
    /// * `WorkforceError::UnknownDepartment` when `department_id` does not
    ///   reference an existing department.
    /// * `WorkforceError::DuplicateEmail` when the address is already taken.
    pub fn create(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        salary: &str,
        department_id: &str,
    ) -> Result<Employee, WorkforceError> {
        let first_name = validate::non_empty(first_name, "First Name")?;
        let last_name = validate::non_empty(last_name, "Last Name")?;
        let email = validate::email(email)?;
        let salary = validate::positive_amount(salary, "Salary")?;
        let department_id = self.resolve_department(department_id)?;

        self.repo
            .insert(&first_name, &last_name, &email, salary, department_id)
    }

    /// Returns every employee, ordered by identifier.
    pub fn get_all(&self) -> Result<Vec<Employee>, WorkforceError> {
        self.repo.find_all()
    }

    /// Looks an employee up by identifier given as untrusted text.
    /// Input that does not parse as an integer behaves exactly like an
    /// unknown id and yields `Ok(None)`.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Employee>, WorkforceError> {
        match id.trim().parse::<i64>() {
            Ok(id) => self.repo.find_by_id(id),
            Err(_) => Ok(None),
        }
    }

    /// Finds the first employee matching a free-form name query, see
    /// `EmployeeRepository::find_by_name` for the matching rules.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Employee>, WorkforceError> {
        self.repo.find_by_name(name)
    }

    /// Re-validates and overwrites every field of an existing employee.
    /// The same rules apply as for `create`.
    pub fn update(
        &self,
        id: i64,
        first_name: &str,
        last_name: &str,
        email: &str,
        salary: &str,
        department_id: &str,
    ) -> Result<Employee, WorkforceError> {
        let first_name = validate::non_empty(first_name, "First Name")?;
        let last_name = validate::non_empty(last_name, "Last Name")?;
        let email = validate::email(email)?;
        let salary = validate::positive_amount(salary, "Salary")?;
        let department_id = self.resolve_department(department_id)?;

        let employee = Employee {
            id,
            first_name,
            last_name,
            email,
            salary,
            department_id,
        };
        self.repo.update(&employee)?;
        Ok(employee)
    }

    /// Deletes the employee and their project assignments.
    pub fn delete(&self, id: i64) -> Result<(), WorkforceError> {
        self.repo.delete(id)
    }

    /// Resolves untrusted department id text to a verified identifier.
    /// Non-numeric text and ids without a matching row are both reported
    /// as `UnknownDepartment`.
    fn resolve_department(&self, department_id: &str) -> Result<i64, WorkforceError> {
        let department = match department_id.trim().parse::<i64>() {
            Ok(id) => self.department_repo.find_by_id(id)?,
            Err(_) => None,
        };

        department
            .map(|department| department.id)
            .ok_or(WorkforceError::UnknownDepartment)
    }
}
