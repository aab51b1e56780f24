use crate::error::WorkforceError;
use crate::types::Employee;

/// A trait for managing employee records in a storage repository.
pub trait EmployeeRepository: Send + Sync {
    ///
    /// Adds an employee to the repository and returns it with its freshly
    /// assigned identifier. All fields are expected to be validated already,
    /// in particular `email` must be lowercased and `department_id` must
    /// reference an existing department.
    ///
    /// # Errors
    /// * `WorkforceError::DuplicateEmail` when another employee already uses
    ///   the same email address.
    /// * `WorkforceError::Sql` for any other storage failure.
    fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        salary: f64,
        department_id: i64,
    ) -> Result<Employee, WorkforceError>;

    /// Retrieves every employee, ordered by identifier.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_all(&self) -> Result<Vec<Employee>, WorkforceError>;

    /// Looks an employee up by identifier, `Ok(None)` when absent.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_by_id(&self, id: i64) -> Result<Option<Employee>, WorkforceError>;

    ///
    /// Finds the first employee matching a free-form name query.
    ///
    /// A query containing a space is split once into first and last name and
    /// both must match exactly. A single-word query matches either the first
    /// or the last name. At most one employee is returned even when several
    /// match.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_by_name(&self, name: &str) -> Result<Option<Employee>, WorkforceError>;

    /// Retrieves every employee belonging to the given department,
    /// ordered by identifier.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_by_department(&self, department_id: i64) -> Result<Vec<Employee>, WorkforceError>;

    ///
    /// Overwrites every stored field of the employee identified by
    /// `employee.id`.
    ///
    /// # Errors
    /// * `WorkforceError::EmployeeNotFound` when no row carries that id.
    /// * `WorkforceError::DuplicateEmail` when the new address collides with
    ///   a different employee.
    fn update(&self, employee: &Employee) -> Result<(), WorkforceError>;

    ///
    /// Deletes the employee together with their project assignments, within
    /// a single transaction. The projects themselves are left untouched.
    ///
    /// # Errors
    /// * `WorkforceError::EmployeeNotFound` when no row carries that id.
    fn delete(&self, id: i64) -> Result<(), WorkforceError>;
}
