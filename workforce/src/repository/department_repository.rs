use crate::error::WorkforceError;
use crate::types::Department;

/// A trait for managing department records in a storage repository.
///
/// Implementations receive values that have already passed validation; the
/// repository is only responsible for persistence and for translating
/// storage-level constraint violations into domain errors.
pub trait DepartmentRepository: Send + Sync {
    ///
    /// Adds a department to the repository and returns it with its
    /// freshly assigned identifier.
    ///
    /// # Arguments
    /// * `name` - Validated department name, unique across the company.
    /// * `location` - Validated free-form location text.
    ///
    /// # Errors
    /// * `WorkforceError::DuplicateDepartmentName` when another department
    ///   already carries the same name.
    /// * `WorkforceError::Sql` for any other storage failure.
    fn insert(&self, name: &str, location: &str) -> Result<Department, WorkforceError>;

    ///
    /// Retrieves every department, ordered by identifier.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_all(&self) -> Result<Vec<Department>, WorkforceError>;

    /// Looks a department up by its identifier, `Ok(None)` when absent.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_by_id(&self, id: i64) -> Result<Option<Department>, WorkforceError>;

    /// Looks a department up by exact name, `Ok(None)` when absent.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_by_name(&self, name: &str) -> Result<Option<Department>, WorkforceError>;

    ///
    /// Overwrites every stored field of the department identified by
    /// `department.id`.
    ///
    /// # Errors
    /// * `WorkforceError::DepartmentNotFound` when no row carries that id.
    /// * `WorkforceError::DuplicateDepartmentName` when the new name collides
    ///   with a different department.
    fn update(&self, department: &Department) -> Result<(), WorkforceError>;

    ///
    /// Deletes the department together with its employees and their project
    /// assignments, all within a single transaction.
    ///
    /// # Errors
    /// * `WorkforceError::DepartmentNotFound` when no row carries that id.
    fn delete(&self, id: i64) -> Result<(), WorkforceError>;
}
