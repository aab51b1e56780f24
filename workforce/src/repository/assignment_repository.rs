use crate::error::WorkforceError;
use crate::types::Employee;

/// A trait for managing the many-to-many association between employees and
/// projects. Rows are identified by the `(employee_id, project_id)` pair,
/// there is no surrogate key and no payload.
pub trait AssignmentRepository: Send + Sync {
    /// Records that the employee works on the project.
    ///
    /// # Errors
    /// * `WorkforceError::AlreadyAssigned` when the pair is already present.
    fn assign(&self, employee_id: i64, project_id: i64) -> Result<(), WorkforceError>;

    /// Removes the employee from the project.
    ///
    /// # Errors
    /// * `WorkforceError::NotAssigned` when the pair is not present.
    fn unassign(&self, employee_id: i64, project_id: i64) -> Result<(), WorkforceError>;

    /// Retrieves every employee assigned to the given project, ordered by
    /// identifier. Unknown projects simply yield an empty list.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn employees_for_project(&self, project_id: i64) -> Result<Vec<Employee>, WorkforceError>;
}
