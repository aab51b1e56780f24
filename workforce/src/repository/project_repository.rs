use crate::error::WorkforceError;
use crate::types::Project;

/// A trait for managing project records in a storage repository.
pub trait ProjectRepository: Send + Sync {
    /// Adds a project and returns it with its freshly assigned identifier.
    ///
    /// # Errors
    /// * `WorkforceError::DuplicateProjectName` when another project already
    ///   carries the same name.
    fn insert(&self, name: &str, budget: f64) -> Result<Project, WorkforceError>;

    /// Retrieves every project, ordered by identifier.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_all(&self) -> Result<Vec<Project>, WorkforceError>;

    /// Looks a project up by identifier, `Ok(None)` when absent.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_by_id(&self, id: i64) -> Result<Option<Project>, WorkforceError>;

    /// Looks a project up by exact name, `Ok(None)` when absent.
    ///
    /// # Errors
    /// * Returns a `WorkforceError` if the operation fails.
    fn find_by_name(&self, name: &str) -> Result<Option<Project>, WorkforceError>;

    /// Overwrites every stored field of the project identified by
    /// `project.id`.
    ///
    /// # Errors
    /// * `WorkforceError::ProjectNotFound` when no row carries that id.
    /// * `WorkforceError::DuplicateProjectName` when the new name collides
    ///   with a different project.
    fn update(&self, project: &Project) -> Result<(), WorkforceError>;

    /// Deletes the project together with its assignment rows, within a
    /// single transaction. The employees themselves are left untouched.
    ///
    /// # Errors
    /// * `WorkforceError::ProjectNotFound` when no row carries that id.
    fn delete(&self, id: i64) -> Result<(), WorkforceError>;
}
