//! This module provides the implementation of `AssignmentService`, which
//! guards the employee/project association: both sides must exist before a
//! pair is recorded or removed.

use crate::error::WorkforceError;
use crate::repository::assignment_repository::AssignmentRepository;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::project_repository::ProjectRepository;
use std::sync::Arc;

pub struct AssignmentService {
    repo: Arc<dyn AssignmentRepository>,
    employee_repo: Arc<dyn EmployeeRepository>,
    project_repo: Arc<dyn ProjectRepository>,
}

impl AssignmentService {
    pub(crate) fn new(
        repo: Arc<dyn AssignmentRepository>,
        employee_repo: Arc<dyn EmployeeRepository>,
        project_repo: Arc<dyn ProjectRepository>,
    ) -> Self {
        Self {
            repo,
            employee_repo,
            project_repo,
        }
    }

    /// Records that the employee works on the project.
    ///
    /// # Errors
    ///
    /// * `WorkforceError::EmployeeNotFound` / `ProjectNotFound` when either
    ///   side of the pair does not exist.
    /// * `WorkforceError::AlreadyAssigned` when the pair is already present.
    pub fn assign(&self, employee_id: i64, project_id: i64) -> Result<(), WorkforceError> {
        self.require_employee(employee_id)?;
        self.require_project(project_id)?;

        self.repo.assign(employee_id, project_id)
    }

    /// Removes the employee from the project.
    ///
    /// # Errors
    ///
    /// * `WorkforceError::EmployeeNotFound` / `ProjectNotFound` when either
    ///   side of the pair does not exist.
    /// * `WorkforceError::NotAssigned` when the pair is not present.
    pub fn unassign(&self, employee_id: i64, project_id: i64) -> Result<(), WorkforceError> {
        self.require_employee(employee_id)?;
        self.require_project(project_id)?;

        self.repo.unassign(employee_id, project_id)
    }

    fn require_employee(&self, employee_id: i64) -> Result<(), WorkforceError> {
        if self.employee_repo.find_by_id(employee_id)?.is_none() {
            return Err(WorkforceError::EmployeeNotFound(employee_id));
        }
        Ok(())
    }

    fn require_project(&self, project_id: i64) -> Result<(), WorkforceError> {
        if self.project_repo.find_by_id(project_id)?.is_none() {
            return Err(WorkforceError::ProjectNotFound(project_id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_mocks::{MockAssignmentRepo, MockEmployeeRepo, MockProjectRepo};
    use crate::types::{Employee, Project};
    use mockall::predicate::eq;

    fn known_employee(id: i64) -> MockEmployeeRepo {
        let mut employees = MockEmployeeRepo::new();
        employees.expect_find_by_id().returning(move |queried| {
            if queried == id {
                Ok(Some(Employee {
                    id,
                    first_name: "Ada".to_string(),
                    last_name: "Lovelace".to_string(),
                    email: "ada@engines.org".to_string(),
                    salary: 5000.0,
                    department_id: 1,
                }))
            } else {
                Ok(None)
            }
        });
        employees
    }

    fn known_project(id: i64) -> MockProjectRepo {
        let mut projects = MockProjectRepo::new();
        projects.expect_find_by_id().returning(move |queried| {
            if queried == id {
                Ok(Some(Project {
                    id,
                    name: "Apollo".to_string(),
                    budget: 10000.0,
                }))
            } else {
                Ok(None)
            }
        });
        projects
    }

    #[test]
    fn test_assign_verifies_both_sides_first() {
        let mut repo = MockAssignmentRepo::new();
        repo.expect_assign()
            .with(eq(3), eq(2))
            .times(1)
            .returning(|_, _| Ok(()));
        let service = AssignmentService::new(
            Arc::new(repo),
            Arc::new(known_employee(3)),
            Arc::new(known_project(2)),
        );

        assert!(service.assign(3, 2).is_ok());
    }

    #[test]
    fn test_assign_with_unknown_employee() {
        // The assignment repository must not be touched
        let service = AssignmentService::new(
            Arc::new(MockAssignmentRepo::new()),
            Arc::new(known_employee(3)),
            Arc::new(known_project(2)),
        );

        let err = service.assign(99, 2).unwrap_err();

        assert!(matches!(err, WorkforceError::EmployeeNotFound(99)));
    }

    #[test]
    fn test_assign_with_unknown_project() {
        let service = AssignmentService::new(
            Arc::new(MockAssignmentRepo::new()),
            Arc::new(known_employee(3)),
            Arc::new(known_project(2)),
        );

        let err = service.assign(3, 99).unwrap_err();

        assert!(matches!(err, WorkforceError::ProjectNotFound(99)));
    }

    #[test]
    fn test_unassign_without_assignment() {
        let mut repo = MockAssignmentRepo::new();
        repo.expect_unassign().times(1).returning(|employee_id, project_id| {
            Err(WorkforceError::NotAssigned {
                employee_id,
                project_id,
            })
        });
        let service = AssignmentService::new(
            Arc::new(repo),
            Arc::new(known_employee(3)),
            Arc::new(known_project(2)),
        );

        let err = service.unassign(3, 2).unwrap_err();

        assert!(matches!(err, WorkforceError::NotAssigned { .. }));
    }
}
