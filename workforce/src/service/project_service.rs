//! This module provides the implementation of `ProjectService`. Projects are
//! independent of departments; their only relation is the assignment table
//! linking them to employees.

use crate::error::WorkforceError;
use crate::repository::assignment_repository::AssignmentRepository;
use crate::repository::project_repository::ProjectRepository;
use crate::types::{Employee, Project};
use crate::validate;
use std::sync::Arc;

pub struct ProjectService {
    repo: Arc<dyn ProjectRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
}

impl ProjectService {
    pub(crate) fn new(
        repo: Arc<dyn ProjectRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
    ) -> Self {
        Self {
            repo,
            assignment_repo,
        }
    }

    /// Validates and stores a new project. `budget` arrives as raw text and
    /// must parse to a strictly positive number.
    pub fn create(&self, name: &str, budget: &str) -> Result<Project, WorkforceError> {
        let name = validate::non_empty(name, "Project name")?;
        let budget = validate::positive_amount(budget, "Budget")?;

        self.repo.insert(&name, budget)
    }

    /// Returns every project, ordered by identifier.
    pub fn get_all(&self) -> Result<Vec<Project>, WorkforceError> {
        self.repo.find_all()
    }

    /// Looks a project up by identifier given as untrusted text.
    /// Input that does not parse as an integer behaves exactly like an
    /// unknown id and yields `Ok(None)`.
    pub fn find_by_id(&self, id: &str) -> Result<Option<Project>, WorkforceError> {
        match id.trim().parse::<i64>() {
            Ok(id) => self.repo.find_by_id(id),
            Err(_) => Ok(None),
        }
    }

    /// Looks a project up by exact name match.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Project>, WorkforceError> {
        self.repo.find_by_name(name)
    }

    /// Re-validates and overwrites both fields of an existing project.
    pub fn update(&self, id: i64, name: &str, budget: &str) -> Result<Project, WorkforceError> {
        let name = validate::non_empty(name, "Project name")?;
        let budget = validate::positive_amount(budget, "Budget")?;

        let project = Project { id, name, budget };
        self.repo.update(&project)?;
        Ok(project)
    }

    /// Deletes the project and its assignment rows.
    pub fn delete(&self, id: i64) -> Result<(), WorkforceError> {
        self.repo.delete(id)
    }

    /// Returns the employees assigned to the project, ordered by identifier.
    pub fn employees(&self, project_id: i64) -> Result<Vec<Employee>, WorkforceError> {
        self.assignment_repo.employees_for_project(project_id)
    }
}
