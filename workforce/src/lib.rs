//! Local employee management: departments, employees, projects and the
//! assignments linking them, all stored in a single `SQLite` file.

use config::AppConfiguration;
use error::WorkforceError;
use service::{AssignmentService, DepartmentService, EmployeeService, ProjectService};
use std::path::PathBuf;

pub mod config;
pub mod error;
mod repository;
pub mod service;
pub mod types;
mod validate;

pub use repository::database_manager::DatabaseConfig;
use repository::database_manager::DatabaseManager;

pub struct WorkforceRuntime {
    #[allow(dead_code)]
    config: AppConfiguration,
    department_service: DepartmentService,
    employee_service: EmployeeService,
    project_service: ProjectService,
    assignment_service: AssignmentService,
}

impl WorkforceRuntime {
    /// Creates a new instance of `WorkforceRuntime` from the configuration
    /// on disk.
    ///
    /// The database named by the configuration is opened, created on first
    /// use. A missing configuration file is not an error, the defaults place
    /// the database in the platform data directory.
    ///
    /// # Errors
    ///
    /// - Returns an error if the configuration file exists but cannot be parsed.
    /// - Returns an error if the database cannot be opened or the schema cannot be created.
    pub fn new() -> Result<Self, WorkforceError> {
        let config = config::load()?;
        let path = PathBuf::from(&config.application_data.database);

        Self::assemble(config, &DatabaseConfig::SqliteOnDisk { path })
    }

    /// Creates a runtime against an explicit database target, bypassing the
    /// configuration file. In-memory databases are handy in tests, on-disk
    /// paths serve command line overrides.
    ///
    /// # Errors
    ///
    /// - Returns an error if the database cannot be opened or the schema cannot be created.
    pub fn with_database(database: &DatabaseConfig) -> Result<Self, WorkforceError> {
        Self::assemble(AppConfiguration::default(), database)
    }

    fn assemble(
        config: AppConfiguration,
        database: &DatabaseConfig,
    ) -> Result<Self, WorkforceError> {
        let database_manager = DatabaseManager::new(database)?;

        let department_repo = database_manager.create_department_repository();
        let employee_repo = database_manager.create_employee_repository();
        let project_repo = database_manager.create_project_repository();
        let assignment_repo = database_manager.create_assignment_repository();

        Ok(WorkforceRuntime {
            config,
            department_service: DepartmentService::new(
                department_repo.clone(),
                employee_repo.clone(),
            ),
            employee_service: EmployeeService::new(employee_repo.clone(), department_repo),
            project_service: ProjectService::new(project_repo.clone(), assignment_repo.clone()),
            assignment_service: AssignmentService::new(assignment_repo, employee_repo, project_repo),
        })
    }

    pub fn department_service(&self) -> &DepartmentService {
        &self.department_service
    }

    pub fn employee_service(&self) -> &EmployeeService {
        &self.employee_service
    }

    pub fn project_service(&self) -> &ProjectService {
        &self.project_service
    }

    pub fn assignment_service(&self) -> &AssignmentService {
        &self.assignment_service
    }
}
