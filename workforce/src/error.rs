use std::path::PathBuf;
use thiserror::Error;

/// Every failure the workforce services can produce. The first group covers
/// domain rules (validation, uniqueness, references, assignment state), the
/// second group covers configuration and DBMS plumbing.
#[derive(Debug, Error)]
pub enum WorkforceError {
    #[error("{0}")]
    Validation(String),

    #[error("department name '{0}' already exists")]
    DuplicateDepartmentName(String),

    #[error("email '{0}' already exists")]
    DuplicateEmail(String),

    #[error("project name '{0}' already exists")]
    DuplicateProjectName(String),

    #[error("department_id must reference an existing department")]
    UnknownDepartment,

    #[error("Department {0} not found")]
    DepartmentNotFound(i64),

    #[error("Employee {0} not found")]
    EmployeeNotFound(i64),

    #[error("Project {0} not found")]
    ProjectNotFound(i64),

    #[error("Employee already assigned to this project")]
    AlreadyAssigned { employee_id: i64, project_id: i64 },

    #[error("Employee is not assigned to this project")]
    NotAssigned { employee_id: i64, project_id: i64 },

    #[error("Unable to load the application configuration file {path:?}")]
    ApplicationConfig { path: PathBuf, source: std::io::Error },

    #[error("Unable to parse contents of {}", path.display())]
    TomlParse { path: PathBuf, source: toml::de::Error },

    #[error("Unable to open DBMS in file {path}: {reason}")]
    OpenDbms { path: String, reason: String },

    #[error("SQL dbms error: {0}")]
    Sql(String),

    #[error("Mutex locking error")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for WorkforceError {
    fn from(err: rusqlite::Error) -> Self {
        WorkforceError::Sql(format!("Sqlite error {err}"))
    }
}
