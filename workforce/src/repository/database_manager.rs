use crate::error::WorkforceError;
use crate::repository::sqlite;
use crate::repository::sqlite::sqlite_assignment_repo::SqliteAssignmentRepository;
use crate::repository::sqlite::sqlite_department_repo::SqliteDepartmentRepository;
use crate::repository::sqlite::sqlite_employee_repo::SqliteEmployeeRepository;
use crate::repository::sqlite::sqlite_project_repo::SqliteProjectRepository;
use crate::repository::SharedSqliteConnection;
use log::debug;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Represents parameters for initializing the database connection
pub enum DatabaseConfig {
    /// SQLite database with a specific file path
    SqliteOnDisk { path: PathBuf },

    /// SQLite database that runs entirely in memory
    SqliteInMemory,
}

pub struct DatabaseManager {
    connection: SharedSqliteConnection,
}

impl DatabaseManager {
    /// Creates a new `DatabaseManager` based on the provided configuration.
    ///
    /// Opens the database file, creating it and any missing parent
    /// directories on first use, switches foreign key enforcement on and
    /// brings the schema up to date.
    pub fn new(config: &DatabaseConfig) -> Result<Self, WorkforceError> {
        let connection = match config {
            // SQLite (on-disk)
            DatabaseConfig::SqliteOnDisk { path } => {
                if let Some(parent) = path.parent() {
                    if !parent.exists() {
                        fs::create_dir_all(parent)?;
                    }
                }
                debug!("Opening database in {}", path.display());
                Connection::open(path).map_err(|err| WorkforceError::OpenDbms {
                    path: path.to_string_lossy().to_string(),
                    reason: err.to_string(),
                })?
            }

            // SQLite (in-memory)
            DatabaseConfig::SqliteInMemory => Connection::open_in_memory()?,
        };

        // Referential integrity checks are off by default in SQLite
        connection.execute_batch("PRAGMA foreign_keys = ON;")?;

        let connection = Arc::new(Mutex::new(connection));

        sqlite::create_schema(&connection)?;

        Ok(Self { connection })
    }

    /// Provide access to the shared database connection.
    pub(crate) fn get_connection(&self) -> SharedSqliteConnection {
        self.connection.clone()
    }

    pub(crate) fn create_department_repository(&self) -> Arc<SqliteDepartmentRepository> {
        Arc::new(SqliteDepartmentRepository::new(self.get_connection()))
    }

    pub(crate) fn create_employee_repository(&self) -> Arc<SqliteEmployeeRepository> {
        Arc::new(SqliteEmployeeRepository::new(self.get_connection()))
    }

    pub(crate) fn create_project_repository(&self) -> Arc<SqliteProjectRepository> {
        Arc::new(SqliteProjectRepository::new(self.get_connection()))
    }

    pub(crate) fn create_assignment_repository(&self) -> Arc<SqliteAssignmentRepository> {
        Arc::new(SqliteAssignmentRepository::new(self.get_connection()))
    }
}
