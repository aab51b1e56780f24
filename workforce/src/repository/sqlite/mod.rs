use crate::error::WorkforceError;
use crate::repository::SharedSqliteConnection;

pub(crate) mod sqlite_assignment_repo;
pub(crate) mod sqlite_department_repo;
pub(crate) mod sqlite_employee_repo;
pub(crate) mod sqlite_project_repo;

/// Creates the entire database schema by running schema creation functions for all entities.
#[allow(clippy::module_name_repetitions)]
pub(crate) fn create_schema(connection: &SharedSqliteConnection) -> Result<(), WorkforceError> {
    sqlite_department_repo::create_department_table(connection)?;
    sqlite_employee_repo::create_employee_table(connection)?;
    sqlite_project_repo::create_project_table(connection)?;
    sqlite_assignment_repo::create_assignment_table(connection)?;
    Ok(())
}

/// Tells whether `err` is the UNIQUE constraint violation for the given
/// column, e.g. "departments.name". Extended result code 2067 is
/// `SQLITE_CONSTRAINT_UNIQUE`.
pub(crate) fn is_unique_violation(err: &rusqlite::Error, column: &str) -> bool {
    if let rusqlite::Error::SqliteFailure(code, Some(message)) = err {
        return code.extended_code == 2067 && message.contains(column);
    }
    false
}
