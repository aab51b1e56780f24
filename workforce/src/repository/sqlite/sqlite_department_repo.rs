use crate::error::WorkforceError;
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::sqlite::is_unique_violation;
use crate::repository::SharedSqliteConnection;
use crate::types::Department;
use log::debug;
use rusqlite::params;

pub struct SqliteDepartmentRepository {
    connection: SharedSqliteConnection,
}

impl SqliteDepartmentRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

/// SQL statement to create the `departments` table.
const CREATE_DEPARTMENT_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS departments (
        id integer primary key not null,
        name varchar(255) not null unique,
        location varchar(255) not null
    );
";

/// Creates the `departments` table in the database.
pub fn create_department_table(connection: &SharedSqliteConnection) -> Result<(), WorkforceError> {
    let conn = connection.lock().map_err(|_| WorkforceError::LockPoisoned)?;
    conn.execute_batch(CREATE_DEPARTMENT_TABLE_SQL)?;
    Ok(())
}

impl DepartmentRepository for SqliteDepartmentRepository {
    fn insert(&self, name: &str, location: &str) -> Result<Department, WorkforceError> {
        debug!("Inserting department {name}");
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.query_row(
            r"INSERT INTO departments (name, location)
              VALUES (?1, ?2)
              RETURNING id",
            params![name, location],
            |row| row.get(0),
        );

        match result {
            Ok(id) => Ok(Department {
                id,
                name: name.to_string(),
                location: location.to_string(),
            }),
            Err(err) => {
                if is_unique_violation(&err, "departments.name") {
                    return Err(WorkforceError::DuplicateDepartmentName(name.to_string()));
                }
                Err(err.into())
            }
        }
    }

    fn find_all(&self) -> Result<Vec<Department>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let mut stmt = conn.prepare(
            r"SELECT id, name, location
              FROM departments
              ORDER BY id",
        )?;

        let department_iter = stmt.query_map([], |row| {
            Ok(Department {
                id: row.get(0)?,
                name: row.get(1)?,
                location: row.get(2)?,
            })
        })?;

        let mut departments = Vec::new();
        for department in department_iter {
            departments.push(department?);
        }

        Ok(departments)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Department>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.query_row(
            r"SELECT id, name, location
              FROM departments
              WHERE id = ?1",
            params![id],
            |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    location: row.get(2)?,
                })
            },
        );

        match result {
            Ok(department) => Ok(Some(department)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Department>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.query_row(
            r"SELECT id, name, location
              FROM departments
              WHERE name = ?1
              LIMIT 1",
            params![name],
            |row| {
                Ok(Department {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    location: row.get(2)?,
                })
            },
        );

        match result {
            Ok(department) => Ok(Some(department)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn update(&self, department: &Department) -> Result<(), WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.execute(
            r"UPDATE departments
              SET name = ?1, location = ?2
              WHERE id = ?3",
            params![department.name, department.location, department.id],
        );

        match result {
            Ok(0) => Err(WorkforceError::DepartmentNotFound(department.id)),
            Ok(_) => Ok(()),
            Err(err) => {
                if is_unique_violation(&err, "departments.name") {
                    return Err(WorkforceError::DuplicateDepartmentName(
                        department.name.clone(),
                    ));
                }
                Err(err.into())
            }
        }
    }

    /// Deletes the department and everything hanging off it in one
    /// transaction. Dependent rows go first: the assignments of every
    /// employee in the department, then the employees, then the department
    /// itself.
    fn delete(&self, id: i64) -> Result<(), WorkforceError> {
        let mut conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;
        let tx = conn.transaction()?;

        let employee_ids: Vec<i64> = {
            let mut stmt = tx.prepare("SELECT id FROM employees WHERE department_id = ?1")?;
            let rows = stmt.query_map(params![id], |row| row.get(0))?;
            rows.collect::<Result<Vec<i64>, _>>()?
        };

        for employee_id in &employee_ids {
            tx.execute(
                "DELETE FROM employee_project WHERE employee_id = ?1",
                params![employee_id],
            )?;
        }

        tx.execute(
            "DELETE FROM employees WHERE department_id = ?1",
            params![id],
        )?;

        let rows_affected = tx.execute("DELETE FROM departments WHERE id = ?1", params![id])?;
        if rows_affected == 0 {
            // The transaction is dropped here, rolling the deletes back
            return Err(WorkforceError::DepartmentNotFound(id));
        }

        tx.commit()?;
        debug!(
            "Deleted department {id} along with {} employees",
            employee_ids.len()
        );

        Ok(())
    }
}
