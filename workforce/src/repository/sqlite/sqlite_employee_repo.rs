use crate::error::WorkforceError;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::sqlite::is_unique_violation;
use crate::repository::SharedSqliteConnection;
use crate::types::Employee;
use log::debug;
use rusqlite::params;

pub struct SqliteEmployeeRepository {
    connection: SharedSqliteConnection,
}

impl SqliteEmployeeRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

/// SQL statement to create the `employees` table.
const CREATE_EMPLOYEE_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS employees (
        id integer primary key not null,
        first_name varchar(255) not null,
        last_name varchar(255) not null,
        email varchar(320) not null unique,
        salary double not null check (salary > 0),
        department_id integer not null,
        FOREIGN KEY (department_id) REFERENCES departments(id)
    );
";

/// Creates the `employees` table in the database.
pub fn create_employee_table(connection: &SharedSqliteConnection) -> Result<(), WorkforceError> {
    let conn = connection.lock().map_err(|_| WorkforceError::LockPoisoned)?;
    conn.execute_batch(CREATE_EMPLOYEE_TABLE_SQL)?;
    Ok(())
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn insert(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        salary: f64,
        department_id: i64,
    ) -> Result<Employee, WorkforceError> {
        debug!("Inserting employee {first_name} {last_name}");
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.query_row(
            r"INSERT INTO employees (first_name, last_name, email, salary, department_id)
              VALUES (?1, ?2, ?3, ?4, ?5)
              RETURNING id",
            params![first_name, last_name, email, salary, department_id],
            |row| row.get(0),
        );

        match result {
            Ok(id) => Ok(Employee {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                email: email.to_string(),
                salary,
                department_id,
            }),
            Err(err) => {
                if is_unique_violation(&err, "employees.email") {
                    return Err(WorkforceError::DuplicateEmail(email.to_string()));
                }
                Err(err.into())
            }
        }
    }

    fn find_all(&self) -> Result<Vec<Employee>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let mut stmt = conn.prepare(
            r"SELECT id, first_name, last_name, email, salary, department_id
              FROM employees
              ORDER BY id",
        )?;

        let employee_iter = stmt.query_map([], |row| {
            Ok(Employee {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                salary: row.get(4)?,
                department_id: row.get(5)?,
            })
        })?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }

        Ok(employees)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Employee>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.query_row(
            r"SELECT id, first_name, last_name, email, salary, department_id
              FROM employees
              WHERE id = ?1",
            params![id],
            |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    first_name: row.get(1)?,
                    last_name: row.get(2)?,
                    email: row.get(3)?,
                    salary: row.get(4)?,
                    department_id: row.get(5)?,
                })
            },
        );

        match result {
            Ok(employee) => Ok(Some(employee)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// A query containing a space is split once: everything before the first
    /// space must match the first name, the remainder must match the last
    /// name, extra spaces included. A single-word query matches either name
    /// column. Comparisons are case-sensitive.
    fn find_by_name(&self, name: &str) -> Result<Option<Employee>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;
        let name = name.trim();

        let result = match name.split_once(' ') {
            Some((first_name, last_name)) => conn.query_row(
                r"SELECT id, first_name, last_name, email, salary, department_id
                  FROM employees
                  WHERE first_name = ?1 AND last_name = ?2
                  LIMIT 1",
                params![first_name, last_name],
                |row| {
                    Ok(Employee {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        email: row.get(3)?,
                        salary: row.get(4)?,
                        department_id: row.get(5)?,
                    })
                },
            ),
            None => conn.query_row(
                r"SELECT id, first_name, last_name, email, salary, department_id
                  FROM employees
                  WHERE first_name = ?1 OR last_name = ?1
                  LIMIT 1",
                params![name],
                |row| {
                    Ok(Employee {
                        id: row.get(0)?,
                        first_name: row.get(1)?,
                        last_name: row.get(2)?,
                        email: row.get(3)?,
                        salary: row.get(4)?,
                        department_id: row.get(5)?,
                    })
                },
            ),
        };

        match result {
            Ok(employee) => Ok(Some(employee)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_department(&self, department_id: i64) -> Result<Vec<Employee>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let mut stmt = conn.prepare(
            r"SELECT id, first_name, last_name, email, salary, department_id
              FROM employees
              WHERE department_id = ?1
              ORDER BY id",
        )?;

        let employee_iter = stmt.query_map(params![department_id], |row| {
            Ok(Employee {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                email: row.get(3)?,
                salary: row.get(4)?,
                department_id: row.get(5)?,
            })
        })?;

        let mut employees = Vec::new();
        for employee in employee_iter {
            employees.push(employee?);
        }

        Ok(employees)
    }

    fn update(&self, employee: &Employee) -> Result<(), WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.execute(
            r"UPDATE employees
              SET first_name = ?1, last_name = ?2, email = ?3, salary = ?4, department_id = ?5
              WHERE id = ?6",
            params![
                employee.first_name,
                employee.last_name,
                employee.email,
                employee.salary,
                employee.department_id,
                employee.id,
            ],
        );

        match result {
            Ok(0) => Err(WorkforceError::EmployeeNotFound(employee.id)),
            Ok(_) => Ok(()),
            Err(err) => {
                if is_unique_violation(&err, "employees.email") {
                    return Err(WorkforceError::DuplicateEmail(employee.email.clone()));
                }
                Err(err.into())
            }
        }
    }

    /// Deletes the employee and their assignment rows in one transaction.
    fn delete(&self, id: i64) -> Result<(), WorkforceError> {
        let mut conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM employee_project WHERE employee_id = ?1",
            params![id],
        )?;

        let rows_affected = tx.execute("DELETE FROM employees WHERE id = ?1", params![id])?;
        if rows_affected == 0 {
            return Err(WorkforceError::EmployeeNotFound(id));
        }

        tx.commit()?;
        debug!("Deleted employee {id}");

        Ok(())
    }
}
