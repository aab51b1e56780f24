use crate::error::WorkforceError;
use crate::repository::assignment_repository::AssignmentRepository;
use crate::repository::SharedSqliteConnection;
use crate::types::Employee;
use log::debug;
use rusqlite::params;

pub struct SqliteAssignmentRepository {
    connection: SharedSqliteConnection,
}

impl SqliteAssignmentRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

/// SQL statement to create the `employee_project` table.
const CREATE_ASSIGNMENT_TABLE_SQL: &str = r"
    -- Association between the tables employees and projects
    CREATE TABLE IF NOT EXISTS employee_project (
        employee_id integer not null,
        project_id integer not null,
        PRIMARY KEY (employee_id, project_id),
        FOREIGN KEY (employee_id) REFERENCES employees(id),
        FOREIGN KEY (project_id) REFERENCES projects(id)
    );
";

/// Creates the `employee_project` table in the database.
pub fn create_assignment_table(connection: &SharedSqliteConnection) -> Result<(), WorkforceError> {
    let conn = connection.lock().map_err(|_| WorkforceError::LockPoisoned)?;
    conn.execute_batch(CREATE_ASSIGNMENT_TABLE_SQL)?;
    Ok(())
}

impl AssignmentRepository for SqliteAssignmentRepository {
    fn assign(&self, employee_id: i64, project_id: i64) -> Result<(), WorkforceError> {
        debug!("Assigning employee {employee_id} to project {project_id}");
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let existing = conn.query_row(
            r"SELECT 1
              FROM employee_project
              WHERE employee_id = ?1 AND project_id = ?2",
            params![employee_id, project_id],
            |row| row.get::<_, i64>(0),
        );

        match existing {
            Ok(_) => {
                return Err(WorkforceError::AlreadyAssigned {
                    employee_id,
                    project_id,
                })
            }
            Err(rusqlite::Error::QueryReturnedNoRows) => {}
            Err(err) => return Err(err.into()),
        }

        conn.execute(
            "INSERT INTO employee_project (employee_id, project_id) VALUES (?1, ?2)",
            params![employee_id, project_id],
        )?;

        Ok(())
    }

    fn unassign(&self, employee_id: i64, project_id: i64) -> Result<(), WorkforceError> {
        debug!("Removing employee {employee_id} from project {project_id}");
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let rows_affected = conn.execute(
            "DELETE FROM employee_project WHERE employee_id = ?1 AND project_id = ?2",
            params![employee_id, project_id],
        )?;

        if rows_affected == 0 {
            return Err(WorkforceError::NotAssigned {
                employee_id,
                project_id,
            });
        }

        Ok(())
    }

    fn employees_for_project(&self, project_id: i64) -> Result<Vec<Employee>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let mut stmt = conn.prepare(
            r"SELECT e.id, e.first_name, e.last_name, e.email, e.salary, e.department_id
              FROM employees e
              JOIN employee_project ep ON ep.employee_id = e.id
              WHERE ep.project_id = ?1
              ORDER BY e.id",
        )?;

        let employee_iter = stmt.query_map(params![project_id], |row| {
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
}
