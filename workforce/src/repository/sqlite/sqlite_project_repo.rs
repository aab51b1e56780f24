use crate::error::WorkforceError;
use crate::repository::project_repository::ProjectRepository;
use crate::repository::sqlite::is_unique_violation;
use crate::repository::SharedSqliteConnection;
use crate::types::Project;
use log::debug;
use rusqlite::params;

pub struct SqliteProjectRepository {
    connection: SharedSqliteConnection,
}

impl SqliteProjectRepository {
    pub(crate) fn new(connection: SharedSqliteConnection) -> Self {
        Self { connection }
    }
}

/// SQL statement to create the `projects` table.
const CREATE_PROJECT_TABLE_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS projects (
        id integer primary key not null,
        name varchar(255) not null unique,
        budget double not null check (budget > 0)
    );
";

/// Creates the `projects` table in the database.
pub fn create_project_table(connection: &SharedSqliteConnection) -> Result<(), WorkforceError> {
    let conn = connection.lock().map_err(|_| WorkforceError::LockPoisoned)?;
    conn.execute_batch(CREATE_PROJECT_TABLE_SQL)?;
    Ok(())
}

impl ProjectRepository for SqliteProjectRepository {
    fn insert(&self, name: &str, budget: f64) -> Result<Project, WorkforceError> {
        debug!("Inserting project {name}");
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.query_row(
            r"INSERT INTO projects (name, budget)
              VALUES (?1, ?2)
              RETURNING id",
            params![name, budget],
            |row| row.get(0),
        );

        match result {
            Ok(id) => Ok(Project {
                id,
                name: name.to_string(),
                budget,
            }),
            Err(err) => {
                if is_unique_violation(&err, "projects.name") {
                    return Err(WorkforceError::DuplicateProjectName(name.to_string()));
                }
                Err(err.into())
            }
        }
    }

    fn find_all(&self) -> Result<Vec<Project>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let mut stmt = conn.prepare(
            r"SELECT id, name, budget
              FROM projects
              ORDER BY id",
        )?;

        let project_iter = stmt.query_map([], |row| {
            Ok(Project {
                id: row.get(0)?,
                name: row.get(1)?,
                budget: row.get(2)?,
            })
        })?;

        let mut projects = Vec::new();
        for project in project_iter {
            projects.push(project?);
        }

        Ok(projects)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<Project>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.query_row(
            r"SELECT id, name, budget
              FROM projects
              WHERE id = ?1",
            params![id],
            |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    budget: row.get(2)?,
                })
            },
        );

        match result {
            Ok(project) => Ok(Some(project)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Project>, WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.query_row(
            r"SELECT id, name, budget
              FROM projects
              WHERE name = ?1
              LIMIT 1",
            params![name],
            |row| {
                Ok(Project {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    budget: row.get(2)?,
                })
            },
        );

        match result {
            Ok(project) => Ok(Some(project)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn update(&self, project: &Project) -> Result<(), WorkforceError> {
        let conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;

        let result = conn.execute(
            r"UPDATE projects
              SET name = ?1, budget = ?2
              WHERE id = ?3",
            params![project.name, project.budget, project.id],
        );

        match result {
            Ok(0) => Err(WorkforceError::ProjectNotFound(project.id)),
            Ok(_) => Ok(()),
            Err(err) => {
                if is_unique_violation(&err, "projects.name") {
                    return Err(WorkforceError::DuplicateProjectName(project.name.clone()));
                }
                Err(err.into())
            }
        }
    }

    /// Deletes the project and its assignment rows in one transaction.
    /// Employees that were assigned to the project are left untouched.
    fn delete(&self, id: i64) -> Result<(), WorkforceError> {
        let mut conn = self
            .connection
            .lock()
            .map_err(|_| WorkforceError::LockPoisoned)?;
        let tx = conn.transaction()?;

        tx.execute(
            "DELETE FROM employee_project WHERE project_id = ?1",
            params![id],
        )?;

        let rows_affected = tx.execute("DELETE FROM projects WHERE id = ?1", params![id])?;
        if rows_affected == 0 {
            return Err(WorkforceError::ProjectNotFound(id));
        }

        tx.commit()?;
        debug!("Deleted project {id}");

        Ok(())
    }
}
