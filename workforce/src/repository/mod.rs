use rusqlite::Connection;
use std::sync::{Arc, Mutex};

// Application repository modules, each representing specific database entity operations.
pub(crate) mod assignment_repository;
pub(crate) mod department_repository;
pub(crate) mod employee_repository;
pub(crate) mod project_repository;

// Database-related utilities and managers.
pub(crate) mod database_manager;
pub(crate) mod sqlite;

/// A thread-safe, shared connection to an ``SQLite`` database,
/// used across multiple repository layers.
pub(crate) type SharedSqliteConnection = Arc<Mutex<Connection>>;
