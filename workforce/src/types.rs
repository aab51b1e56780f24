use serde::{Deserialize, Serialize};
use std::fmt;

/// An organisational unit employees belong to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub location: String,
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Department {}: {}, {}>",
            self.id, self.name, self.location
        )
    }
}

/// A person on the payroll, always attached to exactly one department.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    /// Unique identifier, auto-assigned by the database
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Stored lowercase so lookups and the uniqueness rule are
    /// case-insensitive
    pub email: String,

    pub salary: f64,

    /// Foreign key to the department this employee belongs to
    pub department_id: i64,
}

impl Employee {
    /// First and last name joined with a single space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Employee {}: {} {}, {}, ${:.2}, Department ID: {}>",
            self.id, self.first_name, self.last_name, self.email, self.salary, self.department_id
        )
    }
}

/// A unit of work employees can be assigned to, independent of departments.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub budget: f64,
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Project {}: {}, Budget ${:.2}>",
            self.id, self.name, self.budget
        )
    }
}
