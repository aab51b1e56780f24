//! The service layer carries the business rules of the application: field
//! validation, referential checks and the wiring between entities. Services
//! never talk to SQLite directly, they go through the repository traits.

mod assignment_service;
mod department_service;
mod employee_service;
mod project_service;

pub use assignment_service::AssignmentService;
pub use department_service::DepartmentService;
pub use employee_service::EmployeeService;
pub use project_service::ProjectService;

#[cfg(test)]
pub(crate) mod test_mocks {
    use crate::error::WorkforceError;
    use crate::repository::assignment_repository::AssignmentRepository;
    use crate::repository::department_repository::DepartmentRepository;
    use crate::repository::employee_repository::EmployeeRepository;
    use crate::repository::project_repository::ProjectRepository;
    use crate::types::{Department, Employee, Project};
    use mockall::mock;

    mock! {
        pub DepartmentRepo {}

        impl DepartmentRepository for DepartmentRepo {
            fn insert(&self, name: &str, location: &str) -> Result<Department, WorkforceError>;
            fn find_all(&self) -> Result<Vec<Department>, WorkforceError>;
            fn find_by_id(&self, id: i64) -> Result<Option<Department>, WorkforceError>;
            fn find_by_name(&self, name: &str) -> Result<Option<Department>, WorkforceError>;
            fn update(&self, department: &Department) -> Result<(), WorkforceError>;
            fn delete(&self, id: i64) -> Result<(), WorkforceError>;
        }
    }

    mock! {
        pub EmployeeRepo {}

        impl EmployeeRepository for EmployeeRepo {
            fn insert(
                &self,
                first_name: &str,
                last_name: &str,
                email: &str,
                salary: f64,
                department_id: i64,
            ) -> Result<Employee, WorkforceError>;
            fn find_all(&self) -> Result<Vec<Employee>, WorkforceError>;
            fn find_by_id(&self, id: i64) -> Result<Option<Employee>, WorkforceError>;
            fn find_by_name(&self, name: &str) -> Result<Option<Employee>, WorkforceError>;
            fn find_by_department(&self, department_id: i64) -> Result<Vec<Employee>, WorkforceError>;
            fn update(&self, employee: &Employee) -> Result<(), WorkforceError>;
            fn delete(&self, id: i64) -> Result<(), WorkforceError>;
        }
    }

    mock! {
        pub ProjectRepo {}

        impl ProjectRepository for ProjectRepo {
            fn insert(&self, name: &str, budget: f64) -> Result<Project, WorkforceError>;
            fn find_all(&self) -> Result<Vec<Project>, WorkforceError>;
            fn find_by_id(&self, id: i64) -> Result<Option<Project>, WorkforceError>;
            fn find_by_name(&self, name: &str) -> Result<Option<Project>, WorkforceError>;
            fn update(&self, project: &Project) -> Result<(), WorkforceError>;
            fn delete(&self, id: i64) -> Result<(), WorkforceError>;
        }
    }

    mock! {
        pub AssignmentRepo {}

        impl AssignmentRepository for AssignmentRepo {
            fn assign(&self, employee_id: i64, project_id: i64) -> Result<(), WorkforceError>;
            fn unassign(&self, employee_id: i64, project_id: i64) -> Result<(), WorkforceError>;
            fn employees_for_project(&self, project_id: i64) -> Result<Vec<Employee>, WorkforceError>;
        }
    }
}
