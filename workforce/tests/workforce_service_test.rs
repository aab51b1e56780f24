use workforce::error::WorkforceError;
use workforce::{DatabaseConfig, WorkforceRuntime};

fn test_runtime() -> WorkforceRuntime {
    // Initialize logger only once
    let _ = env_logger::builder().is_test(true).try_init();

    WorkforceRuntime::with_database(&DatabaseConfig::SqliteInMemory)
        .expect("Failed to create test runtime")
}

#[allow(dead_code)]
fn assert_send_sync<T: Send + Sync>(_: T) {}

/// Ensures that the `WorkforceRuntime` assembled against an in-memory
/// database initializes every service and can be handed across threads.
#[test]
pub fn test_create_in_memory_runtime() -> Result<(), WorkforceError> {
    let runtime = WorkforceRuntime::with_database(&DatabaseConfig::SqliteInMemory)?;
    assert_send_sync(runtime);
    Ok(())
}

#[test]
fn test_company_walkthrough() -> Result<(), WorkforceError> {
    let runtime = test_runtime();

    let department = runtime
        .department_service()
        .create("Engineering", "Building 3")?;
    let employee = runtime.employee_service().create(
        "Ada",
        "Lovelace",
        " Ada@Example.COM ",
        "5000",
        &department.id.to_string(),
    )?;
    assert_eq!(
        employee.email, "ada@example.com",
        "Email should be trimmed and lowercased before storage"
    );
    assert_eq!(employee.department_id, department.id);

    let project = runtime.project_service().create("Apollo", "120000")?;
    runtime
        .assignment_service()
        .assign(employee.id, project.id)?;

    let staffed = runtime.project_service().employees(project.id)?;
    assert_eq!(staffed.len(), 1);
    assert_eq!(staffed[0].full_name(), "Ada Lovelace");

    let colleagues = runtime.department_service().employees(department.id)?;
    assert_eq!(colleagues, staffed);

    // Dropping the department takes the employee and the assignment with it,
    // the project itself stays.
    runtime.department_service().delete(department.id)?;
    assert!(runtime
        .employee_service()
        .find_by_id(&employee.id.to_string())?
        .is_none());
    assert!(runtime.project_service().employees(project.id)?.is_empty());
    assert!(runtime
        .project_service()
        .find_by_id(&project.id.to_string())?
        .is_some());

    Ok(())
}

#[test]
fn test_duplicate_department_name_is_rejected() -> Result<(), WorkforceError> {
    let runtime = test_runtime();

    runtime.department_service().create("Sales", "Floor 1")?;
    let result = runtime.department_service().create("Sales", "Floor 2");
    match result {
        Err(WorkforceError::DuplicateDepartmentName(name)) => assert_eq!(name, "Sales"),
        other => panic!("Expected a duplicate name rejection, got {other:?}"),
    }

    // The original row is untouched by the failed insert.
    let survivor = runtime
        .department_service()
        .find_by_name("Sales")?
        .expect("The first department should still exist");
    assert_eq!(survivor.location, "Floor 1");
    assert_eq!(runtime.department_service().get_all()?.len(), 1);
    Ok(())
}

#[test]
fn test_duplicate_email_is_rejected_case_insensitively() -> Result<(), WorkforceError> {
    let runtime = test_runtime();

    let department = runtime.department_service().create("Research", "Oslo")?;
    let department_id = department.id.to_string();
    runtime
        .employee_service()
        .create("Grace", "Hopper", "Grace@Navy.mil", "4000", &department_id)?;

    // The addresses differ only by case, both normalize to the same row.
    let result = runtime
        .employee_service()
        .create("Second", "Hopper", "grace@navy.MIL", "4100", &department_id);
    match result {
        Err(WorkforceError::DuplicateEmail(email)) => assert_eq!(email, "grace@navy.mil"),
        other => panic!("Expected a duplicate email rejection, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_validation_failures_surface_to_the_caller() -> Result<(), WorkforceError> {
    let runtime = test_runtime();
    let employees = runtime.employee_service();

    let err = employees
        .create("Ada", "Lovelace", "ada@example.com", "abc", "1")
        .unwrap_err();
    assert_eq!(err.to_string(), "Salary must be a number");

    let err = employees
        .create("Ada", "Lovelace", "ada@example.com", "-1", "1")
        .unwrap_err();
    assert_eq!(err.to_string(), "Salary must be greater than 0");

    let err = employees
        .create("Ada", "Lovelace", "ada@example.com", "5000", "42")
        .unwrap_err();
    assert!(matches!(err, WorkforceError::UnknownDepartment));

    let err = runtime.project_service().create("   ", "1000").unwrap_err();
    assert_eq!(err.to_string(), "Project name must be a non-empty string");

    Ok(())
}

#[test]
fn test_assignment_round_trip() -> Result<(), WorkforceError> {
    let runtime = test_runtime();

    let department = runtime.department_service().create("Support", "Lobby")?;
    let employee = runtime.employee_service().create(
        "Tony",
        "Stark",
        "tony@stark.com",
        "9000",
        &department.id.to_string(),
    )?;
    let project = runtime.project_service().create("Jarvis", "50000")?;

    runtime
        .assignment_service()
        .assign(employee.id, project.id)?;
    let result = runtime.assignment_service().assign(employee.id, project.id);
    match result {
        Err(WorkforceError::AlreadyAssigned {
            employee_id,
            project_id,
        }) => {
            assert_eq!(employee_id, employee.id);
            assert_eq!(project_id, project.id);
        }
        other => panic!("Expected a duplicate assignment rejection, got {other:?}"),
    }

    runtime
        .assignment_service()
        .unassign(employee.id, project.id)?;
    assert!(runtime.project_service().employees(project.id)?.is_empty());

    let result = runtime
        .assignment_service()
        .unassign(employee.id, project.id);
    assert!(matches!(result, Err(WorkforceError::NotAssigned { .. })));

    Ok(())
}

#[test]
fn test_assigning_unknown_rows_is_rejected() -> Result<(), WorkforceError> {
    let runtime = test_runtime();

    let department = runtime.department_service().create("Legal", "Floor 9")?;
    let employee = runtime.employee_service().create(
        "Jen",
        "Walters",
        "jen@walters.law",
        "7000",
        &department.id.to_string(),
    )?;

    let result = runtime.assignment_service().assign(employee.id, 99);
    assert!(matches!(result, Err(WorkforceError::ProjectNotFound(99))));

    let project = runtime.project_service().create("Casework", "10000")?;
    let result = runtime.assignment_service().assign(99, project.id);
    assert!(matches!(result, Err(WorkforceError::EmployeeNotFound(99))));

    Ok(())
}

#[test]
fn test_lookups_accept_untrusted_id_text() -> Result<(), WorkforceError> {
    let runtime = test_runtime();

    let department = runtime.department_service().create("Finance", "Floor 2")?;
    runtime.employee_service().create(
        "Ada",
        "Lovelace",
        "ada@example.com",
        "5000",
        &department.id.to_string(),
    )?;

    assert!(runtime
        .department_service()
        .find_by_id("not-a-number")?
        .is_none());
    assert!(runtime
        .department_service()
        .find_by_id(&format!(" {} ", department.id))?
        .is_some());

    assert!(runtime
        .employee_service()
        .find_by_name("Ada Lovelace")?
        .is_some());
    assert!(runtime.employee_service().find_by_name("Lovelace")?.is_some());
    assert!(runtime.employee_service().find_by_name("Charles")?.is_none());

    Ok(())
}

#[test]
fn test_update_overwrites_every_field() -> Result<(), WorkforceError> {
    let runtime = test_runtime();

    let department = runtime.department_service().create("Ops", "Basement")?;
    let updated = runtime
        .department_service()
        .update(department.id, "  Operations  ", " Floor 1 ")?;
    assert_eq!(updated.name, "Operations");
    assert_eq!(updated.location, "Floor 1");

    let reread = runtime
        .department_service()
        .find_by_id(&department.id.to_string())?
        .expect("Department vanished during update");
    assert_eq!(reread, updated);

    let employee = runtime.employee_service().create(
        "Ada",
        "Lovelace",
        "ada@example.com",
        "5000",
        &department.id.to_string(),
    )?;
    let updated = runtime.employee_service().update(
        employee.id,
        "Ada",
        "King",
        "Ada@Lovelace.UK",
        "6000",
        &department.id.to_string(),
    )?;
    assert_eq!(updated.email, "ada@lovelace.uk");
    assert!((updated.salary - 6000.0).abs() < f64::EPSILON);

    Ok(())
}

#[test]
fn test_update_to_a_taken_name_is_rejected() -> Result<(), WorkforceError> {
    let runtime = test_runtime();

    runtime.department_service().create("Sales", "Floor 1")?;
    let second = runtime.department_service().create("Marketing", "Floor 2")?;

    let result = runtime
        .department_service()
        .update(second.id, "Sales", "Floor 2");
    assert!(matches!(
        result,
        Err(WorkforceError::DuplicateDepartmentName(_))
    ));

    // Re-saving under its own name is not a conflict.
    let kept = runtime
        .department_service()
        .update(second.id, "Marketing", "Floor 3")?;
    assert_eq!(kept.location, "Floor 3");

    Ok(())
}

#[test]
fn test_on_disk_database_persists_between_runs() -> Result<(), WorkforceError> {
    let _ = env_logger::builder().is_test(true).try_init();

    let tmp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let database = DatabaseConfig::SqliteOnDisk {
        path: tmp_dir.path().join("company.db"),
    };

    {
        let runtime = WorkforceRuntime::with_database(&database)?;
        runtime.department_service().create("Research", "Oslo")?;
    }

    let runtime = WorkforceRuntime::with_database(&database)?;
    let found = runtime.department_service().find_by_name("Research")?;
    assert!(found.is_some(), "Department did not survive a reopen");
    Ok(())
}
