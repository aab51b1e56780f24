//! Department menu actions.
use workforce::error::WorkforceError;
use workforce::types::Department;
use workforce::WorkforceRuntime;

use crate::commands::{print_list, prompt};

pub(crate) fn list(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let departments = runtime.department_service().get_all()?;
    print_list(&departments);
    Ok(())
}

pub(crate) fn find_by_name(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let name = prompt("Enter the department's name: ")?;
    match runtime.department_service().find_by_name(&name)? {
        Some(department) => println!("{department}"),
        None => println!("Department '{name}' not found"),
    }
    Ok(())
}

pub(crate) fn create(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let name = prompt("Enter the department's name: ")?;
    let location = prompt("Enter the department's location: ")?;

    match runtime.department_service().create(&name, &location) {
        Ok(department) => println!("Success: {department}"),
        Err(err) => println!("Error creating department: {err}"),
    }
    Ok(())
}

pub(crate) fn update(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let id = prompt("Enter the department's id: ")?;
    let department = match find(runtime, &id)? {
        Some(department) => department,
        None => return Ok(()),
    };

    let name = prompt("Enter the department's new name: ")?;
    let location = prompt("Enter the department's new location: ")?;
    match runtime
        .department_service()
        .update(department.id, &name, &location)
    {
        Ok(updated) => println!("Success: {updated}"),
        Err(err) => println!("Error updating department: {err}"),
    }
    Ok(())
}

pub(crate) fn delete(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let id = prompt("Enter the department's id: ")?;
    let department = match find(runtime, &id)? {
        Some(department) => department,
        None => return Ok(()),
    };

    runtime.department_service().delete(department.id)?;
    println!("Department {id} deleted");
    Ok(())
}

pub(crate) fn list_employees(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let id = prompt("Enter the department's id: ")?;
    let department = match find(runtime, &id)? {
        Some(department) => department,
        None => return Ok(()),
    };

    let employees = runtime.department_service().employees(department.id)?;
    print_list(&employees);
    Ok(())
}

/// Resolves the id text typed by the user, reporting a miss with the raw
/// input rather than a parsed value.
fn find(runtime: &WorkforceRuntime, id: &str) -> Result<Option<Department>, WorkforceError> {
    let department = runtime.department_service().find_by_id(id)?;
    if department.is_none() {
        println!("Department {id} not found");
    }
    Ok(department)
}
