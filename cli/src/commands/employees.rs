//! Employee menu actions.
use workforce::error::WorkforceError;
use workforce::types::Employee;
use workforce::WorkforceRuntime;

use crate::commands::{print_list, prompt};

pub(crate) fn list(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let employees = runtime.employee_service().get_all()?;
    print_list(&employees);
    Ok(())
}

pub(crate) fn find_by_name(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let name = prompt("Enter the employee's name (First Last or either): ")?;
    match runtime.employee_service().find_by_name(&name)? {
        Some(employee) => println!("{employee}"),
        None => println!("Employee '{name}' not found"),
    }
    Ok(())
}

pub(crate) fn find_by_id(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let id = prompt("Enter the employee's id: ")?;
    if let Some(employee) = find(runtime, &id)? {
        println!("{employee}");
    }
    Ok(())
}

pub(crate) fn create(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let first_name = prompt("Enter the employee's first name: ")?;
    let last_name = prompt("Enter the employee's last name: ")?;
    let email = prompt("Enter the employee's email: ")?;
    let salary = prompt("Enter the employee's salary: ")?;
    let department_id = prompt("Enter the employee's department id: ")?;

    let result = runtime.employee_service().create(
        &first_name,
        &last_name,
        &email,
        &salary,
        &department_id,
    );
    match result {
        Ok(employee) => println!("Success: {employee}"),
        // The department check reports without the action prefix.
        Err(err @ WorkforceError::UnknownDepartment) => println!("Error: {err}"),
        Err(err) => println!("Error creating employee: {err}"),
    }
    Ok(())
}

pub(crate) fn update(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let id = prompt("Enter the employee's id: ")?;
    let employee = match find(runtime, &id)? {
        Some(employee) => employee,
        None => return Ok(()),
    };

    let first_name = prompt("Enter the employee's new first name: ")?;
    let last_name = prompt("Enter the employee's new last name: ")?;
    let email = prompt("Enter the employee's new email: ")?;
    let salary = prompt("Enter the employee's new salary: ")?;
    let department_id = prompt("Enter the employee's new department id: ")?;

    let result = runtime.employee_service().update(
        employee.id,
        &first_name,
        &last_name,
        &email,
        &salary,
        &department_id,
    );
    match result {
        Ok(updated) => println!("Success: {updated}"),
        Err(err @ WorkforceError::UnknownDepartment) => println!("Error: {err}"),
        Err(err) => println!("Error updating employee: {err}"),
    }
    Ok(())
}

pub(crate) fn delete(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let id = prompt("Enter the employee's id: ")?;
    let employee = match find(runtime, &id)? {
        Some(employee) => employee,
        None => return Ok(()),
    };

    runtime.employee_service().delete(employee.id)?;
    println!("Employee {id} deleted");
    Ok(())
}

/// Resolves the id text typed by the user, reporting a miss with the raw
/// input rather than a parsed value.
fn find(runtime: &WorkforceRuntime, id: &str) -> Result<Option<Employee>, WorkforceError> {
    let employee = runtime.employee_service().find_by_id(id)?;
    if employee.is_none() {
        println!("Employee {id} not found");
    }
    Ok(employee)
}
