//! Project menu actions, including the assignments linking employees to
//! projects.
use workforce::error::WorkforceError;
use workforce::WorkforceRuntime;

use crate::commands::prompt;

/// Lists one line per (employee, project) pair so staffing is visible at a
/// glance. Projects without employees keep a single placeholder line.
pub(crate) fn list(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let projects = runtime.project_service().get_all()?;
    if projects.is_empty() {
        println!("(no records)");
    }

    for project in projects {
        let staffed = runtime.project_service().employees(project.id)?;
        if staffed.is_empty() {
            println!("{project} | (no employees assigned)");
        } else {
            for employee in staffed {
                println!("{project} | {employee}");
            }
        }
    }
    Ok(())
}

pub(crate) fn find_by_name(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let name = prompt("Enter the project's name: ")?;
    match runtime.project_service().find_by_name(&name)? {
        Some(project) => println!("{project}"),
        None => println!("Project '{name}' not found"),
    }
    Ok(())
}

pub(crate) fn create(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let name = prompt("Enter the project's name: ")?;
    let budget = prompt("Enter the project's budget: ")?;

    match runtime.project_service().create(&name, &budget) {
        Ok(project) => println!("Success: {project}"),
        Err(err) => println!("Error creating project: {err}"),
    }
    Ok(())
}

pub(crate) fn assign_employee(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let employee_id = prompt("Enter the employee id: ")?;
    let project_id = prompt("Enter the project id: ")?;

    let employee = match runtime.employee_service().find_by_id(&employee_id)? {
        Some(employee) => employee,
        None => {
            println!("Employee {employee_id} not found");
            return Ok(());
        }
    };
    let project = match runtime.project_service().find_by_id(&project_id)? {
        Some(project) => project,
        None => {
            println!("Project {project_id} not found");
            return Ok(());
        }
    };

    match runtime.assignment_service().assign(employee.id, project.id) {
        Ok(()) => println!(
            "Assigned {} to project '{}'",
            employee.full_name(),
            project.name
        ),
        Err(err @ WorkforceError::AlreadyAssigned { .. }) => println!("{err}"),
        Err(err) => return Err(err),
    }
    Ok(())
}

pub(crate) fn remove_employee(runtime: &WorkforceRuntime) -> Result<(), WorkforceError> {
    let employee_id = prompt("Enter the employee id: ")?;
    let project_id = prompt("Enter the project id: ")?;

    let employee = match runtime.employee_service().find_by_id(&employee_id)? {
        Some(employee) => employee,
        None => {
            println!("Employee {employee_id} not found");
            return Ok(());
        }
    };
    let project = match runtime.project_service().find_by_id(&project_id)? {
        Some(project) => project,
        None => {
            println!("Project {project_id} not found");
            return Ok(());
        }
    };

    match runtime.assignment_service().unassign(employee.id, project.id) {
        Ok(()) => println!(
            "Removed {} from project '{}'",
            employee.full_name(),
            project.name
        ),
        Err(err @ WorkforceError::NotAssigned { .. }) => println!("{err}"),
        Err(err) => return Err(err),
    }
    Ok(())
}
