//! # The Employee Management System Console
//!
//! A text-menu application for managing the departments, employees and
//! projects of a small organization, including which employees work on
//! which projects. All data lives in a single local `SQLite` file.
//!
//! ## Usage
//! Start the menu against the configured database:
//! ```bash
//! workforce
//! ```
//!
//! Point it at another database file for one run:
//! ```bash
//! workforce --database /tmp/company.db
//! ```
//!
//! Every action is picked by number, for example:
//! ```text
//! 3. Create department
//! 10. Create employee
//! 16. Assign employee to project
//! ```
//! and prompts for its inputs. `0` leaves the program.
use clap::Parser;
use cli::{LogLevel, Opts};
use commands::{departments, employees, projects};
use env_logger::Env;
use log::debug;
use std::env;
use std::fs::File;
use std::io::{self, Write};
use std::process::exit;

use workforce::{error::WorkforceError, DatabaseConfig, WorkforceRuntime};

mod cli;
mod commands;

const MENU: &str = "
Please select an option:
0. Exit
--- Departments ---
1. List all departments
2. Find department by name
3. Create department
4. Update department
5. Delete department
6. List employees in a department
--- Employees ---
7. List all employees
8. Find employee by name
9. Find employee by id
10. Create employee
11. Update employee
12. Delete employee
--- Projects ---
13. List all projects
14. Find project by name
15. Create project
16. Assign employee to project
17. Remove employee from project
";

fn main() -> Result<(), WorkforceError> {
    let opts: Opts = Opts::parse();

    configure_logging(&opts); // Handles the -v option

    let runtime = get_runtime(&opts);

    println!("Welcome to the Employee Management System (EMS)");
    loop {
        println!("{MENU}");
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // stdin closed
        }
        let choice = line.trim();

        if choice == "0" {
            println!("Goodbye!");
            break;
        }

        let result = match choice {
            "1" => departments::list(&runtime),
            "2" => departments::find_by_name(&runtime),
            "3" => departments::create(&runtime),
            "4" => departments::update(&runtime),
            "5" => departments::delete(&runtime),
            "6" => departments::list_employees(&runtime),
            "7" => employees::list(&runtime),
            "8" => employees::find_by_name(&runtime),
            "9" => employees::find_by_id(&runtime),
            "10" => employees::create(&runtime),
            "11" => employees::update(&runtime),
            "12" => employees::delete(&runtime),
            "13" => projects::list(&runtime),
            "14" => projects::find_by_name(&runtime),
            "15" => projects::create(&runtime),
            "16" => projects::assign_employee(&runtime),
            "17" => projects::remove_employee(&runtime),
            _ => {
                println!("Invalid choice");
                Ok(())
            }
        };

        // A failed action has already rolled back, report it and carry on.
        if let Err(err) = result {
            println!("Error: {err}");
        }
    }

    Ok(())
}

/// Assembles the runtime, honoring a `--database` override from the
/// command line.
fn get_runtime(opts: &Opts) -> WorkforceRuntime {
    let result = match &opts.database {
        Some(path) => WorkforceRuntime::with_database(&DatabaseConfig::SqliteOnDisk {
            path: path.clone(),
        }),
        None => WorkforceRuntime::new(),
    };

    match result {
        Ok(runtime) => runtime,
        Err(err) => {
            match err {
                WorkforceError::TomlParse { .. } => {
                    eprintln!("Unable to read the configuration file: {err}");
                }
                _ => {
                    eprintln!("Failed to create runtime: '{err}'");
                }
            }

            exit(1);
        }
    }
}

fn configure_logging(opts: &Opts) {
    let mut tmp_dir = env::temp_dir();
    tmp_dir.push("workforce.log");

    if opts.verbosity.is_some() {
        println!("Logging to {}", &tmp_dir.to_string_lossy());
    }

    // Log lines must not interleave with the interactive prompts, so they
    // go to a file rather than the terminal.
    let target = Box::new(File::create(tmp_dir).expect("Can't create file"));

    // If nothing else was specified in RUST_LOG, use 'warn'
    env_logger::Builder::from_env(Env::default().default_filter_or(opts.verbosity.map_or(
        "warn",
        |lvl| match lvl {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        },
    )))
    .target(env_logger::Target::Pipe(target))
    .init();
    debug!("Logging started");
}
