//! Menu actions. Every action prompts for its inputs on stdin, invokes a
//! single service operation and prints the outcome.
use std::fmt::Display;
use std::io::{self, Write};

use workforce::error::WorkforceError;

pub(crate) mod departments;
pub(crate) mod employees;
pub(crate) mod projects;

/// Prints `label` without a newline, then reads one line from stdin and
/// returns it trimmed.
pub(crate) fn prompt(label: &str) -> Result<String, WorkforceError> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Prints every item on its own line, or a marker when there are none.
pub(crate) fn print_list<T: Display>(items: &[T]) {
    if items.is_empty() {
        println!("(no records)");
    }
    for item in items {
        println!("{item}");
    }
}
