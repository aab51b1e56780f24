use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
pub(crate) enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

#[derive(Parser)]
/// Employee management console - departments, employees and projects with
/// the assignments between them, stored in a local SQLite database file.
///
/// Started without options, the database named in the configuration file is
/// used and created on first run. All editing happens through the numbered
/// menu.
#[command(author, version, about)] // Read from Cargo.toml
pub(crate) struct Opts {
    /// Database file to use instead of the configured one
    #[arg(short, long)]
    pub database: Option<PathBuf>,

    #[arg(short, long)]
    pub verbosity: Option<LogLevel>,
}
