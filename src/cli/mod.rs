//! CLI support for county-query
//!
//! Provides programmatic access to the command-line entry points so the
//! binary stays a thin argument parser.

mod docs;
mod run;

pub use docs::get_grammar_reference;
pub use run::{RunOptions, execute_run};

use std::io;
use std::path::PathBuf;

/// Errors that end a whole run
#[derive(Debug)]
pub enum CliError {
    /// Script or data file does not exist
    ResourceNotFound(PathBuf),
    /// Record data could not be loaded
    Store(crate::StoreError),
    /// Failure while executing the script
    Query(crate::QueryError),
    /// IO error
    Io(io::Error),
    /// No script path given and nothing piped to stdin
    NoScript,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::ResourceNotFound(path) => {
                write!(f, "ERROR: File not found. ({})", path.display())
            }
            CliError::Store(e) => write!(f, "ERROR: Could not load records: {}", e),
            CliError::Query(e) => write!(f, "ERROR: {}", e),
            CliError::Io(e) => write!(f, "ERROR: IO error: {}", e),
            CliError::NoScript => {
                write!(f, "ERROR: No script provided. Pass a script path or pipe one to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Store(e) => Some(e),
            CliError::Query(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::ResourceNotFound(_) | CliError::NoScript => None,
        }
    }
}

impl From<crate::StoreError> for CliError {
    fn from(e: crate::StoreError) -> Self {
        CliError::Store(e)
    }
}

impl From<crate::QueryError> for CliError {
    fn from(e: crate::QueryError) -> Self {
        CliError::Query(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
