//! CLI support for starscan
//!
//! Provides programmatic access to the report renderers for embedding
//! in other tools.

mod detail;
mod facilities;
mod report;
mod scan;
mod summary;

pub use detail::{render_detail, DetailOptions};
pub use facilities::render_facilities;
pub use report::{render_report, ReportOptions};
pub use scan::{render_scan, ScanOptions};
pub use summary::{render_summary, SummaryOptions};

use std::io;

use crate::profile::LoadError;

/// Errors that can occur during CLI operations
#[derive(Debug)]
pub enum CliError {
    /// Profile loading error
    Load(LoadError),
    /// Invalid search pattern
    Pattern(regex::Error),
    /// IO error
    Io(io::Error),
    /// No input provided
    NoInput,
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Load(e) => write!(f, "{}", e),
            CliError::Pattern(e) => write!(f, "Invalid pattern: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => {
                write!(f, "No input provided. Pass a profile file or pipe JSON to stdin.")
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Load(e) => Some(e),
            CliError::Pattern(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoInput => None,
        }
    }
}

impl From<LoadError> for CliError {
    fn from(e: LoadError) -> Self {
        CliError::Load(e)
    }
}

impl From<regex::Error> for CliError {
    fn from(e: regex::Error) -> Self {
        CliError::Pattern(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
