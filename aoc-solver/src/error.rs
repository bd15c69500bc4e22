//! Error types for the solver library

use std::path::PathBuf;
use thiserror::Error;

/// Error type for parsing puzzle input
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("Missing data: {0}")]
    MissingData(String),
}

/// Error type for solving a specific part
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested part number is not implemented
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The requested part number is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// An error occurred while solving the part
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl SolveError {
    /// Wrap any displayable failure as [`SolveError::SolveFailed`].
    pub fn failed(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        SolveError::SolveFailed(error.into())
    }
}

/// Error type for solver lookup and construction
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day
    #[error("No solver registered for year {0} day {1}")]
    NotFound(u16, u8),
    /// Year or day lies outside the supported range
    #[error("Invalid year/day: {0} day {1}")]
    InvalidYearDay(u16, u8),
    /// Error occurred during parsing
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    /// Error occurred during solving
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver for this year-day combination already exists
    #[error("Duplicate solver registration for year {0} day {1}")]
    DuplicateSolver(u16, u8),
    /// Year or day lies outside the supported range
    #[error("Cannot register solver for year {0} day {1}: out of range")]
    InvalidYearDay(u16, u8),
}

/// Error type for locating and reading puzzle input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read input file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
