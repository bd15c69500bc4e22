//! Error types for the CLI

use aoc_solver::{InputError, SolveError, SolverError};
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// The day argument is not a number
    #[error("Failed to parse day argument to number: {input} ({source})")]
    DayParse {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// The day argument is zero or negative
    #[error("Day must be greater than 0: {0}")]
    DayNotPositive(i64),

    /// Nothing is registered for the requested day
    #[error("No solver registered for {year} day {day}")]
    UnknownDay { year: u16, day: i64 },

    /// The requested part is above what the day declares
    #[error("Part {part} is out of range for {year} day {day}, which has {parts} part(s)")]
    PartOutOfRange { year: u16, day: u8, part: u8, parts: u8 },

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// One or more days failed to run
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// The input file could not be read
    #[error("Input for {year} day {day:02} unavailable: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: InputError,
    },

    /// The solver could not be constructed from the input
    #[error("Solver for {year} day {day:02} failed: {source}")]
    Solver {
        year: u16,
        day: u8,
        #[source]
        source: SolverError,
    },

    /// A single part failed
    #[error("{year} day {day:02} part {part} failed: {source}")]
    Part {
        year: u16,
        day: u8,
        part: u8,
        #[source]
        source: SolveError,
    },

    /// Multiple errors collected during the run
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ExecutorError>),
}

impl ExecutorError {
    /// Combine two errors into one, flattening nested `Multiple`s
    pub fn combine(first: ExecutorError, second: ExecutorError) -> ExecutorError {
        let errors = match (first, second) {
            (ExecutorError::Multiple(mut v1), ExecutorError::Multiple(v2)) => {
                v1.extend(v2);
                v1
            }
            (single, ExecutorError::Multiple(v)) => {
                let mut combined = vec![single];
                combined.extend(v);
                combined
            }
            (ExecutorError::Multiple(mut v), single) => {
                v.push(single);
                v
            }
            (a, b) => vec![a, b],
        };
        ExecutorError::Multiple(errors)
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(existing: Option<ExecutorError>, new: ExecutorError) -> ExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

#[cfg(test)]
impl ExecutorError {
    /// Number of individual failures carried
    pub(crate) fn count(&self) -> usize {
        match self {
            ExecutorError::Multiple(v) => v.iter().map(ExecutorError::count).sum(),
            _ => 1,
        }
    }
}
