//! Timed solver instances

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Result from solving a puzzle part, including timing information
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The answer string
    pub answer: String,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle ready to be solved.
///
/// Owns the shared data for exactly one run, along with when parsing
/// started and finished.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    title: &'static str,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    /// Parse `input` and record how long it took.
    pub fn new(
        year: u16,
        day: u8,
        title: &'static str,
        input: &'a str,
    ) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            title,
            shared,
            parse_start,
            parse_end,
        })
    }
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// # Example
///
/// ```no_run
/// use aoc_solver::DynSolver;
///
/// fn run(mut solver: Box<dyn DynSolver>) -> Result<(), Box<dyn std::error::Error>> {
///     println!("{}", solver.name());
///     for part in 1..=solver.parts() {
///         let result = solver.solve(part)?;
///         println!("Part {}: {} ({} ms)", part, result.answer, result.duration().num_milliseconds());
///     }
///     Ok(())
/// }
/// ```
pub trait DynSolver {
    /// Solve the specified part, timing only this call.
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    /// Get the parse start time (UTC)
    fn parse_start(&self) -> DateTime<Utc>;

    /// Get the parse end time (UTC)
    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Puzzle title, e.g. `Historian Hysteria`
    fn title(&self) -> &'static str;

    /// Number of parts this solver supports
    fn parts(&self) -> u8;

    /// Display name, e.g. `Day 1: Historian Hysteria`
    fn name(&self) -> String {
        format!("Day {}: {}", self.day(), self.title())
    }

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn title(&self) -> &'static str {
        self.title
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::solver::AocParser;

    struct Counter;

    impl AocParser for Counter {
        type SharedData<'a> = (Vec<u32>, u32);

        fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
            let numbers = input
                .split_whitespace()
                .map(|w| w.parse().map_err(|_| ParseError::InvalidFormat(w.to_string())))
                .collect::<Result<_, _>>()?;
            Ok((numbers, 0))
        }
    }

    impl Solver for Counter {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            shared.1 += 1;
            match part {
                1 => Ok(shared.0.iter().sum::<u32>().to_string()),
                _ => Ok(shared.1.to_string()),
            }
        }
    }

    #[test]
    fn test_instance_reports_identity() {
        let solver = SolverInstance::<Counter>::new(2024, 7, "Bridge Repair", "1 2 3").unwrap();
        assert_eq!(solver.year(), 2024);
        assert_eq!(solver.day(), 7);
        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.name(), "Day 7: Bridge Repair");
        assert!(solver.parse_duration() >= TimeDelta::zero());
    }

    #[test]
    fn test_state_is_per_instance() {
        let mut first = SolverInstance::<Counter>::new(2024, 1, "t", "4").unwrap();
        assert_eq!(first.solve(1).unwrap().answer, "4");
        assert_eq!(first.solve(2).unwrap().answer, "2");

        let mut second = SolverInstance::<Counter>::new(2024, 1, "t", "4").unwrap();
        assert_eq!(second.solve(2).unwrap().answer, "1");
    }

    #[test]
    fn test_out_of_range_part_rejected() {
        let mut solver = SolverInstance::<Counter>::new(2024, 1, "t", "").unwrap();
        assert!(matches!(solver.solve(0), Err(SolveError::PartOutOfRange(0))));
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_parse_failure_surfaces() {
        let result = SolverInstance::<Counter>::new(2024, 1, "t", "1 x");
        assert!(matches!(result, Err(ParseError::InvalidFormat(s)) if s == "x"));
    }
}
