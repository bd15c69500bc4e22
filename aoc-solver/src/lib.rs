//! Advent of Code Solver Library
//!
//! The framework behind the `aoc2024` runner: a trait-based solver contract,
//! input normalization, and a static registry that maps a day number to the
//! solver for that day's puzzle.
//!
//! # Overview
//!
//! - [`AocParser`] parses a day's input once per run into shared data
//! - [`PartSolver<N>`] answers part `N`; a day with a single question only
//!   implements part 1
//! - [`Solver`] ties the parts together (usually via `#[derive(AocSolver)]`)
//! - [`SolverRegistry`] looks solvers up by year and day; solvers register
//!   themselves with `#[derive(AutoRegisterSolver)]`
//! - [`read_input`] / [`normalize_input`] load input files with line endings
//!   normalized
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError};
//! use aoc_solver::{RegisterableSolver, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = Sums
//!     .register_with(SolverRegistryBuilder::new(), 2024, 1, "Sums")
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2024, 1, "2\n3\n4").unwrap();
//! assert_eq!(solver.name(), "Day 1: Sums");
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "24");
//! ```

mod error;
mod input;
mod instance;
mod registry;
mod solver;

pub use error::{InputError, ParseError, RegistrationError, SolveError, SolverError};
pub use input::{InputVariant, input_path, normalize_input, read_input};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder, plugins,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
