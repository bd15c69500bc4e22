//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Every day uses the `AutoRegisterSolver` derive macro, so linking this
//! crate is enough for its solvers to show up in a
//! [`SolverRegistryBuilder`](aoc_solver::SolverRegistryBuilder).

pub mod utils;
pub mod year_2024;

/// Keeps the solver plugins linked into binaries that never name a type
/// from this crate.
pub fn link() {}
