//! Memoization cache for DAG-shaped recursions
//!
//! A [`DpProblem`] names the sub-problems an index depends on and how to
//! combine their values; [`DpCache`] resolves dependencies on demand and
//! computes every index at most once.
//!
//! **These caches do NOT detect cycles.** Dependencies must form a DAG,
//! otherwise `get` recurses until the stack overflows.
//!
//! # Example
//!
//! ```rust
//! use aoc_2024::utils::dp_cache::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&10), 55);
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::DpCache;
pub use problem::DpProblem;

#[cfg(test)]
mod tests;
