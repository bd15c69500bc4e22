use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, VecBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, title = "Linen Layout", tags = ["memoization", "strings"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    towels: Vec<&'a str>,
    designs: Vec<&'a str>,
    arrangements: Option<Vec<u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (towels, designs) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no blank line after the towel patterns".into()))?;
        let towels: Vec<&str> = towels.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        if towels.is_empty() {
            return Err(ParseError::MissingData("no towel patterns".into()));
        }
        Ok(SharedData {
            towels,
            designs: designs.lines().map(str::trim).filter(|d| !d.is_empty()).collect(),
            arrangements: None,
        })
    }
}

/// Ways to finish `design` from a given offset.
struct Arrangements<'t> {
    towels: &'t [&'t str],
    design: &'t str,
}

impl DpProblem<usize, u64> for Arrangements<'_> {
    fn deps(&self, &offset: &usize) -> Vec<usize> {
        if offset == self.design.len() {
            return vec![];
        }
        let rest = &self.design[offset..];
        self.towels
            .iter()
            .filter(|towel| rest.starts_with(*towel))
            .map(|towel| offset + towel.len())
            .collect()
    }

    fn compute(&self, &offset: &usize, deps: Vec<u64>) -> u64 {
        if offset == self.design.len() { 1 } else { deps.iter().sum() }
    }
}

fn count_arrangements(towels: &[&str], design: &str) -> u64 {
    let cache = DpCache::with_problem(
        VecBackend::with_capacity(design.len() + 1),
        Arrangements { towels, design },
    );
    cache.get(&0)
}

fn arrangements<'s>(shared: &'s mut SharedData<'_>) -> &'s [u64] {
    let (towels, designs) = (&shared.towels, &shared.designs);
    shared
        .arrangements
        .get_or_insert_with(|| designs.iter().map(|d| count_arrangements(towels, d)).collect())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = arrangements(shared).iter().filter(|&&n| n > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(arrangements(shared).iter().sum::<u64>().to_string())
    }
}
