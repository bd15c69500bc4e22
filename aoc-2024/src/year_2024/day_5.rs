use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, title = "Print Queue", tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `(a, b)`: page `a` must be printed before page `b`
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl SharedData {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.compare(a, b) != Ordering::Greater)
    }
}

fn parse_input(input: &str) -> anyhow::Result<SharedData> {
    let (rules, updates) = input
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("missing blank line between rules and updates"))?;

    let rules = rules
        .lines()
        .map(|line| -> anyhow::Result<(u32, u32)> {
            let (a, b) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("rule '{}' has no '|'", line))?;
            Ok((a.parse()?, b.parse()?))
        })
        .collect::<anyhow::Result<_>>()?;

    let updates = updates
        .lines()
        .map(|line| -> anyhow::Result<Vec<u32>> {
            let pages = line
                .split(',')
                .map(str::parse)
                .collect::<Result<Vec<u32>, _>>()
                .with_context(|| format!("update '{}'", line))?;
            if pages.is_empty() {
                return Err(anyhow!("empty update"));
            }
            Ok(pages)
        })
        .collect::<anyhow::Result<_>>()?;

    Ok(SharedData { rules, updates })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_input(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|u| shared.is_ordered(u))
            .map(|u| middle(u))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|u| !shared.is_ordered(u))
            .map(|u| {
                let mut fixed = u.clone();
                fixed.sort_by(|&a, &b| shared.compare(a, b));
                middle(&fixed)
            })
            .sum();
        Ok(total.to_string())
    }
}
