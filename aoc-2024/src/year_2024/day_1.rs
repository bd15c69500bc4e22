use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, title = "Historian Hysteria", tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(idx, line)| -> Result<(i64, i64), anyhow::Error> {
                let mut fields = line.split_whitespace();
                let (Some(l), Some(r), None) = (fields.next(), fields.next(), fields.next()) else {
                    return Err(anyhow!("(line {}) expected two columns", idx + 1));
                };
                let l = l.parse().with_context(|| format!("(line {}) left column", idx + 1))?;
                let r = r.parse().with_context(|| format!("(line {}) right column", idx + 1))?;
                Ok((l, r))
            })
            .collect::<Result<(Vec<_>, Vec<_>), _>>()
            .map(|(mut left, mut right)| {
                left.sort_unstable();
                right.sort_unstable();
                SharedData { left, right }
            })
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: i64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(l, r)| (l - r).abs())
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<i64, i64> = HashMap::new();
        for &r in &shared.right {
            *counts.entry(r).or_default() += 1;
        }
        let similarity: i64 = shared
            .left
            .iter()
            .map(|l| l * counts.get(l).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}
