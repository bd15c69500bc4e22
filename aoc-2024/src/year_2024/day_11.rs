use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, title = "Plutonian Pebbles", tags = ["memoization"])]
pub struct Solver;

/// Number of stones one stone becomes after a number of blinks.
pub struct StoneCount;

impl DpProblem<(u64, u32), u64> for StoneCount {
    fn deps(&self, &(stone, blinks): &(u64, u32)) -> Vec<(u64, u32)> {
        if blinks == 0 {
            return vec![];
        }
        match blink(stone) {
            (a, Some(b)) => vec![(a, blinks - 1), (b, blinks - 1)],
            (a, None) => vec![(a, blinks - 1)],
        }
    }

    fn compute(&self, &(_, blinks): &(u64, u32), deps: Vec<u64>) -> u64 {
        if blinks == 0 { 1 } else { deps.iter().sum() }
    }
}

pub type StoneCache = DpCache<(u64, u32), u64, HashMapBackend<(u64, u32), u64>, StoneCount>;

pub struct SharedData {
    stones: Vec<u64>,
    /// Kept across parts; part 2 reuses every count part 1 already computed.
    counts: StoneCache,
}

fn blink(stone: u64) -> (u64, Option<u64>) {
    if stone == 0 {
        return (1, None);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        (stone / half, Some(stone % half))
    } else {
        (stone * 2024, None)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = input
            .split_whitespace()
            .map(|s| s.parse().map_err(|_| ParseError::InvalidFormat(format!("bad stone '{}'", s))))
            .collect::<Result<_, _>>()?;
        Ok(SharedData {
            stones,
            counts: DpCache::with_problem(HashMapBackend::new(), StoneCount),
        })
    }
}

fn stones_after(shared: &SharedData, blinks: u32) -> u64 {
    shared
        .stones
        .iter()
        .map(|&stone| shared.counts.get(&(stone, blinks)))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones_after(shared, 25).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(stones_after(shared, 75).to_string())
    }
}
