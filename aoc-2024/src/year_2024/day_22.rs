use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 22, title = "Monkey Market", tags = ["simulation", "hashing"])]
pub struct Solver;

const PRUNE: u64 = 16_777_216;
const STEPS: usize = 2000;
/// Price changes lie in -9..=9, so four of them fit in a base-19 number.
const SEQUENCES: usize = 19 * 19 * 19 * 19;

pub fn next_secret(mut secret: u64) -> u64 {
    secret = ((secret << 6) ^ secret) % PRUNE;
    secret = ((secret >> 5) ^ secret) % PRUNE;
    ((secret << 11) ^ secret) % PRUNE
}

/// `seed` followed by the next `STEPS` secrets.
fn secrets(seed: u64) -> impl Iterator<Item = u64> {
    std::iter::successors(Some(seed), |&s| Some(next_secret(s))).take(STEPS + 1)
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<u64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad initial secret '{}'", line)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().filter_map(|&seed| secrets(seed).last()).sum();
        Ok(total.to_string())
    }
}

/// Most bananas any single four-change sequence can buy across all buyers.
pub fn best_sequence(seeds: &[u64]) -> u64 {
    let mut bananas = vec![0u64; SEQUENCES];
    // Buyer that last sold at each sequence; a buyer only sells at the first match.
    let mut sold_by = vec![usize::MAX; SEQUENCES];

    for (buyer, &seed) in seeds.iter().enumerate() {
        let prices: Vec<u64> = secrets(seed).map(|s| s % 10).collect();
        let mut key = 0;
        for (i, pair) in prices.windows(2).enumerate() {
            let change = (pair[1] + 9 - pair[0]) as usize;
            key = (key * 19 + change) % SEQUENCES;
            if i >= 3 && sold_by[key] != buyer {
                sold_by[key] = buyer;
                bananas[key] += pair[1];
            }
        }
    }
    bananas.into_iter().max().unwrap_or(0)
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(best_sequence(shared).to_string())
    }
}
