use std::iter::{once, repeat_n};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::grid::Point;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 21, title = "Keypad Conundrum", tags = ["memoization", "shortest-path"])]
pub struct Solver;

/// Key layout; a space marks the gap no robot arm may hover over.
pub struct Keypad {
    rows: &'static [&'static str],
}

pub const NUMERIC: Keypad = Keypad {
    rows: &["789", "456", "123", " 0A"],
};

pub const DIRECTIONAL: Keypad = Keypad {
    rows: &[" ^A", "<v>"],
};

impl Keypad {
    fn position(&self, key: char) -> Option<Point> {
        self.rows.iter().enumerate().find_map(|(y, row)| {
            row.chars()
                .position(|c| c == key)
                .map(|x| Point::new(x as i64, y as i64))
        })
    }

    pub fn has_key(&self, key: char) -> bool {
        key != ' ' && self.position(key).is_some()
    }

    /// Candidate key sequences, each ending in `A`, that move an arm from
    /// `from` to `to` and press it. Only the two L-shaped routes can be optimal.
    pub fn routes(&self, from: char, to: char) -> Vec<Vec<char>> {
        let (Some(a), Some(b), Some(gap)) = (self.position(from), self.position(to), self.position(' ')) else {
            return vec![];
        };
        let d = b - a;
        let horizontal = repeat_n(if d.x > 0 { '>' } else { '<' }, d.x.unsigned_abs() as usize);
        let vertical = repeat_n(if d.y > 0 { 'v' } else { '^' }, d.y.unsigned_abs() as usize);

        let mut routes = Vec::with_capacity(2);
        if Point::new(b.x, a.y) != gap {
            routes.push(horizontal.clone().chain(vertical.clone()).chain(once('A')).collect());
        }
        if Point::new(a.x, b.y) != gap && ((d.x != 0 && d.y != 0) || routes.is_empty()) {
            routes.push(vertical.chain(horizontal).chain(once('A')).collect());
        }
        routes
    }
}

/// Consecutive key pairs of a sequence, starting from the resting `A` key.
fn moves(keys: &[char]) -> impl Iterator<Item = (char, char)> + '_ {
    once('A').chain(keys.iter().copied()).tuple_windows()
}

/// Human presses needed for the directional robot `level` layers up to move
/// from one key to another and press it. Level 0 is the human's own keypad.
pub struct ArrowCost;

impl DpProblem<(char, char, u32), u64> for ArrowCost {
    fn deps(&self, &(from, to, level): &(char, char, u32)) -> Vec<(char, char, u32)> {
        if level == 0 {
            return vec![];
        }
        DIRECTIONAL
            .routes(from, to)
            .iter()
            .flat_map(|route| moves(route).map(|(a, b)| (a, b, level - 1)).collect::<Vec<_>>())
            .collect()
    }

    fn compute(&self, &(from, to, level): &(char, char, u32), deps: Vec<u64>) -> u64 {
        if level == 0 {
            return 1;
        }
        let mut deps = deps.into_iter();
        DIRECTIONAL
            .routes(from, to)
            .iter()
            .map(|route| deps.by_ref().take(route.len()).sum::<u64>())
            .min()
            .unwrap_or(0)
    }
}

pub type ArrowCache = DpCache<(char, char, u32), u64, HashMapBackend<(char, char, u32), u64>, ArrowCost>;

pub struct SharedData<'a> {
    codes: Vec<(&'a str, u64)>,
    costs: ArrowCache,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let codes = input
            .lines()
            .filter(|line| !line.is_empty())
            .map(|code| {
                if let Some(c) = code.chars().find(|&c| !NUMERIC.has_key(c)) {
                    return Err(ParseError::InvalidFormat(format!("'{}' is not a numeric key in '{}'", c, code)));
                }
                let value = code
                    .trim_matches('A')
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("code '{}' has no numeric part", code)))?;
                Ok((code, value))
            })
            .collect::<Result<_, _>>()?;
        Ok(SharedData {
            codes,
            costs: DpCache::with_problem(HashMapBackend::new(), ArrowCost),
        })
    }
}

fn sequence_cost(costs: &ArrowCache, keys: &[char], level: u32) -> u64 {
    moves(keys).map(|(a, b)| costs.get(&(a, b, level))).sum()
}

/// Fewest human presses to type `code` through `robots` directional robots.
pub fn code_presses(costs: &ArrowCache, code: &str, robots: u32) -> u64 {
    let keys: Vec<char> = code.chars().collect();
    moves(&keys)
        .map(|(from, to)| {
            NUMERIC
                .routes(from, to)
                .iter()
                .map(|route| sequence_cost(costs, route, robots))
                .min()
                .unwrap_or(0)
        })
        .sum()
}

fn complexity(shared: &SharedData, robots: u32) -> u64 {
    shared
        .codes
        .iter()
        .map(|&(code, value)| code_presses(&shared.costs, code, robots) * value)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(complexity(shared, 2).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(complexity(shared, 25).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "029A\n980A\n179A\n456A\n379A";

    #[test]
    fn test_routes_avoid_gap() {
        assert_eq!(NUMERIC.routes('A', '1'), vec![vec!['^', '<', '<', 'A']]);
        assert_eq!(DIRECTIONAL.routes('<', 'A'), vec![vec!['>', '>', '^', 'A']]);
        assert_eq!(DIRECTIONAL.routes('A', 'A'), vec![vec!['A']]);
    }

    #[test]
    fn test_single_code() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(code_presses(&shared.costs, "029A", 0), 12);
        assert_eq!(code_presses(&shared.costs, "029A", 2), 68);
    }

    #[test]
    fn test_part1() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "126384");
    }

    #[test]
    fn test_part2() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "154115708116294");
    }

    #[test]
    fn test_rejects_unknown_key() {
        assert!(Solver::parse("02B9A").is_err());
    }
}
