use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, title = "Hoof It", tags = ["grid", "graph"])]
pub struct Solver;

/// Impassable tiles (`.`) in hand-drawn maps.
const NO_HEIGHT: u8 = u8::MAX;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_with(input, |c| match c {
            '.' => Some(NO_HEIGHT),
            _ => c.to_digit(10).map(|d| d as u8),
        })
    }
}

fn uphill(map: &Grid<u8>, p: Point) -> impl Iterator<Item = Point> + '_ {
    let next = map[p].wrapping_add(1);
    p.neighbors()
        .into_iter()
        .filter(move |&n| map.get(n) == Some(&next))
}

fn trailheads(map: &Grid<u8>) -> impl Iterator<Item = Point> + '_ {
    map.iter().filter(|(_, h)| **h == 0).map(|(p, _)| p)
}

fn score(map: &Grid<u8>, head: Point) -> usize {
    let mut seen = HashSet::from([head]);
    let mut stack = vec![head];
    let mut peaks = 0;
    while let Some(p) = stack.pop() {
        if map[p] == 9 {
            peaks += 1;
            continue;
        }
        for n in uphill(map, p) {
            if seen.insert(n) {
                stack.push(n);
            }
        }
    }
    peaks
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &*shared;
        let total: usize = trailheads(map).map(|head| score(map, head)).sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map = &*shared;
        // Number of distinct trails from each cell to any 9, filled from the top down.
        let mut trails: Grid<u64> = map.map_fill(0);
        for height in (0..=9).rev() {
            for (p, &h) in map.iter() {
                if h == height {
                    trails[p] = if h == 9 {
                        1
                    } else {
                        uphill(map, p).map(|n| trails[n]).sum()
                    };
                }
            }
        }
        let total: u64 = trailheads(map).map(|head| trails[head]).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "36");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "81");
    }

    #[test]
    fn test_map_with_impassable_tiles() {
        let input = "\
...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
    }
}
