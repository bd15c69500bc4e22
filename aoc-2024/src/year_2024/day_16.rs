use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, title = "Reindeer Maze", tags = ["grid", "dijkstra"])]
pub struct Solver;

const STEP_COST: u64 = 1;
const TURN_COST: u64 = 1000;

#[derive(Debug)]
pub struct SharedData {
    walls: Grid<bool>,
    start: Point,
    end: Point,
    common_result: Option<CommonResult>,
}

#[derive(Debug, Clone, Copy)]
pub struct CommonResult {
    lowest_score: u64,
    best_path_tiles: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let maze = Grid::parse_with(input, |c| matches!(c, '#' | '.' | 'S' | 'E').then_some(c))?;
        let find = |tile: char| {
            maze.position(|&c| c == tile)
                .ok_or_else(|| ParseError::MissingData(format!("no '{}' tile", tile)))
        };
        let (start, end) = (find('S')?, find('E')?);
        let walls = Grid::parse_with(input, |c| Some(c == '#'))?;
        Ok(SharedData {
            walls,
            start,
            end,
            common_result: None,
        })
    }
}

/// Lowest cost to reach every (tile, facing) state from the `sources`.
///
/// With `reverse` set, moves are walked backwards, giving the lowest cost
/// from each state to any of the sources.
fn dijkstra(walls: &Grid<bool>, sources: &[(Point, Direction)], reverse: bool) -> Vec<u64> {
    let index = |p: Point, d: Direction| (p.y as usize * walls.width() + p.x as usize) * 4 + d.index();
    let mut dist = vec![u64::MAX; walls.width() * walls.height() * 4];
    let mut heap = BinaryHeap::new();
    for &(p, d) in sources {
        dist[index(p, d)] = 0;
        heap.push(Reverse((0, p, d)));
    }

    while let Some(Reverse((cost, p, d))) = heap.pop() {
        if cost > dist[index(p, d)] {
            continue;
        }
        let ahead = if reverse { p.step(d.reverse()) } else { p.step(d) };
        let moves = [
            (ahead, d, STEP_COST),
            (p, d.turn_left(), TURN_COST),
            (p, d.turn_right(), TURN_COST),
        ];
        for (q, qd, extra) in moves {
            if walls.get(q) != Some(&false) {
                continue;
            }
            let next = cost + extra;
            let slot = &mut dist[index(q, qd)];
            if next < *slot {
                *slot = next;
                heap.push(Reverse((next, q, qd)));
            }
        }
    }
    dist
}

fn common_result(shared: &mut SharedData) -> Result<CommonResult, SolveError> {
    if let Some(result) = shared.common_result {
        return Ok(result);
    }
    let walls = &shared.walls;
    let from_start = dijkstra(walls, &[(shared.start, Direction::East)], false);
    let ends: Vec<_> = Direction::ALL.iter().map(|&d| (shared.end, d)).collect();
    let to_end = dijkstra(walls, &ends, true);

    let state = |p: Point, d: Direction| (p.y as usize * walls.width() + p.x as usize) * 4 + d.index();
    let lowest_score = Direction::ALL
        .iter()
        .map(|&d| from_start[state(shared.end, d)])
        .min()
        .filter(|&score| score != u64::MAX)
        .ok_or_else(|| SolveError::failed("the end tile is unreachable"))?;

    let best_path_tiles = walls
        .iter()
        .filter(|(_, wall)| !**wall)
        .filter(|&(p, _)| {
            Direction::ALL.iter().any(|&d| {
                let (a, b) = (from_start[state(p, d)], to_end[state(p, d)]);
                a != u64::MAX && b != u64::MAX && a + b == lowest_score
            })
        })
        .count();

    let result = CommonResult {
        lowest_score,
        best_path_tiles,
    };
    shared.common_result = Some(result);
    Ok(result)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(common_result(shared)?.lowest_score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(common_result(shared)?.best_path_tiles.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const FIRST: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################";

    #[test]
    fn test_first_sample() {
        let mut shared = Solver::parse(FIRST).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7036");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "45");
    }

    #[test]
    fn test_second_sample() {
        let mut shared = Solver::parse(SECOND).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "64");
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11048");
    }
}
