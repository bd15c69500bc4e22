use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, title = "Guard Gallivant", tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `true` where an obstruction stands
    blocked: Grid<bool>,
    start: Point,
    /// Cells on the unobstructed patrol route, shared by both parts
    route: Option<Vec<Point>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let chars = Grid::parse_chars(input)?;
        let start = chars
            .position(|&c| c == '^')
            .ok_or_else(|| ParseError::MissingData("no guard '^' on the map".into()))?;
        let blocked = Grid::parse_with(input, |c| match c {
            '#' => Some(true),
            '.' | '^' => Some(false),
            _ => None,
        })?;
        Ok(SharedData {
            blocked,
            start,
            route: None,
        })
    }
}

enum Patrol {
    Leaves(Grid<bool>),
    Loops,
}

fn patrol(blocked: &Grid<bool>, start: Point, extra: Option<Point>) -> Patrol {
    // Bit per direction the guard has already faced on each cell.
    let mut seen: Grid<u8> = blocked.map_fill(0);
    let mut pos = start;
    let mut dir = Direction::North;
    loop {
        let bit = 1 << dir.index();
        if seen[pos] & bit != 0 {
            return Patrol::Loops;
        }
        seen[pos] |= bit;

        let next = pos.step(dir);
        match blocked.get(next) {
            None => {
                let mut visited = blocked.map_fill(false);
                for p in seen.points() {
                    visited[p] = seen[p] != 0;
                }
                return Patrol::Leaves(visited);
            }
            Some(true) => dir = dir.turn_right(),
            Some(false) if Some(next) == extra => dir = dir.turn_right(),
            Some(false) => pos = next,
        }
    }
}

fn route(shared: &mut SharedData) -> Result<&[Point], SolveError> {
    if shared.route.is_none() {
        let visited = match patrol(&shared.blocked, shared.start, None) {
            Patrol::Leaves(visited) => visited,
            Patrol::Loops => return Err(SolveError::failed("guard never leaves the map")),
        };
        let cells = visited.iter().filter(|(_, v)| **v).map(|(p, _)| p).collect();
        shared.route = Some(cells);
    }
    Ok(shared.route.as_deref().unwrap_or_default())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(route(shared)?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let candidates = route(shared)?.to_vec();
        let loops = candidates
            .into_iter()
            .filter(|&p| p != shared.start)
            .filter(|&p| matches!(patrol(&shared.blocked, shared.start, Some(p)), Patrol::Loops))
            .count();
        Ok(loops.to_string())
    }
}
