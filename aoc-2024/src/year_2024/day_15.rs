use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, title = "Warehouse Woes", tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    warehouse: Grid<char>,
    moves: Vec<Direction>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (map, moves) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no blank line before the moves".into()))?;
        let warehouse = Grid::parse_with(map, |c| matches!(c, '#' | '.' | 'O' | '@').then_some(c))?;
        if warehouse.position(|&c| c == '@').is_none() {
            return Err(ParseError::MissingData("no robot '@' in the warehouse".into()));
        }
        let moves = moves
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Direction::from_arrow(c)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("unknown move '{}'", c)))
            })
            .collect::<Result<_, _>>()?;
        Ok(SharedData { warehouse, moves })
    }
}

/// Doubles every tile horizontally; boxes become `[]`.
fn widen(warehouse: &Grid<char>) -> Grid<char> {
    let mut wide = Grid::new(warehouse.width() * 2, warehouse.height(), '.');
    for (p, &c) in warehouse.iter() {
        let (left, right) = match c {
            '#' => ('#', '#'),
            'O' => ('[', ']'),
            '@' => ('@', '.'),
            _ => ('.', '.'),
        };
        wide[Point::new(p.x * 2, p.y)] = left;
        wide[Point::new(p.x * 2 + 1, p.y)] = right;
    }
    wide
}

/// Tiles that move if the robot at `robot` steps in `dir`, or `None` if a wall stops it.
fn pushed(warehouse: &Grid<char>, robot: Point, dir: Direction) -> Option<Vec<Point>> {
    let vertical = matches!(dir, Direction::North | Direction::South);
    let mut moving = vec![robot];
    let mut seen = HashSet::from([robot]);
    let mut i = 0;
    while let Some(&p) = moving.get(i) {
        i += 1;
        let next = p.step(dir);
        let mut follow = |q: Point| {
            if seen.insert(q) {
                moving.push(q);
            }
        };
        match warehouse.get(next) {
            Some('#') | None => return None,
            Some('O') => follow(next),
            Some('[') => {
                follow(next);
                if vertical {
                    follow(next.step(Direction::East));
                }
            }
            Some(']') => {
                follow(next);
                if vertical {
                    follow(next.step(Direction::West));
                }
            }
            _ => {}
        }
    }
    Some(moving)
}

fn run(mut warehouse: Grid<char>, moves: &[Direction]) -> Result<u64, SolveError> {
    let mut robot = warehouse
        .position(|&c| c == '@')
        .ok_or_else(|| SolveError::failed("robot vanished"))?;
    for &dir in moves {
        let Some(moving) = pushed(&warehouse, robot, dir) else {
            continue;
        };
        let tiles: Vec<(Point, char)> = moving.iter().map(|&p| (p, warehouse[p])).collect();
        for &(p, _) in &tiles {
            warehouse[p] = '.';
        }
        for (p, c) in tiles {
            warehouse[p.step(dir)] = c;
        }
        robot = robot.step(dir);
    }
    Ok(warehouse
        .iter()
        .filter(|(_, c)| matches!(c, 'O' | '['))
        .map(|(p, _)| (100 * p.y + p.x) as u64)
        .sum())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(shared.warehouse.clone(), &shared.moves)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(widen(&shared.warehouse), &shared.moves)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<";

    #[test]
    fn test_small_sample() {
        let mut shared = Solver::parse(SMALL).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2028");
    }

    #[test]
    fn test_wide_boxes_push_as_a_unit() {
        let input = "\
#######
#...#.#
#.....#
#..OO@#
#..O..#
#.....#
#######

<vv<<^^<<^^";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "618");
    }
}
