use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, title = "Resonant Collinearity", tags = ["grid", "geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    map: Grid<char>,
    antennas: HashMap<char, Vec<Point>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse_with(input, |c| (c == '.' || c.is_ascii_alphanumeric()).then_some(c))?;
        let antennas = map
            .iter()
            .filter(|&(_, &c)| c != '.')
            .map(|(p, &c)| (c, p))
            .into_group_map();
        Ok(SharedData { map, antennas })
    }
}

fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

fn count_antinodes<F>(shared: &SharedData, mut antinodes: F) -> usize
where
    F: FnMut(Point, Point, &mut dyn FnMut(Point)),
{
    let mut found = HashSet::new();
    for positions in shared.antennas.values() {
        for (&a, &b) in positions.iter().tuple_combinations() {
            let mut mark = |p: Point| {
                if shared.map.contains(p) {
                    found.insert(p);
                }
            };
            antinodes(a, b, &mut mark);
            antinodes(b, a, &mut mark);
        }
    }
    found.len()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = count_antinodes(shared, |a, b, mark| mark(a + (a - b)));
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (width, height) = (shared.map.width() as i64, shared.map.height() as i64);
        let count = count_antinodes(shared, |a, b, mark| {
            let delta = a - b;
            let g = gcd(delta.x, delta.y);
            let step = Point::new(delta.x / g, delta.y / g);
            let inside = |p: Point| (0..width).contains(&p.x) && (0..height).contains(&p.y);
            for dir in [step, step * -1] {
                let mut p = a;
                while inside(p) {
                    mark(p);
                    p = p + dir;
                }
            }
        });
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "34");
    }

    #[test]
    fn test_t_frequency_example() {
        let input = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }
}
