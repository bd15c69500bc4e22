use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, title = "Ceres Search", tags = ["grid"])]
pub struct Solver;

const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
];

impl AocParser for Solver {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_chars(input)
    }
}

fn reads(grid: &Grid<char>, start: Point, step: Point, word: &str) -> bool {
    word.chars()
        .enumerate()
        .all(|(i, c)| grid.get(start + step * i as i64) == Some(&c))
}

fn is_mas_diagonal(grid: &Grid<char>, a: Point, b: Point) -> bool {
    matches!(
        (grid.get(a), grid.get(b)),
        (Some('M'), Some('S')) | (Some('S'), Some('M'))
    )
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &*shared;
        let count = grid
            .points()
            .filter(|&p| grid[p] == 'X')
            .map(|p| {
                DIRECTIONS
                    .iter()
                    .filter(|&&d| reads(grid, p, d, "XMAS"))
                    .count()
            })
            .sum::<usize>();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &*shared;
        let count = grid
            .points()
            .filter(|&p| grid[p] == 'A')
            .filter(|&p| {
                is_mas_diagonal(grid, p + Point::new(-1, -1), p + Point::new(1, 1))
                    && is_mas_diagonal(grid, p + Point::new(1, -1), p + Point::new(-1, 1))
            })
            .count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "18");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }
}
