use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, title = "Garden Groups", tags = ["grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    garden: Grid<char>,
    regions: Option<Vec<Region>>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Region {
    area: u64,
    perimeter: u64,
    /// Equal to the number of straight sides
    corners: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            garden: Grid::parse_chars(input)?,
            regions: None,
        })
    }
}

fn corners_at(garden: &Grid<char>, p: Point) -> u64 {
    let plant = garden.get(p);
    let same = |q: Point| garden.get(q) == plant;
    Direction::ALL
        .iter()
        .filter(|&&d1| {
            let d2 = d1.turn_right();
            let (a, b) = (same(p.step(d1)), same(p.step(d2)));
            let diagonal = same(p.step(d1).step(d2));
            (!a && !b) || (a && b && !diagonal)
        })
        .count() as u64
}

fn regions(shared: &mut SharedData) -> &[Region] {
    let garden = &shared.garden;
    shared.regions.get_or_insert_with(|| {
        let mut seen = garden.map_fill(false);
        let mut regions = Vec::new();
        for start in garden.points() {
            if seen[start] {
                continue;
            }
            seen[start] = true;
            let plant = garden[start];
            let mut region = Region::default();
            let mut stack = vec![start];
            while let Some(p) = stack.pop() {
                region.area += 1;
                region.corners += corners_at(garden, p);
                for n in p.neighbors() {
                    if garden.get(n) != Some(&plant) {
                        region.perimeter += 1;
                    } else if !seen[n] {
                        seen[n] = true;
                        stack.push(n);
                    }
                }
            }
            regions.push(region);
        }
        regions
    })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions(shared).iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions(shared).iter().map(|r| r.area * r.corners).sum();
        Ok(price.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn both(input: &str) -> (String, String) {
        let mut shared = Solver::parse(input).unwrap();
        (
            Solver::solve_part(&mut shared, 1).unwrap(),
            Solver::solve_part(&mut shared, 2).unwrap(),
        )
    }

    #[test]
    fn test_small_sample() {
        let (p1, p2) = both("AAAA\nBBCD\nBBCC\nEEEC");
        assert_eq!(p1, "140");
        assert_eq!(p2, "80");
    }

    #[test]
    fn test_nested_regions() {
        let (p1, p2) = both("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO");
        assert_eq!(p1, "772");
        assert_eq!(p2, "436");
    }

    #[test]
    fn test_large_sample() {
        let input = "\
RRRRIICCFF
RRRRIICCCF
VVRRRCCFFF
VVRCCCJFFF
VVVVCJJCFE
VVIVCCJJEE
VVIIICJJEE
MIIIIIJJEE
MIIISIJEEE
MMMISSJEEE";
        let (p1, p2) = both(input);
        assert_eq!(p1, "1930");
        assert_eq!(p2, "1206");
    }

    #[test]
    fn test_sides_e_shape() {
        let (_, p2) = both("EEEEE\nEXXXX\nEEEEE\nEXXXX\nEEEEE");
        assert_eq!(p2, "236");
    }

    #[test]
    fn test_sides_diagonal_touch() {
        let (_, p2) = both("AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA");
        assert_eq!(p2, "368");
    }
}
