use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, title = "Red-Nosed Reports", tags = ["lists"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<i32>, _>>()
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, e)))
            })
            .collect()
    }
}

/// Strictly increasing or decreasing, every step between 1 and 3.
fn is_safe<'a>(levels: impl Iterator<Item = &'a i32> + Clone) -> bool {
    let steps = || levels.clone().tuple_windows().map(|(a, b)| b - a);
    steps().all(|d| (1..=3).contains(&d)) || steps().all(|d| (-3..=-1).contains(&d))
}

fn is_safe_with_dampener(report: &[i32]) -> bool {
    is_safe(report.iter())
        || (0..report.len()).any(|skip| {
            is_safe(
                report
                    .iter()
                    .enumerate()
                    .filter(move |&(i, _)| i != skip)
                    .map(|(_, v)| v),
            )
        })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|r| is_safe(r.iter())).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|r| is_safe_with_dampener(r))
            .count()
            .to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "4");
    }

    #[test]
    fn test_dampener_can_drop_first_level() {
        assert!(!is_safe([9, 1, 2, 3].iter()));
        assert!(is_safe_with_dampener(&[9, 1, 2, 3]));
    }
}
