use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, title = "Bridge Repair", tags = ["search"])]
pub struct Solver;

#[derive(Debug, Clone)]
pub struct Equation {
    target: u64,
    numbers: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(|line| -> anyhow::Result<Equation> {
                let (target, numbers) = line
                    .split_once(':')
                    .ok_or_else(|| anyhow!("missing ':'"))?;
                let numbers = numbers
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<u64>, _>>()?;
                if numbers.is_empty() {
                    return Err(anyhow!("no operands"));
                }
                Ok(Equation {
                    target: target.trim().parse()?,
                    numbers,
                })
            })
            .enumerate()
            .map(|(idx, eq)| eq.with_context(|| format!("line {}", idx + 1)))
            .collect::<anyhow::Result<_>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

/// Remove the decimal digits of `suffix` from the end of `value`, if they match.
fn strip_digits(value: u64, suffix: u64) -> Option<u64> {
    let mut pow = 10;
    while pow <= suffix {
        pow *= 10;
    }
    (value % pow == suffix).then_some(value / pow)
}

/// Works backwards from the target: operators are applied left to right, so
/// the last operand is always the last operation's right-hand side.
fn solvable(target: u64, numbers: &[u64], concat: bool) -> bool {
    match numbers {
        [] => false,
        [first] => *first == target,
        [rest @ .., last] => {
            (target >= *last && solvable(target - last, rest, concat))
                || (*last == 0 && target == 0)
                || (*last != 0 && target % last == 0 && solvable(target / last, rest, concat))
                || (concat
                    && strip_digits(target, *last).is_some_and(|t| solvable(t, rest, concat)))
        }
    }
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .iter()
        .filter(|eq| solvable(eq.target, &eq.numbers, concat))
        .map(|eq| eq.target)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "3749");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "11387");
    }

    #[test]
    fn test_strip_digits() {
        assert_eq!(strip_digits(156, 6), Some(15));
        assert_eq!(strip_digits(1510, 10), Some(15));
        assert_eq!(strip_digits(150, 0), Some(15));
        assert_eq!(strip_digits(156, 5), None);
    }

    #[test]
    fn test_trailing_zero_operand() {
        assert!(solvable(0, &[5, 0], false));
        assert!(solvable(0, &[7, 3, 0], false));
        assert!(solvable(5, &[5, 0], false));
        assert!(!solvable(3, &[5, 0], false));
        assert!(solvable(50, &[5, 0], true));
    }
}
