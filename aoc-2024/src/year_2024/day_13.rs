use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, title = "Claw Contraption", tags = ["math"])]
pub struct Solver;

static MACHINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)",
    )
    .expect("valid machine regex")
});

/// Prize offset after the unit conversion fix
const PRIZE_OFFSET: i64 = 10_000_000_000_000;
/// Press limit per button in part 1
const MAX_PRESSES: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Presses of A and B reaching the prize exactly, if an integer solution exists.
    fn presses(&self, offset: i64) -> Option<(i64, i64)> {
        let (ax, ay) = self.a;
        let (bx, by) = self.b;
        let (px, py) = (self.prize.0 + offset, self.prize.1 + offset);

        let det = ax * by - ay * bx;
        if det == 0 {
            return None;
        }
        let a_num = px * by - py * bx;
        let b_num = ax * py - ay * px;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }
        let (a, b) = (a_num / det, b_num / det);
        (a >= 0 && b >= 0).then_some((a, b))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let machines: Vec<Machine> = MACHINE
            .captures_iter(input)
            .map(|caps| {
                let n = |i: usize| {
                    caps[i]
                        .parse::<i64>()
                        .map_err(|e| ParseError::InvalidFormat(format!("{}: {}", &caps[i], e)))
                };
                Ok(Machine {
                    a: (n(1)?, n(2)?),
                    b: (n(3)?, n(4)?),
                    prize: (n(5)?, n(6)?),
                })
            })
            .collect::<Result<_, ParseError>>()?;

        let blocks = input.split("\n\n").filter(|b| !b.trim().is_empty()).count();
        if machines.len() != blocks {
            return Err(ParseError::InvalidFormat(format!(
                "recognized {} of {} machine descriptions",
                machines.len(),
                blocks
            )));
        }
        Ok(machines)
    }
}

fn tokens(machines: &[Machine], offset: i64, limit: Option<i64>) -> i64 {
    machines
        .iter()
        .filter_map(|m| m.presses(offset))
        .filter(|&(a, b)| limit.is_none_or(|max| a <= max && b <= max))
        .map(|(a, b)| 3 * a + b)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tokens(shared, 0, Some(MAX_PRESSES)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(tokens(shared, PRIZE_OFFSET, None).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
Button A: X+94, Y+34
Button B: X+22, Y+67
Prize: X=8400, Y=5400

Button A: X+26, Y+66
Button B: X+67, Y+21
Prize: X=12748, Y=12176

Button A: X+17, Y+86
Button B: X+84, Y+37
Prize: X=7870, Y=6450

Button A: X+69, Y+23
Button B: X+27, Y+71
Prize: X=18641, Y=10279";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.len(), 4);
        assert_eq!(shared[0].presses(0), Some((80, 40)));
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "480");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "875318608908");
    }

    #[test]
    fn test_malformed_machine() {
        let input = "Button A: X+1, Y+2\nButton B: X+3\nPrize: X=4, Y=5";
        assert!(matches!(Solver::parse(input), Err(ParseError::InvalidFormat(_))));
    }
}
