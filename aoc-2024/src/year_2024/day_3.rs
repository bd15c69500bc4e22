use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, title = "Mull It Over", tags = ["regex"])]
pub struct Solver;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("valid instruction regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u64, u64),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        INSTRUCTION
            .captures_iter(input)
            .map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(a), Some(b)) => {
                    let parse = |m: regex::Match| {
                        m.as_str()
                            .parse()
                            .map_err(|_| ParseError::InvalidFormat(m.as_str().to_string()))
                    };
                    Ok(Instruction::Mul(parse(a)?, parse(b)?))
                }
                _ if caps[0].starts_with("don't") => Ok(Instruction::Dont),
                _ => Ok(Instruction::Do),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|ins| match ins {
                Instruction::Mul(a, b) => a * b,
                _ => 0,
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (total, _) = shared
            .iter()
            .fold((0u64, true), |(total, enabled), ins| match ins {
                Instruction::Do => (total, true),
                Instruction::Dont => (total, false),
                Instruction::Mul(a, b) if enabled => (total + a * b, enabled),
                Instruction::Mul(..) => (total, enabled),
            });
        Ok(total.to_string())
    }
}
