use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 25, title = "Code Chronicle", tags = ["bitmask"])]
pub struct Solver;

const WIDTH: usize = 5;
const HEIGHT: usize = 7;

/// Filled cells of each schematic, one bit per cell.
#[derive(Debug, Default)]
pub struct Schematics {
    locks: Vec<u64>,
    keys: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Schematics;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut schematics = Schematics::default();
        for (n, block) in input.split("\n\n").filter(|b| !b.trim().is_empty()).enumerate() {
            let rows: Vec<&str> = block.lines().collect();
            if rows.len() != HEIGHT || rows.iter().any(|r| r.len() != WIDTH) {
                return Err(ParseError::InvalidFormat(format!(
                    "schematic {} is not {}x{}",
                    n + 1,
                    WIDTH,
                    HEIGHT
                )));
            }
            let mut cells = 0u64;
            for (i, c) in rows.iter().flat_map(|r| r.chars()).enumerate() {
                match c {
                    '#' => cells |= 1 << i,
                    '.' => {}
                    other => {
                        return Err(ParseError::InvalidFormat(format!(
                            "unexpected '{}' in schematic {}",
                            other,
                            n + 1
                        )));
                    }
                }
            }
            let top = (1u64 << WIDTH) - 1;
            let bottom = top << (WIDTH * (HEIGHT - 1));
            match (cells & top == top, cells & bottom == bottom) {
                (true, false) => schematics.locks.push(cells),
                (false, true) => schematics.keys.push(cells),
                _ => {
                    return Err(ParseError::InvalidFormat(format!(
                        "schematic {} is neither a lock nor a key",
                        n + 1
                    )));
                }
            }
        }
        Ok(schematics)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let fitting = shared
            .locks
            .iter()
            .flat_map(|lock| shared.keys.iter().map(move |key| lock & key))
            .filter(|&overlap| overlap == 0)
            .count();
        Ok(fitting.to_string())
    }
}
