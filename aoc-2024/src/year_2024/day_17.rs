use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 17, title = "Chronospatial Computer", tags = ["vm", "reverse-engineering"])]
pub struct Solver;

/// Upper bound on executed instructions before a run is declared stuck
const STEP_LIMIT: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    registers: [u64; 3],
    program: Vec<u8>,
}

impl Computer {
    fn combo(&self, operand: u8) -> anyhow::Result<u64> {
        match operand {
            0..=3 => Ok(operand as u64),
            4..=6 => Ok(self.registers[operand as usize - 4]),
            _ => bail!("combo operand {} is reserved", operand),
        }
    }

    /// Run the program with register A set to `a`, collecting its output.
    fn run(&self, a: u64) -> anyhow::Result<Vec<u8>> {
        let mut cpu = self.clone();
        cpu.registers[0] = a;
        let mut output = Vec::new();
        let mut ip = 0;
        for _ in 0..STEP_LIMIT {
            let (Some(&opcode), Some(&operand)) = (cpu.program.get(ip), cpu.program.get(ip + 1)) else {
                return Ok(output);
            };
            let shifted = |cpu: &Computer| -> anyhow::Result<u64> {
                let amount = cpu.combo(operand)?;
                Ok(u32::try_from(amount)
                    .ok()
                    .and_then(|s| cpu.registers[0].checked_shr(s))
                    .unwrap_or(0))
            };
            ip += 2;
            match opcode {
                0 => cpu.registers[0] = shifted(&cpu)?,
                1 => cpu.registers[1] ^= operand as u64,
                2 => cpu.registers[1] = cpu.combo(operand)? % 8,
                3 if cpu.registers[0] != 0 => ip = operand as usize,
                3 => {}
                4 => cpu.registers[1] ^= cpu.registers[2],
                5 => output.push((cpu.combo(operand)? % 8) as u8),
                6 => cpu.registers[1] = shifted(&cpu)?,
                7 => cpu.registers[2] = shifted(&cpu)?,
                _ => bail!("invalid opcode {}", opcode),
            }
        }
        bail!("program did not halt within {} instructions", STEP_LIMIT)
    }
}

fn parse_computer(input: &str) -> anyhow::Result<Computer> {
    let (registers, program) = input
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("missing blank line before the program"))?;
    let registers: Vec<u64> = registers
        .lines()
        .map(|line| -> anyhow::Result<u64> {
            let (_, value) = line.split_once(':').ok_or_else(|| anyhow!("bad register line '{}'", line))?;
            value.trim().parse().with_context(|| format!("register line '{}'", line))
        })
        .collect::<anyhow::Result<_>>()?;
    let registers: [u64; 3] = registers
        .try_into()
        .map_err(|v: Vec<u64>| anyhow!("expected 3 registers, found {}", v.len()))?;
    let program = program
        .trim()
        .strip_prefix("Program:")
        .ok_or_else(|| anyhow!("missing 'Program:'"))?
        .trim()
        .split(',')
        .map(|n| match n.parse::<u8>() {
            Ok(v) if v < 8 => Ok(v),
            _ => Err(anyhow!("'{}' is not a 3-bit number", n)),
        })
        .collect::<anyhow::Result<_>>()?;
    Ok(Computer { registers, program })
}

impl AocParser for Solver {
    type SharedData<'a> = Computer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_computer(input).map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

/// Lowest A that makes the program print itself.
///
/// The program consumes A three bits per output, so A is rebuilt from its
/// most significant octal digit down, keeping every prefix whose output
/// matches the tail of the program.
fn quine_seed(computer: &Computer) -> anyhow::Result<Option<u64>> {
    let program = &computer.program;
    let mut candidates = vec![0u64];
    for step in (0..program.len()).rev() {
        let mut next = Vec::new();
        for &prefix in &candidates {
            for digit in 0..8 {
                let a = prefix * 8 + digit;
                if computer.run(a)? == program[step..] {
                    next.push(a);
                }
            }
        }
        candidates = next;
    }
    Ok(candidates.into_iter().filter(|&a| a != 0).min())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let a = shared.registers[0];
        let output = shared.run(a).map_err(|e| SolveError::failed(e.to_string()))?;
        Ok(output.iter().join(","))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        quine_seed(shared)
            .map_err(|e| SolveError::failed(e.to_string()))?
            .map(|a| a.to_string())
            .ok_or_else(|| SolveError::failed("no register value reproduces the program"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    fn computer(a: u64, b: u64, c: u64, program: &str) -> Computer {
        Solver::parse(&format!(
            "Register A: {}\nRegister B: {}\nRegister C: {}\n\nProgram: {}",
            a, b, c, program
        ))
        .unwrap()
    }

    #[test]
    fn test_sample_output() {
        let mut shared = computer(729, 0, 0, "0,1,5,4,3,0");
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4,6,3,5,6,3,5,2,1,0");
    }

    #[test]
    fn test_small_programs() {
        assert_eq!(computer(10, 0, 0, "5,0,5,1,5,4").run(10).unwrap(), vec![0, 1, 2]);
        assert_eq!(
            computer(2024, 0, 0, "0,1,5,4,3,0").run(2024).unwrap(),
            vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]
        );
    }

    #[test]
    fn test_quine() {
        let mut shared = computer(2024, 0, 0, "0,3,5,4,3,0");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "117440");
        assert_eq!(shared.run(117440).unwrap(), shared.program);
    }

    #[test]
    fn test_reserved_operand() {
        let shared = computer(1, 0, 0, "5,7");
        assert!(shared.run(1).is_err());
    }
}
