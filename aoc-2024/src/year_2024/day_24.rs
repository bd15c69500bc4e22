use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 24, title = "Crossed Wires", tags = ["circuit", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
    Xor,
}

impl Op {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Op::And => a && b,
            Op::Or => a || b,
            Op::Xor => a ^ b,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Gate<'a> {
    a: &'a str,
    op: Op,
    b: &'a str,
    out: &'a str,
}

#[derive(Debug)]
pub struct Circuit<'a> {
    initial: HashMap<&'a str, bool>,
    gates: Vec<Gate<'a>>,
    /// Output wire to the index of the gate driving it.
    drivers: HashMap<&'a str, usize>,
}

fn parse_gate(line: &str) -> anyhow::Result<Gate<'_>> {
    let (a, op, b, arrow, out) = line
        .split_whitespace()
        .collect_tuple()
        .ok_or_else(|| anyhow::anyhow!("expected 'a OP b -> out', got '{}'", line))?;
    anyhow::ensure!(arrow == "->", "missing '->' in '{}'", line);
    let op = match op {
        "AND" => Op::And,
        "OR" => Op::Or,
        "XOR" => Op::Xor,
        other => anyhow::bail!("unknown gate '{}'", other),
    };
    Ok(Gate { a, op, b, out })
}

impl AocParser for Solver {
    type SharedData<'a> = Circuit<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let parse = || -> anyhow::Result<Circuit<'a>> {
            let (values, wiring) = input
                .split_once("\n\n")
                .ok_or_else(|| anyhow::anyhow!("missing blank line between wires and gates"))?;

            let initial = values
                .lines()
                .map(|line| -> anyhow::Result<(&'a str, bool)> {
                    let (wire, bit) = line
                        .split_once(": ")
                        .ok_or_else(|| anyhow::anyhow!("bad wire value '{}'", line))?;
                    match bit {
                        "0" => Ok((wire, false)),
                        "1" => Ok((wire, true)),
                        _ => anyhow::bail!("wire '{}' has non-binary value '{}'", wire, bit),
                    }
                })
                .collect::<anyhow::Result<HashMap<_, _>>>()?;

            let gates = wiring
                .lines()
                .filter(|line| !line.is_empty())
                .map(parse_gate)
                .collect::<anyhow::Result<Vec<_>>>()?;

            let mut drivers = HashMap::with_capacity(gates.len());
            for (i, gate) in gates.iter().enumerate() {
                anyhow::ensure!(
                    drivers.insert(gate.out, i).is_none() && !initial.contains_key(gate.out),
                    "wire '{}' has more than one source",
                    gate.out
                );
            }
            Ok(Circuit { initial, gates, drivers })
        };
        parse().map_err(|e| ParseError::InvalidFormat(format!("{:#}", e)))
    }
}

impl<'a> Circuit<'a> {
    fn value(
        &self,
        wire: &'a str,
        known: &mut HashMap<&'a str, bool>,
        visiting: &mut HashSet<&'a str>,
    ) -> Result<bool, SolveError> {
        if let Some(&bit) = self.initial.get(wire).or_else(|| known.get(wire)) {
            return Ok(bit);
        }
        let gate = self
            .drivers
            .get(wire)
            .map(|&i| self.gates[i])
            .ok_or_else(|| SolveError::failed(format!("wire '{}' is never driven", wire)))?;
        if !visiting.insert(wire) {
            return Err(SolveError::failed(format!("wire '{}' depends on itself", wire)));
        }
        let a = self.value(gate.a, known, visiting)?;
        let b = self.value(gate.b, known, visiting)?;
        visiting.remove(wire);

        let bit = gate.op.apply(a, b);
        known.insert(wire, bit);
        Ok(bit)
    }

    /// Number formed by the `z` wires, `z00` being the least significant bit.
    pub fn output(&self) -> Result<u64, SolveError> {
        let mut known = HashMap::new();
        let mut visiting = HashSet::new();
        let z_wires: Vec<&'a str> = self
            .drivers
            .keys()
            .chain(self.initial.keys())
            .copied()
            .filter(|w| w.starts_with('z'))
            .sorted_unstable()
            .rev()
            .collect();
        if z_wires.len() > 64 {
            return Err(SolveError::failed(format!("{} output bits do not fit in 64", z_wires.len())));
        }
        z_wires.into_iter().try_fold(0u64, |acc, wire| {
            Ok((acc << 1) | self.value(wire, &mut known, &mut visiting)? as u64)
        })
    }

    fn feeds(&self, wire: &str, op: Op) -> bool {
        self.gates
            .iter()
            .any(|g| g.op == op && (g.a == wire || g.b == wire))
    }

    /// Gate outputs that break the ripple-carry adder pattern.
    pub fn misplaced_outputs(&self) -> Vec<&'a str> {
        let is_input = |w: &str| w.starts_with('x') || w.starts_with('y');
        let is_first_bit = |w: &str| matches!(w, "x00" | "y00");
        let highest_z = self.drivers.keys().copied().filter(|w| w.starts_with('z')).max();

        self.gates
            .iter()
            .filter(|g| {
                let to_z = g.out.starts_with('z');
                let inputs_xy = is_input(g.a) && is_input(g.b);
                let first_bit = is_first_bit(g.a) || is_first_bit(g.b);
                match g.op {
                    // Every sum bit except the final carry comes from an XOR.
                    _ if to_z && g.op != Op::Xor => Some(g.out) != highest_z,
                    Op::Xor if !inputs_xy => !to_z,
                    Op::Xor => !first_bit && !self.feeds(g.out, Op::Xor),
                    Op::And => !first_bit && !self.feeds(g.out, Op::Or),
                    Op::Or => false,
                }
            })
            .map(|g| g.out)
            .sorted_unstable()
            .dedup()
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.output()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.misplaced_outputs().join(","))
    }
}
