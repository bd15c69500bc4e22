use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 23, title = "LAN Party", tags = ["graph", "clique"])]
pub struct Solver;

pub type Network<'a> = HashMap<&'a str, HashSet<&'a str>>;

impl AocParser for Solver {
    type SharedData<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut network = Network::new();
        for line in input.lines().filter(|line| !line.is_empty()) {
            let (a, b) = line
                .split_once('-')
                .filter(|(a, b)| !a.is_empty() && !b.is_empty() && a != b)
                .ok_or_else(|| ParseError::InvalidFormat(format!("bad connection '{}'", line)))?;
            network.entry(a).or_default().insert(b);
            network.entry(b).or_default().insert(a);
        }
        Ok(network)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let network = &*shared;
        let mut count = 0;
        for (&a, links) in network {
            for &b in links.iter().filter(|&&b| a < b) {
                count += links
                    .intersection(&network[b])
                    .filter(|&&c| b < c)
                    .filter(|&&c| [a, b, c].iter().any(|name| name.starts_with('t')))
                    .count();
            }
        }
        Ok(count.to_string())
    }
}

/// Bron–Kerbosch with pivoting; keeps the largest clique seen in `best`.
fn largest_clique<'a>(
    network: &Network<'a>,
    clique: &mut Vec<&'a str>,
    mut candidates: HashSet<&'a str>,
    mut excluded: HashSet<&'a str>,
    best: &mut Vec<&'a str>,
) {
    let Some(pivot) = candidates
        .union(&excluded)
        .max_by_key(|&&u| candidates.intersection(&network[u]).count())
        .copied()
    else {
        if clique.len() > best.len() {
            *best = clique.clone();
        }
        return;
    };

    let branches: Vec<&str> = candidates.difference(&network[pivot]).copied().collect();
    for v in branches {
        let links = &network[v];
        clique.push(v);
        largest_clique(
            network,
            clique,
            candidates.intersection(links).copied().collect(),
            excluded.intersection(links).copied().collect(),
            best,
        );
        clique.pop();
        candidates.remove(v);
        excluded.insert(v);
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let network = &*shared;
        let mut best = Vec::new();
        largest_clique(
            network,
            &mut Vec::new(),
            network.keys().copied().collect(),
            HashSet::new(),
            &mut best,
        );
        Ok(best.into_iter().sorted().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn";

    #[test]
    fn test_part1() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "7");
    }

    #[test]
    fn test_part2() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "co,de,ka,ta");
    }

    #[test]
    fn test_rejects_self_loop() {
        assert!(Solver::parse("ab-ab").is_err());
    }
}
