//! Property-based tests for part bounds and part dispatch

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS that echoes the part it was asked for
struct EchoSolver<const N: u8>;

impl<const N: u8> AocParser for EchoSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for EchoSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut (), part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(parts: u8, part: u8) -> Result<String, SolveError> {
    match parts {
        1 => EchoSolver::<1>::solve_part_checked_range(&mut (), part),
        _ => EchoSolver::<2>::solve_part_checked_range(&mut (), part),
    }
}

/// Derived two-part solver over a list of integers
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct SumProduct;

impl AocParser for SumProduct {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
            .collect()
    }
}

impl PartSolver<1> for SumProduct {
    fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for SumProduct {
    fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i64>().to_string())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// **Property 1: Out-of-range rejection**
    /// Part 0 and parts above PARTS are rejected with `PartOutOfRange(part)`;
    /// everything in between reaches the solver.
    #[test]
    fn prop_out_of_range_rejection(parts in 1u8..=2, part in 0u8..=255) {
        let result = checked(parts, part);
        if part == 0 || part > parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// **Property 2: Part dispatch**
    /// The derived `solve_part(N)` gives the same answer as `PartSolver<N>`.
    #[test]
    fn prop_derived_dispatch(numbers in prop::collection::vec(-9i64..10, 1..6), part in 1u8..=2) {
        let input = numbers.iter().map(i64::to_string).collect::<Vec<_>>().join("\n");
        let mut via_dispatch = SumProduct::parse(&input).unwrap();
        let mut direct = SumProduct::parse(&input).unwrap();

        let expected = match part {
            1 => <SumProduct as PartSolver<1>>::solve(&mut direct),
            _ => <SumProduct as PartSolver<2>>::solve(&mut direct),
        };
        prop_assert_eq!(SumProduct::solve_part(&mut via_dispatch, part).unwrap(), expected.unwrap());
    }

    /// **Property 3: Undeclared parts are not implemented**
    #[test]
    fn prop_undeclared_part(part in prop_oneof![Just(0u8), 3u8..=255]) {
        let mut shared = SumProduct::parse("1").unwrap();
        match SumProduct::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "Expected PartNotImplemented, got {:?}", other),
        }
    }
}

#[test]
fn test_single_part_solver_has_no_part_two() {
    assert_eq!(EchoSolver::<1>::PARTS, 1);
    assert!(matches!(checked(1, 2), Err(SolveError::PartOutOfRange(2))));
    assert_eq!(checked(1, 1).unwrap(), "part1");
}
