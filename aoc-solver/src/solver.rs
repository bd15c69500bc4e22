//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses a day's puzzle input into the data shared by its parts.
///
/// The parsed value is created once per run and owned by a single solver
/// instance, so anything a part caches in it is only visible to later parts
/// of the same run.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// /// Two columns of location ids.
/// struct LocationLists;
///
/// impl AocParser for LocationLists {
///     type SharedData<'a> = (Vec<u32>, Vec<u32>);
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         let mut columns = (Vec::new(), Vec::new());
///         for line in input.lines() {
///             let mut ids = line.split_whitespace().map(str::parse::<u32>);
///             match (ids.next(), ids.next()) {
///                 (Some(Ok(left)), Some(Ok(right))) => {
///                     columns.0.push(left);
///                     columns.1.push(right);
///                 }
///                 _ => return Err(ParseError::InvalidFormat(line.to_string())),
///             }
///         }
///         Ok(columns)
///     }
/// }
///
/// let (left, right) = LocationLists::parse("3   4\n4   3").unwrap();
/// assert_eq!((left, right), (vec![3, 4], vec![4, 3]));
/// ```
pub trait AocParser {
    /// Parsed input plus any intermediate results the parts share.
    ///
    /// May borrow from the input (`&'a str`) or own its data.
    type SharedData<'a>;

    /// Parse the normalized input text.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle.
///
/// `PartSolver<1>` answers the first question and `PartSolver<2>` the second.
/// A day that only has one question simply does not implement `PartSolver<2>`.
///
/// Parts take the shared data by `&mut`, so a part may sort it in place or
/// store a result for the next part to reuse.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Distances;
///
/// impl AocParser for Distances {
///     type SharedData<'a> = Vec<(i64, i64)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 let (l, r) = line.split_once(' ').ok_or(ParseError::MissingData(line.into()))?;
///                 let id = |s: &str| s.trim().parse().map_err(|_| ParseError::InvalidFormat(s.into()));
///                 Ok((id(l)?, id(r)?))
///             })
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Distances {
///     fn solve(pairs: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(pairs.iter().map(|(l, r)| (l - r).abs()).sum::<i64>().to_string())
///     }
/// }
///
/// let mut pairs = Distances::parse("1 3\n5 2").unwrap();
/// assert_eq!(<Distances as PartSolver<1>>::solve(&mut pairs).unwrap(), "5");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete day solver: a parser plus a fixed number of parts.
///
/// Usually derived with `#[derive(AocSolver)]`, which routes `solve_part`
/// to the matching [`PartSolver`] implementation. A day whose puzzle has a
/// single question declares `PARTS = 1`; runners never ask it for part 2.
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
///
/// /// Counts lock/key pairs that do not overlap.
/// struct Fits;
///
/// impl AocParser for Fits {
///     type SharedData<'a> = Vec<u8>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .split(',')
///             .map(|mask| u8::from_str_radix(mask, 2).map_err(|e| ParseError::InvalidFormat(e.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Fits {
///     const PARTS: u8 = 1;
///
///     fn solve_part(masks: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => {
///                 let (locks, keys) = masks.split_at(1);
///                 Ok(keys.iter().filter(|&&key| key & locks[0] == 0).count().to_string())
///             }
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut masks = Fits::parse("1100,0011,0110,0001").unwrap();
/// assert_eq!(Fits::solve_part_checked_range(&mut masks, 1).unwrap(), "2");
/// assert!(Fits::solve_part_checked_range(&mut masks, 2).is_err());
/// ```
pub trait Solver: AocParser {
    /// Number of parts the puzzle has: 1 or 2
    const PARTS: u8;

    /// Answer `part`, which callers keep within `1..=PARTS`.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects parts outside `1..=PARTS`.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
