use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

/// A single-part day borrowing straight from the input.
#[derive(AocSolver)]
#[aoc_solver(max_parts = 1)]
struct WordCount;

impl AocParser for WordCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.is_empty() {
            return Err(ParseError::MissingData("empty input".into()));
        }
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for WordCount {
    fn solve(shared: &mut Vec<&str>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct MinMax;

impl AocParser for MinMax {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split(',')
            .map(|s| s.parse().map_err(|_| ParseError::InvalidFormat(s.to_string())))
            .collect()
    }
}

impl PartSolver<1> for MinMax {
    fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
        shared
            .iter()
            .min()
            .map(i64::to_string)
            .ok_or_else(|| SolveError::failed("no numbers"))
    }
}

impl PartSolver<2> for MinMax {
    fn solve(shared: &mut Vec<i64>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(i64::to_string)
            .ok_or_else(|| SolveError::failed("no numbers"))
    }
}

#[test]
fn test_single_part_solver() {
    assert_eq!(WordCount::PARTS, 1);
    let mut shared = WordCount::parse("a b c").unwrap();
    assert_eq!(WordCount::solve_part(&mut shared, 1).unwrap(), "3");
    assert!(matches!(
        WordCount::solve_part_checked_range(&mut shared, 2),
        Err(SolveError::PartOutOfRange(2))
    ));
}

#[test]
fn test_parts_in_any_order() {
    let mut shared = MinMax::parse("4,-2,9").unwrap();
    assert_eq!(MinMax::solve_part(&mut shared, 2).unwrap(), "9");
    assert_eq!(MinMax::solve_part(&mut shared, 1).unwrap(), "-2");
}

#[test]
fn test_parse_error() {
    assert!(matches!(WordCount::parse(""), Err(ParseError::MissingData(_))));
    assert!(matches!(MinMax::parse("1,x"), Err(ParseError::InvalidFormat(s)) if s == "x"));
}
