use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::grid::Point;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, title = "Restroom Redoubt", tags = ["simulation", "math"])]
pub struct Solver;

static ROBOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$").expect("valid robot regex"));

/// Width and height of the bathroom
pub const ROOM: (i64, i64) = (101, 103);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    position: Point,
    velocity: Point,
}

impl Robot {
    fn position_after(&self, seconds: i64, (width, height): (i64, i64)) -> Point {
        let p = self.position + self.velocity * seconds;
        Point::new(p.x.rem_euclid(width), p.y.rem_euclid(height))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Robot>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(|line| {
                let caps = ROBOT
                    .captures(line)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("bad robot '{}'", line)))?;
                let n = |i: usize| {
                    caps[i]
                        .parse::<i64>()
                        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
                };
                Ok(Robot {
                    position: Point::new(n(1)?, n(2)?),
                    velocity: Point::new(n(3)?, n(4)?),
                })
            })
            .collect()
    }
}

pub fn safety_factor(robots: &[Robot], seconds: i64, room: (i64, i64)) -> u64 {
    let (mid_x, mid_y) = (room.0 / 2, room.1 / 2);
    let mut quadrants = [0u64; 4];
    for robot in robots {
        let p = robot.position_after(seconds, room);
        if p.x == mid_x || p.y == mid_y {
            continue;
        }
        let index = usize::from(p.x > mid_x) + 2 * usize::from(p.y > mid_y);
        quadrants[index] += 1;
    }
    quadrants.iter().product()
}

/// `n` times the variance of `values`, kept in integers.
fn spread(values: impl Iterator<Item = i64>) -> i64 {
    let (n, sum, squares) = values.fold((0, 0, 0), |(n, s, q), v| (n + 1, s + v, q + v * v));
    n * squares - sum * sum
}

/// Second within one period of an axis where the robots are packed tightest along it.
fn tightest(robots: &[Robot], period: i64, axis: impl Fn(Point) -> i64) -> i64 {
    let mut best = (i64::MAX, 0);
    for t in 0..period {
        let s = spread(robots.iter().map(|r| {
            let p = r.position + r.velocity * t;
            axis(p).rem_euclid(period)
        }));
        if s < best.0 {
            best = (s, t);
        }
    }
    best.1
}

fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    let (mut old_r, mut r) = (a.rem_euclid(m), m);
    let (mut old_s, mut s) = (1i64, 0i64);
    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
    }
    (old_r == 1).then(|| old_s.rem_euclid(m))
}

/// First second at which the robots cluster into a picture: the x and y
/// clusters repeat with the room's width and height, combined with the CRT.
pub fn picture_time(robots: &[Robot], (width, height): (i64, i64)) -> Option<i64> {
    let tx = tightest(robots, width, |p| p.x);
    let ty = tightest(robots, height, |p| p.y);
    let inverse = mod_inverse(width, height)?;
    Some(tx + width * ((ty - tx) * inverse).rem_euclid(height))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safety_factor(shared, 100, ROOM).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        picture_time(shared, ROOM)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::failed("room dimensions are not coprime"))
    }
}
