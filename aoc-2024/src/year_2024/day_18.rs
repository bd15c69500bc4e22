use std::collections::VecDeque;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, title = "RAM Run", tags = ["grid", "bfs", "binary-search"])]
pub struct Solver;

/// Memory space is `SIZE` x `SIZE`
pub const SIZE: usize = 71;
/// Bytes fallen before part 1 looks for a path
pub const FALLEN: usize = 1024;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(|line| {
                let bad = || ParseError::InvalidFormat(format!("bad coordinate '{}'", line));
                let (x, y) = line.split_once(',').ok_or_else(bad)?;
                let x = x.trim().parse().map_err(|_| bad())?;
                let y = y.trim().parse().map_err(|_| bad())?;
                Ok(Point::new(x, y))
            })
            .collect()
    }
}

/// Memory space where every cell holds the index of the byte that corrupts it.
pub struct FallTimes(Grid<usize>);

impl FallTimes {
    pub fn new(bytes: &[Point], size: usize) -> Result<Self, SolveError> {
        let mut grid = Grid::new(size, size, usize::MAX);
        for (i, &p) in bytes.iter().enumerate() {
            let cell = grid
                .get_mut(p)
                .ok_or_else(|| SolveError::failed(format!("byte {},{} falls outside memory", p.x, p.y)))?;
            *cell = (*cell).min(i);
        }
        Ok(Self(grid))
    }

    /// Steps from the top-left to the bottom-right corner once `fallen` bytes are down.
    pub fn shortest_path(&self, fallen: usize) -> Option<usize> {
        let grid = &self.0;
        let open = |p: Point| grid.get(p).is_some_and(|&t| t >= fallen);
        let start = Point::new(0, 0);
        let exit = Point::new(grid.width() as i64 - 1, grid.height() as i64 - 1);
        if !open(start) || !open(exit) {
            return None;
        }

        let mut dist = grid.map_fill(usize::MAX);
        dist[start] = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            if p == exit {
                return Some(dist[p]);
            }
            for n in p.neighbors() {
                if open(n) && dist[n] == usize::MAX {
                    dist[n] = dist[p] + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    /// Index of the first byte after which the exit can no longer be reached.
    pub fn first_blocking(&self, total: usize) -> Option<usize> {
        if self.shortest_path(total).is_some() {
            return None;
        }
        // Invariant: reachable with `lo` bytes, unreachable with `hi`.
        let (mut lo, mut hi) = (0, total);
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.shortest_path(mid).is_some() {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        Some(hi - 1)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        FallTimes::new(shared, SIZE)?
            .shortest_path(FALLEN)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("the exit is unreachable"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let index = FallTimes::new(shared, SIZE)?
            .first_blocking(shared.len())
            .ok_or_else(|| SolveError::failed("the exit is never cut off"))?;
        let byte = shared[index];
        Ok(format!("{},{}", byte.x, byte.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0";

    #[test]
    fn test_sample() {
        let bytes = Solver::parse(SAMPLE).unwrap();
        let memory = FallTimes::new(&bytes, 7).unwrap();
        assert_eq!(memory.shortest_path(12), Some(22));

        let index = memory.first_blocking(bytes.len()).unwrap();
        assert_eq!(bytes[index], Point::new(6, 1));
    }

    #[test]
    fn test_byte_outside_memory() {
        let bytes = Solver::parse("7,0").unwrap();
        assert!(FallTimes::new(&bytes, 7).is_err());
    }
}
