use std::collections::VecDeque;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, title = "Race Condition", tags = ["grid", "bfs"])]
pub struct Solver;

/// Picoseconds a cheat must save to be counted
pub const MIN_SAVING: usize = 100;

#[derive(Debug)]
pub struct SharedData {
    /// Track cells from start to end, in race order
    track: Vec<Point>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse_with(input, |c| matches!(c, '#' | '.' | 'S' | 'E').then_some(c))?;
        let find = |tile: char| {
            map.position(|&c| c == tile)
                .ok_or_else(|| ParseError::MissingData(format!("no '{}' tile", tile)))
        };
        let (start, end) = (find('S')?, find('E')?);

        let mut previous = map.map_fill(None::<Point>);
        let mut seen = map.map_fill(false);
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        while let Some(p) = queue.pop_front() {
            for n in p.neighbors() {
                if map.get(n).is_some_and(|&c| c != '#') && !seen[n] {
                    seen[n] = true;
                    previous[n] = Some(p);
                    queue.push_back(n);
                }
            }
        }
        if !seen[end] {
            return Err(ParseError::InvalidFormat("no track from S to E".into()));
        }

        let mut track = vec![end];
        let mut current = end;
        while let Some(p) = previous[current] {
            track.push(p);
            current = p;
        }
        track.reverse();
        Ok(SharedData { track })
    }
}

/// Cheats lasting at most `max_cheat` picoseconds that save at least `min_saving`.
pub fn count_cheats(track: &[Point], max_cheat: usize, min_saving: usize) -> usize {
    let mut count = 0;
    for (i, &from) in track.iter().enumerate() {
        for (j, &to) in track.iter().enumerate().skip(i + min_saving) {
            let cheat = from.manhattan(to) as usize;
            if cheat <= max_cheat && j - i >= cheat + min_saving {
                count += 1;
            }
        }
    }
    count
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_cheats(&shared.track, 2, MIN_SAVING).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(count_cheats(&shared.track, 20, MIN_SAVING).to_string())
    }
}
