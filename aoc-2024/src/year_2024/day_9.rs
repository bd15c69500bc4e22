use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, title = "Disk Fragmenter", tags = ["simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| ParseError::InvalidFormat(format!("'{}' is not a digit", c)))
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy)]
struct Span {
    start: usize,
    len: usize,
}

/// File spans (indexed by file id) and free spans, in disk order.
fn layout(map: &[u8]) -> (Vec<Span>, Vec<Span>) {
    let mut files = Vec::with_capacity(map.len() / 2 + 1);
    let mut free: Vec<Span> = Vec::with_capacity(map.len() / 2);
    let mut pos = 0;
    for (i, &len) in map.iter().enumerate() {
        let span = Span {
            start: pos,
            len: len as usize,
        };
        if i % 2 == 0 {
            files.push(span);
        } else if let Some(prev) = free.last_mut().filter(|prev| prev.start + prev.len == pos) {
            // An empty file between two gaps leaves one contiguous run
            prev.len += span.len;
        } else {
            free.push(span);
        }
        pos += len as usize;
    }
    (files, free)
}

fn checksum(files: &[Span]) -> u64 {
    files
        .iter()
        .enumerate()
        .map(|(id, f)| (f.start..f.start + f.len).map(|p| (p * id) as u64).sum::<u64>())
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut blocks: Vec<Option<usize>> = Vec::new();
        for (i, &len) in shared.iter().enumerate() {
            let id = (i % 2 == 0).then_some(i / 2);
            blocks.extend(std::iter::repeat_n(id, len as usize));
        }

        let (mut left, mut right) = (0, blocks.len());
        while left < right {
            if blocks[left].is_some() {
                left += 1;
            } else if blocks[right - 1].is_none() {
                right -= 1;
            } else {
                blocks.swap(left, right - 1);
                left += 1;
                right -= 1;
            }
        }

        let sum: u64 = blocks
            .iter()
            .enumerate()
            .filter_map(|(pos, id)| id.map(|id| (pos * id) as u64))
            .sum();
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (mut files, mut free) = layout(shared);
        for file in files.iter_mut().rev() {
            let Span { start, len } = *file;
            if let Some(gap) = free
                .iter_mut()
                .take_while(|gap| gap.start < start)
                .find(|gap| gap.len >= len)
            {
                file.start = gap.start;
                gap.start += len;
                gap.len -= len;
            }
        }
        Ok(checksum(&files).to_string())
    }
}
