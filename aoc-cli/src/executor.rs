//! Sequential executor for running solvers

use crate::error::ExecutorError;
use crate::inputs::InputStore;
use aoc_solver::{FactoryInfo, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Work item representing a solver to execute
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub info: FactoryInfo,
    pub parts: RangeInclusive<u8>,
}

/// Progress reported while work items run, in execution order
#[derive(Debug)]
pub enum ExecutionEvent<'e> {
    /// Input read and parsed
    Parsed {
        info: &'e FactoryInfo,
        parse_duration: TimeDelta,
    },
    /// One part of the most recently parsed day produced an answer
    Solved {
        part: u8,
        answer: &'e str,
        solve_duration: TimeDelta,
    },
    /// A step failed; the remaining parts of that day are skipped
    Failed {
        info: &'e FactoryInfo,
        error: &'e ExecutorError,
    },
}

/// Runs solvers one after another on the calling thread
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year: u16,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, inputs: InputStore, year: u16, part_filter: Option<u8>) -> Self {
        Self {
            registry,
            inputs,
            year,
            part_filter,
        }
    }

    /// Collect work items for one day, or every registered day when `day` is `None`
    pub fn collect_work_items(&self, day: Option<u8>) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| info.year == self.year)
            .filter(|info| day.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                info,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's declared parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items in order, reporting each step to `on_event`.
    ///
    /// A failure does not stop later work items; every failure is collected
    /// into the returned error.
    pub fn execute<F>(&self, work_items: &[WorkItem], mut on_event: F) -> Result<(), ExecutorError>
    where
        F: FnMut(ExecutionEvent<'_>),
    {
        let mut collected_error: Option<ExecutorError> = None;
        for work in work_items {
            if let Err(e) = self.run_solver(work, &mut on_event) {
                on_event(ExecutionEvent::Failed {
                    info: &work.info,
                    error: &e,
                });
                collected_error = Some(ExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    /// Read, parse and solve a single work item
    fn run_solver<F>(&self, work: &WorkItem, on_event: &mut F) -> Result<(), ExecutorError>
    where
        F: FnMut(ExecutionEvent<'_>),
    {
        let info = &work.info;
        let (year, day) = (info.year, info.day);

        let input = self
            .inputs
            .load(info)
            .map_err(|source| ExecutorError::Input { year, day, source })?;
        let mut solver = self
            .registry
            .create_solver(year, day, &input)
            .map_err(|source| ExecutorError::Solver { year, day, source })?;
        on_event(ExecutionEvent::Parsed {
            info,
            parse_duration: solver.parse_duration(),
        });

        for part in work.parts.clone() {
            let result = solver
                .solve(part)
                .map_err(|source| ExecutorError::Part { year, day, part, source })?;
            on_event(ExecutionEvent::Solved {
                part,
                answer: &result.answer,
                solve_duration: result.duration(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::{
        AocParser, InputVariant, ParseError, RegisterableSolver, SolveError, Solver, SolverRegistryBuilder,
    };
    use std::fs;
    use tempfile::TempDir;

    /// Part 1 counts lines, part 2 fails on request.
    struct Lines;

    impl AocParser for Lines {
        type SharedData<'a> = Vec<&'a str>;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Lines {
        const PARTS: u8 = 2;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                2 if shared.contains(&"fail") => Err(SolveError::failed("asked to fail")),
                2 => Ok(shared.concat()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    /// Declares only part 1.
    struct OnePart;

    impl AocParser for OnePart {
        type SharedData<'a> = &'a str;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            Ok(input)
        }
    }

    impl Solver for OnePart {
        const PARTS: u8 = 1;

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(shared.len().to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn registry() -> SolverRegistry {
        let builder = SolverRegistryBuilder::new();
        let builder = Lines.register_with(builder, 2024, 1, "Lines").unwrap();
        let builder = Lines.register_with(builder, 2024, 2, "More Lines").unwrap();
        let builder = OnePart.register_with(builder, 2024, 3, "Length").unwrap();
        let builder = OnePart.register_with(builder, 2023, 1, "Other Year").unwrap();
        builder.build()
    }

    fn write_input(dir: &TempDir, day: u8, content: &str) {
        let day_dir = dir.path().join(format!("day{:02}", day));
        fs::create_dir_all(&day_dir).unwrap();
        fs::write(day_dir.join("input.txt"), content).unwrap();
    }

    /// Run everything and describe each event as text
    fn run(executor: &Executor, day: Option<u8>) -> (Vec<String>, Result<(), ExecutorError>) {
        let mut events = Vec::new();
        let mut current = 0;
        let items = executor.collect_work_items(day);
        let result = executor.execute(&items, |event| {
            events.push(match event {
                ExecutionEvent::Parsed { info, .. } => {
                    current = info.day;
                    format!("parsed {}", info.day)
                }
                ExecutionEvent::Solved { part, answer, .. } => format!("{}.{}={}", current, part, answer),
                ExecutionEvent::Failed { info, .. } => format!("failed {}", info.day),
            })
        });
        (events, result)
    }

    #[test]
    fn test_work_items_respect_year_and_parts() {
        let executor = Executor::new(registry(), InputStore::new("unused".into(), InputVariant::Real), 2024, None);
        let items = executor.collect_work_items(None);
        let summary: Vec<_> = items.iter().map(|w| (w.info.day, w.parts.clone())).collect();
        assert_eq!(summary, vec![(1, 1..=2), (2, 1..=2), (3, 1..=1)]);

        let executor = Executor::new(registry(), InputStore::new("unused".into(), InputVariant::Real), 2024, Some(2));
        let days: Vec<_> = executor.collect_work_items(None).iter().map(|w| w.info.day).collect();
        assert_eq!(days, vec![1, 2]);
        assert!(executor.collect_work_items(Some(3)).is_empty());
    }

    #[test]
    fn test_sequential_events() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, 1, "a\r\nb\r\n");
        write_input(&dir, 3, "xyz");
        let executor = Executor::new(registry(), InputStore::new(dir.path().to_path_buf(), InputVariant::Real), 2024, None);

        let (events, result) = run(&executor, Some(1));
        assert!(result.is_ok());
        assert_eq!(events, vec!["parsed 1", "1.1=2", "1.2=ab"]);

        let (events, result) = run(&executor, Some(3));
        assert!(result.is_ok());
        assert_eq!(events, vec!["parsed 3", "3.1=3"]);
    }

    #[test]
    fn test_failures_are_collected() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, 1, "fail\nok");
        // Day 2 has no input file.
        write_input(&dir, 3, "xyz");
        let executor = Executor::new(registry(), InputStore::new(dir.path().to_path_buf(), InputVariant::Real), 2024, None);

        let (events, result) = run(&executor, None);
        assert_eq!(
            events,
            vec!["parsed 1", "1.1=2", "failed 1", "failed 2", "parsed 3", "3.1=3"]
        );
        let error = result.unwrap_err();
        assert_eq!(error.count(), 2);
        let ExecutorError::Multiple(errors) = error else {
            panic!("expected Multiple");
        };
        assert!(matches!(errors[0], ExecutorError::Part { day: 1, part: 2, .. }));
        assert!(matches!(errors[1], ExecutorError::Input { day: 2, .. }));
    }

    #[test]
    fn test_parse_failure() {
        let dir = TempDir::new().unwrap();
        write_input(&dir, 1, "");
        let executor = Executor::new(registry(), InputStore::new(dir.path().to_path_buf(), InputVariant::Real), 2024, None);

        let (events, result) = run(&executor, Some(1));
        assert_eq!(events, vec!["failed 1"]);
        assert!(matches!(result, Err(ExecutorError::Solver { day: 1, .. })));
    }
}
