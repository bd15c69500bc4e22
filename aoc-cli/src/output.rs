//! Output formatting for solver results

use crate::executor::ExecutionEvent;
use chrono::TimeDelta;
use itertools::Itertools;
use std::io::{self, Write};

/// Output formatter for solver results
///
/// Headers and answers go to `out`, failures to `err`.
pub struct OutputFormatter<O: Write, E: Write> {
    quiet: bool,
    report_failures: bool,
    start_time: std::time::Instant,
    out: O,
    err: E,
    solved: usize,
    failed: Vec<String>,
    total_parse_time: TimeDelta,
    total_solve_time: TimeDelta,
}

impl OutputFormatter<io::Stdout, io::Stderr> {
    /// Formatter writing to the process's stdout and stderr
    pub fn stdio(quiet: bool) -> Self {
        Self::new(quiet, io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> OutputFormatter<O, E> {
    pub fn new(quiet: bool, out: O, err: E) -> Self {
        Self {
            quiet,
            report_failures: true,
            start_time: std::time::Instant::now(),
            out,
            err,
            solved: 0,
            failed: Vec::new(),
            total_parse_time: TimeDelta::zero(),
            total_solve_time: TimeDelta::zero(),
        }
    }

    /// Whether failures are echoed to `err` as they happen
    pub fn report_failures(mut self, report: bool) -> Self {
        self.report_failures = report;
        self
    }

    /// Format and print a single event
    pub fn print_event(&mut self, event: &ExecutionEvent<'_>) -> io::Result<()> {
        match *event {
            ExecutionEvent::Parsed { info, parse_duration } => {
                self.total_parse_time += parse_duration;
                if !self.quiet {
                    writeln!(self.out, "{} (parse: {})", info.name(), format_duration(parse_duration))?;
                }
            }
            ExecutionEvent::Solved {
                part,
                answer,
                solve_duration,
            } => {
                self.solved += 1;
                self.total_solve_time += solve_duration;
                if self.quiet {
                    writeln!(self.out, "{}", answer)?;
                } else {
                    writeln!(self.out, "  Part {}: {} ({})", part, answer, format_duration(solve_duration))?;
                }
            }
            ExecutionEvent::Failed { info, error } => {
                self.failed.push(format!("{}/{:02}", info.year, info.day));
                if self.report_failures {
                    writeln!(self.err, "{}: Error - {}", info.name(), error)?;
                }
            }
        }
        Ok(())
    }

    /// Print a summary after all results
    pub fn print_summary(&mut self) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }

        writeln!(self.out)?;
        writeln!(self.out, "--- Summary ---")?;
        writeln!(self.out, "Parts: {} solved, {} days failed", self.solved, self.failed.len())?;
        if !self.failed.is_empty() {
            writeln!(self.out, "Failed: {}", self.failed.iter().join(", "))?;
        }
        writeln!(self.out, "Total parse time: {}", format_duration(self.total_parse_time))?;
        writeln!(self.out, "Total solve time: {}", format_duration(self.total_solve_time))?;
        writeln!(
            self.out,
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        )
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

/// Format a TimeDelta in milliseconds
pub fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    format!("{:.3} ms", micros as f64 / 1000.0)
}

/// Format a std::time::Duration in milliseconds (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    format!("{:.3} ms", d.as_secs_f64() * 1000.0)
}
