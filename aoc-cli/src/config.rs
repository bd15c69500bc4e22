//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use aoc_solver::InputVariant;
use std::path::PathBuf;

/// Environment variable consulted when `--input-dir` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";
/// Input directory used when neither flag nor environment names one
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// What the user asked the runner to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing selected; show usage
    Usage,
    /// List registered days
    List,
    /// Run a single day
    Day(u8),
    /// Run every registered day of the year
    All,
}

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    pub year: u16,
    pub selection: Selection,
    /// Part filter (None = all declared parts)
    pub part_filter: Option<u8>,
    pub variant: InputVariant,
    /// Explicit input file replacing the directory layout
    pub input_override: Option<PathBuf>,
    pub input_dir: PathBuf,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, resolving the input directory and day
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input_dir = resolve_input_dir(args.input_dir, std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from));

        let selection = match (&args.day, args.all, args.list) {
            (_, _, true) => Selection::List,
            (_, true, _) => Selection::All,
            (Some(day), _, _) => Selection::Day(parse_day(day, args.year)?),
            (None, false, false) => Selection::Usage,
        };

        Ok(Config {
            year: args.year,
            selection,
            part_filter: args.part,
            variant: if args.sample {
                InputVariant::Sample
            } else {
                InputVariant::Real
            },
            input_override: args.input,
            input_dir,
            tags: args.tags,
            quiet: args.quiet,
        })
    }
}

/// Flag first, then environment, then the default directory
fn resolve_input_dir(flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
    flag.or(env)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR))
}

/// Parse the positional day argument into a positive day number
pub fn parse_day(text: &str, year: u16) -> Result<u8, CliError> {
    let day: i64 = text.trim().parse().map_err(|source| CliError::DayParse {
        input: text.to_string(),
        source,
    })?;
    if day < 1 {
        return Err(CliError::DayNotPositive(day));
    }
    u8::try_from(day).map_err(|_| CliError::UnknownDay { year, day })
}
