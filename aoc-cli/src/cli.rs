//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2024 solver runner
#[derive(Parser, Debug)]
#[command(
    name = "aoc2024",
    about = "Run Advent of Code 2024 solvers",
    version,
    allow_negative_numbers = true
)]
pub struct Args {
    /// Day to run
    pub day: Option<String>,

    /// Event year
    #[arg(short, long, default_value_t = 2024)]
    pub year: u16,

    /// Part to run (runs all declared parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Run every registered day of the year
    #[arg(long, conflicts_with = "day")]
    pub all: bool,

    /// List registered days and exit
    #[arg(long, conflicts_with_all = ["day", "all"])]
    pub list: bool,

    /// Use the sample input (input.test.txt) instead of input.txt
    #[arg(long)]
    pub sample: bool,

    /// Explicit input file, overriding the input directory layout
    #[arg(short, long, conflicts_with = "all")]
    pub input: Option<PathBuf>,

    /// Base directory holding dayDD/input.txt files [default: $AOC_INPUT_DIR or "inputs"]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
