//! AoC 2024 CLI - Command-line interface for running the Advent of Code 2024 solvers

mod cli;
mod config;
mod error;
mod executor;
mod inputs;
mod output;

use aoc_solver::{SolverRegistry, SolverRegistryBuilder};
use clap::{CommandFactory, Parser};
use cli::Args;
use config::{Config, Selection};
use error::CliError;
use executor::Executor;
use inputs::InputStore;
use output::OutputFormatter;

fn main() {
    // Keep the solver plugins linked in
    aoc_2024::link();

    let args = Args::parse();

    if let Err(e) = run(args) {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;

    if config.selection == Selection::Usage {
        Args::command().print_help()?;
        return Ok(());
    }

    // Build registry with year and tag filtering (only once)
    let registry = build_registry(config.year, &config.tags)?;

    let day = match config.selection {
        Selection::Usage => return Ok(()),
        Selection::List => {
            list_solvers(&registry, config.year);
            return Ok(());
        }
        Selection::Day(day) => {
            let Some(info) = registry.storage().get_info(config.year, day) else {
                return Err(CliError::UnknownDay {
                    year: config.year,
                    day: day.into(),
                });
            };
            if let Some(part) = config.part_filter.filter(|&p| p > info.parts) {
                return Err(CliError::PartOutOfRange {
                    year: info.year,
                    day,
                    part,
                    parts: info.parts,
                });
            }
            Some(day)
        }
        Selection::All => None,
    };

    let inputs = InputStore::new(config.input_dir, config.variant).with_override(config.input_override);
    let executor = Executor::new(registry, inputs, config.year, config.part_filter);

    let work_items = executor.collect_work_items(day);
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // A single day's failure is reported once, by the final error line
    let mut formatter = OutputFormatter::stdio(config.quiet).report_failures(day.is_none());
    let mut write_error = None;
    let result = executor.execute(&work_items, |event| {
        if let Err(e) = formatter.print_event(&event) {
            write_error.get_or_insert(e);
        }
    });
    if let Some(e) = write_error {
        return Err(e.into());
    }

    // Print summary for multi-day runs
    if day.is_none() {
        formatter.print_summary()?;
    }

    Ok(result?)
}

/// Print every registered day of `year`
fn list_solvers(registry: &SolverRegistry, year: u16) {
    for info in registry.storage().iter_info().filter(|info| info.year == year) {
        let parts = if info.parts == 1 { "1 part" } else { "2 parts" };
        println!("{} ({})", info.name(), parts);
    }
}

/// Build registry with year and tag filtering
fn build_registry(year: u16, tags: &[String]) -> Result<SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new().register_solver_plugins(|plugin| {
        plugin.year == year && tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
    })?;

    Ok(builder.build())
}
