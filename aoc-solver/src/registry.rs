//! Static solver registry
//!
//! Solvers register themselves at link time through [`SolverPlugin`] entries
//! (see `#[derive(AutoRegisterSolver)]`). A [`SolverRegistryBuilder`] collects
//! them into flat storage indexed by year and day.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::input::{InputVariant, input_path};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::path::{Path, PathBuf};

// ============================================================================
// Storage Constants and Index Calculation
// ============================================================================

/// First year of Advent of Code
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

// ============================================================================
// Factory Types
// ============================================================================

/// Factory function that parses input into a ready-to-run solver
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver declares
    pub parts: u8,
    pub title: &'static str,
}

impl FactoryInfo {
    /// Display name, e.g. `Day 1: Historian Hysteria`
    pub fn name(&self) -> String {
        format!("Day {}: {}", self.day, self.title)
    }

    /// Conventional input location for this day below `base`.
    pub fn input_path(&self, base: &Path, variant: InputVariant) -> PathBuf {
        input_path(base, self.day, variant)
    }
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
    title: &'static str,
}

impl SolverFactoryEntry {
    fn info(&self, year: u16, day: u8) -> FactoryInfo {
        FactoryInfo {
            year,
            day,
            parts: self.parts,
            title: self.title,
        }
    }
}

// ============================================================================
// Plugins
// ============================================================================

/// Object-safe registration hook implemented for every [`Solver`].
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder under the given identity
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        title: &'static str,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;

    /// Number of parts this solver declares
    fn parts(&self) -> u8;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
        title: &'static str,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        let info = FactoryInfo {
            year,
            day,
            parts: S::PARTS,
            title,
        };
        builder.register_factory(info, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, title, input)?;
            Ok(Box::new(instance))
        })
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

/// A solver submitted for automatic registration
///
/// Normally generated by `#[derive(AutoRegisterSolver)]`; it can also be
/// submitted by hand:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin {
///         year: 2024,
///         day: 1,
///         title: "Historian Hysteria",
///         solver: &Day1Solver,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    /// Puzzle title shown in the run header
    pub title: &'static str,
    /// The solver (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "grid", "graph")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Iterate over every solver linked into the binary.
pub fn plugins() -> impl Iterator<Item = &'static SolverPlugin> {
    inventory::iter::<SolverPlugin>.into_iter()
}

// ============================================================================
// Builder
// ============================================================================

/// Builder for a [`SolverRegistry`]
///
/// Rejects duplicates and year/day pairs outside the supported range.
///
/// ```no_run
/// # use aoc_solver::SolverRegistryBuilder;
/// let registry = SolverRegistryBuilder::new()
///     .register_solver_plugins(|plugin| plugin.year == 2024)
///     .unwrap()
///     .build();
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    /// Create an empty builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory under `info.year` / `info.day`.
    pub fn register_factory<F>(mut self, info: FactoryInfo, factory: F) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(info.year, info.day)
            .ok_or(RegistrationError::InvalidYearDay(info.year, info.day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(info.year, info.day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts: info.parts,
            title: info.title,
        });
        Ok(self)
    }

    /// Register every collected solver plugin
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the collected plugins for which `filter` returns `true`
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in plugins() {
            if filter(plugin) {
                self = plugin
                    .solver
                    .register_with(self, plugin.year, plugin.day, plugin.title)?;
            }
        }
        Ok(self)
    }

    /// Finalize into an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Immutable storage for solver factories with O(1) lookup
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    /// Iterate over metadata for all registered solvers, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                e.info(year, day)
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| e.info(year, day))
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Maps (year, day) to the solver for that puzzle
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Readonly access to registered metadata
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for `year`/`day`.
    ///
    /// # Returns
    /// * `Err(SolverError::InvalidYearDay)` - year or day outside the supported range
    /// * `Err(SolverError::NotFound)` - nothing registered for that day
    /// * `Err(SolverError::ParseError)` - the solver rejected the input
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}
