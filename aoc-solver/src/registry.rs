//! Solver registry for managing and creating solver instances

use crate::error::{CheckError, ParseError, RegistrationError, SolverError};
use crate::example::{self, AocExamples, Example};
use crate::instance::{DynSolver, SolverInstance};
use std::collections::BTreeMap;

/// Factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

/// Factory entry with metadata
struct SolverEntry {
    factory: SolverFactory,
    parts: u8,
    examples: &'static [Example],
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The builder pattern allows for method chaining and ensures the registry
/// is immutable after construction. It also provides duplicate detection
/// during registration.
///
/// # Example
///
/// ```ignore
/// # use aoc_solver::RegistryBuilder;
/// let registry = RegistryBuilder::new()
///     .register::<Day1>(2022, 1)?
///     .register::<Day2>(2022, 2)?
///     .build();
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverEntry>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver type for a specific year and day
    ///
    /// Returns an error if a solver is already registered for the given year-day combination.
    pub fn register<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: AocExamples + 'static,
    {
        self.register_factory(year, day, S::PARTS, S::EXAMPLES, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            Ok(Box::new(instance))
        })
    }

    /// Register a raw factory function with its metadata
    ///
    /// # Arguments
    /// * `year` - The Advent of Code year
    /// * `day` - The day number (1-25)
    /// * `parts` - Number of parts the created solvers support
    /// * `examples` - Example inputs used by [`SolverRegistry::check_examples`]
    /// * `factory` - A function that takes input and returns a boxed DynSolver
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        examples: &'static [Example],
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + 'static,
    {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.solvers.insert(
            (year, day),
            SolverEntry {
                factory: Box::new(factory),
                parts,
                examples,
            },
        );
        Ok(self)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!` and
    /// registers each one with the builder.
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Register only solvers tagged as "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                log::trace!("registering plugin {}/{:02}", plugin.year, plugin.day);
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers
///
/// The registry maps (year, day) pairs to factory functions that can create
/// solver instances. Once built, it cannot be modified.
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverEntry>,
}

impl SolverRegistry {
    /// Create a solver instance for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Box<dyn DynSolver>)` - Successfully created solver
    /// * `Err(SolverError)` - Solver not found or parsing failed
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self.entry(year, day)?;
        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    /// Metadata for one registered solver
    pub fn info(&self, year: u16, day: u8) -> Option<SolverInfo> {
        self.solvers.get(&(year, day)).map(|e| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Metadata for every registered solver, ordered by year then day
    pub fn iter_info(&self) -> impl Iterator<Item = SolverInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), e)| SolverInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// The example that stands in for puzzle input when none is given
    pub fn primary_example(&self, year: u16, day: u8) -> Result<&'static Example, CheckError> {
        self.entry(year, day)?
            .examples
            .first()
            .ok_or(CheckError::NoExamples(year, day))
    }

    /// Run the example self-check for one solver
    ///
    /// Returns the number of answers compared.
    pub fn check_examples(&self, year: u16, day: u8) -> Result<usize, CheckError> {
        let entry = self.entry(year, day)?;
        example::check_with(year, day, entry.examples, |input| (entry.factory)(input))
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Whether no solver is registered
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }

    fn entry(&self, year: u16, day: u8) -> Result<&SolverEntry, SolverError> {
        self.solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// This trait provides a type-erased interface for solvers to self-register.
/// Unlike the `Solver` trait which has associated types, this trait has no
/// associated types, allowing for collection of different solver types in
/// a single container.
///
/// Any type implementing [`AocExamples`] gets this through a blanket impl.
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a specific year and day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: AocExamples + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register::<S>(year, day)
    }
}

/// Plugin information for automatic solver registration
///
/// Normally submitted by `#[derive(AutoRegisterSolver)]`; can also be
/// submitted by hand:
///
/// ```ignore
/// inventory::submit! {
///     SolverPlugin {
///         year: 2022,
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["2022", "parsing"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "grid", "parsing", "simulation")
    pub tags: &'static [&'static str],
}

// Enable plugin collection via inventory
inventory::collect!(SolverPlugin);

/// Macro to register a solver with the registry builder
///
/// Panics on duplicate registration.
///
/// ```ignore
/// let mut builder = RegistryBuilder::new();
/// register_solver!(builder, Day1, 2022, 1);
/// let registry = builder.build();
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register::<$solver>($year, $day)
            .expect("Failed to register solver");
    };
}
