//! Advent of Code Solver Library
//!
//! Plumbing for day-by-day puzzle solvers. Every day is the same pipeline:
//! raw text is parsed once into day-specific shared data, then each part
//! computes one answer from it. Days ship example inputs with known answers
//! so a run without puzzle input can check itself first.
//!
//! # Overview
//!
//! This library provides:
//! - [`AocParser`] / [`PartSolver`] / [`Solver`]: parse once, solve per part
//! - [`AocExamples`] and [`check_examples`]: example-driven self-checks
//! - [`SolverRegistry`]: lookup by (year, day), fed by `inventory` plugins
//! - [`DynSolver`]: a type-erased solver instance with parse/solve timing
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{
//!     AocExamples, AocParser, AocSolver, Example, ParseError, PartSolver, RegistryBuilder,
//!     SolveError,
//! };
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Sums;
//!
//! impl AocParser for Sums {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Vec<i32>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Sums {
//!     fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Sums {
//!     fn solve(shared: &mut Vec<i32>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! impl AocExamples for Sums {
//!     const EXAMPLES: &'static [Example] = &[Example {
//!         input: "2\n3\n4",
//!         answers: &["9", "24"],
//!     }];
//! }
//!
//! let registry = RegistryBuilder::new().register::<Sums>(2022, 1).unwrap().build();
//! assert_eq!(registry.check_examples(2022, 1).unwrap(), 2);
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] so the solver
//! is picked up by [`RegistryBuilder::register_all_plugins`]:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2022, day = 1, tags = ["parsing"])]
//! struct Solver;
//! ```

mod error;
mod example;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{CheckError, ParseError, RegistrationError, SolveError, SolverError};
pub use example::{AocExamples, Example, check_examples};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    RegisterableSolver, RegistryBuilder, SolverFactory, SolverInfo, SolverPlugin, SolverRegistry,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
