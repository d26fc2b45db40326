//! Advent of Code puzzle solutions with automatic registration
//!
//! This crate contains actual puzzle solutions organized by year.
//! Each solution uses the `AutoRegisterSolver` derive macro for automatic
//! plugin registration with the solver framework, and declares its puzzle
//! examples so a run without input can check itself.

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
