//! Puzzle input loading

use crate::error::CliError;
use aoc_solver::{SolverError, SolverRegistry};
use log::debug;
use std::borrow::Cow;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read the whole file once
    File(PathBuf),
    /// The selected day's primary example
    Example,
}

impl InputSource {
    pub fn is_example(&self) -> bool {
        matches!(self, InputSource::Example)
    }

    /// Load the raw input for one day.
    ///
    /// File contents are owned; examples borrow the solver's static text.
    pub fn load(
        &self,
        registry: &SolverRegistry,
        year: u16,
        day: u8,
    ) -> Result<Cow<'static, str>, CliError> {
        match self {
            InputSource::File(path) => {
                let contents =
                    std::fs::read_to_string(path).map_err(|source| CliError::Input {
                        path: path.clone(),
                        source,
                    })?;
                debug!("read {} bytes from {}", contents.len(), path.display());
                Ok(Cow::Owned(contents))
            }
            InputSource::Example => {
                registry
                    .info(year, day)
                    .ok_or(SolverError::NotFound(year, day))?;
                let example = registry.primary_example(year, day)?;
                Ok(Cow::Borrowed(example.input))
            }
        }
    }
}
