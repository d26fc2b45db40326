//! Sequential runner: load input, self-check examples, solve the selected parts

use crate::config::Config;
use crate::error::CliError;
use aoc_solver::{DynSolver, SolveResult, SolverError, SolverRegistry};
use chrono::TimeDelta;
use log::{debug, info};

/// Everything solved for one day
#[derive(Debug, Clone)]
pub struct DayReport {
    pub year: u16,
    pub day: u8,
    pub parse_duration: TimeDelta,
    pub results: Vec<SolveResult>,
}

pub struct Runner<'r> {
    registry: &'r SolverRegistry,
    config: &'r Config,
}

impl<'r> Runner<'r> {
    pub fn new(registry: &'r SolverRegistry, config: &'r Config) -> Self {
        Self { registry, config }
    }

    /// Days to run, in order
    pub fn days(&self) -> Vec<u8> {
        match self.config.day {
            Some(day) => self
                .registry
                .info(self.config.year, day)
                .map(|info| info.day)
                .into_iter()
                .collect(),
            None => self
                .registry
                .iter_info()
                .filter(|info| info.year == self.config.year)
                .map(|info| info.day)
                .collect(),
        }
    }

    /// Solve one day, stopping at the first error.
    ///
    /// In example mode the day's examples are checked before anything is solved.
    pub fn run_day(&self, day: u8) -> Result<DayReport, CliError> {
        let year = self.config.year;
        let input = self.config.input.load(self.registry, year, day)?;

        if self.config.input.is_example() {
            let compared = self.registry.check_examples(year, day)?;
            info!("{year} day {day:02}: {compared} example answers match");
        }

        let mut solver = self.registry.create_solver(year, day, &input)?;
        debug!(
            "{year} day {day:02}: parsed in {}µs",
            solver.parse_duration().num_microseconds().unwrap_or(0)
        );

        let parts = match self.config.part {
            Some(part) => part..=part,
            None => 1..=solver.parts(),
        };

        let results = parts
            .map(|part| solve(solver.as_mut(), part))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DayReport {
            year,
            day,
            parse_duration: solver.parse_duration(),
            results,
        })
    }
}

fn solve<S: DynSolver + ?Sized>(solver: &mut S, part: u8) -> Result<SolveResult, SolverError> {
    let result = solver.solve(part)?;
    debug!(
        "{} day {:02} part {part}: solved in {}µs",
        solver.year(),
        solver.day(),
        result.duration().num_microseconds().unwrap_or(0)
    );
    Ok(result)
}
