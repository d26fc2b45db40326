//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use crate::input::InputSource;
use log::LevelFilter;

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Event year
    pub year: u16,
    /// Day filter (None = every registered day of the year)
    pub day: Option<u8>,
    /// Part filter (None = all parts)
    pub part: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Where the puzzle input comes from
    pub input: InputSource,
    /// Show durations next to answers
    pub timings: bool,
    pub verbose: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let input = match (args.input, args.day) {
            (Some(path), Some(_)) => InputSource::File(path),
            (Some(path), None) => {
                return Err(CliError::Config(format!(
                    "input file {} needs --day to pick a solver",
                    path.display()
                )));
            }
            (None, _) => InputSource::Example,
        };

        Ok(Config {
            year: args.year,
            day: args.day,
            part: args.part,
            tags: args.tags,
            input,
            timings: args.timings,
            verbose: args.verbose,
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        Config::from_args(Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn no_input_means_example_mode() {
        let config = config(&["aoc", "-d", "3"]).unwrap();
        assert!(config.input.is_example());
        assert_eq!(config.day, Some(3));
        assert_eq!(config.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn input_with_day_reads_the_file() {
        let config = config(&["aoc", "-d", "3", "-v", "puzzle.txt"]).unwrap();
        assert_eq!(config.input, InputSource::File(PathBuf::from("puzzle.txt")));
        assert_eq!(config.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn input_without_day_is_rejected() {
        let err = config(&["aoc", "puzzle.txt"]).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
        assert!(err.to_string().contains("--day"));
    }
}
