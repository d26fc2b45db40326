//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Puzzle input file; the day's example is used when omitted (requires --day)
    pub input: Option<PathBuf>,

    /// Event year
    #[arg(short, long, default_value_t = 2022)]
    pub year: u16,

    /// Day to run (runs every registered day of the year if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Show parse and solve durations next to each answer
    #[arg(long)]
    pub timings: bool,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}
