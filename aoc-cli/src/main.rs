//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod input;
mod output;
mod runner;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::RegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use log::info;
use output::OutputFormatter;
use runner::Runner;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging; `RUST_LOG` overrides the verbosity flag.
fn init_logger(config: &Config) {
    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .init();
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    init_logger(&config);

    let registry = build_registry(&config.tags)?;
    let runner = Runner::new(&registry, &config);

    let days = runner.days();
    if days.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    if config.input.is_example() {
        println!("no input file given, using example data");
        info!("example mode for {} day(s) of {}", days.len(), config.year);
    }

    let formatter = OutputFormatter::new(config.timings, days.len() > 1);
    for day in days {
        let report = runner.run_day(day)?;
        formatter.print_report(&report);
    }

    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
    let builder = RegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}
