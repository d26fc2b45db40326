//! Every 2022 solver registers itself and reproduces its example answers.

use aoc_solutions as _;
use aoc_solver::{RegistryBuilder, SolverRegistry};

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2022)
        .unwrap()
        .build()
}

#[test]
fn days_one_to_eight_are_registered() {
    let registry = registry();
    let days: Vec<u8> = registry.iter_info().map(|info| info.day).collect();

    assert_eq!(days, (1..=8).collect::<Vec<_>>());
    assert!(registry.iter_info().all(|info| info.parts == 2));
}

#[test]
fn every_example_matches() {
    let registry = registry();

    for info in registry.iter_info() {
        let compared = registry
            .check_examples(info.year, info.day)
            .unwrap_or_else(|e| panic!("day {}: {e}", info.day));
        assert!(compared >= 2, "day {} compared {compared} answers", info.day);
    }
}

#[test]
fn primary_example_solves_through_registry() {
    let registry = registry();
    let example = registry.primary_example(2022, 1).unwrap();
    let mut solver = registry.create_solver(2022, 1, example.input).unwrap();

    assert_eq!(solver.solve(1).unwrap().answer, "24000");
    assert_eq!(solver.solve(2).unwrap().answer, "45000");
    assert!(solver.solve(3).is_err());
}

#[test]
fn day_six_checks_all_streams() {
    let registry = registry();
    assert_eq!(registry.check_examples(2022, 6).unwrap(), 10);
}

#[test]
fn tag_filter_selects_matching_days() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
        .unwrap()
        .build();

    let days: Vec<_> = registry.iter_info().map(|info| (info.year, info.day)).collect();
    assert_eq!(days, [(2022, 8)]);
}

#[test]
fn unregistered_day_is_not_found() {
    let registry = registry();
    assert!(registry.create_solver(2022, 9, "").is_err());
    assert!(registry.primary_example(2022, 9).is_err());
}

#[test]
fn every_part_is_repeatable_on_one_parse() {
    let registry = registry();

    for info in registry.iter_info() {
        let example = registry.primary_example(info.year, info.day).unwrap();
        let mut solver = registry
            .create_solver(info.year, info.day, example.input)
            .unwrap();

        for part in 1..=info.parts {
            let first = solver.solve(part).unwrap().answer;
            let second = solver.solve(part).unwrap().answer;
            assert_eq!(first, second, "day {} part {part}", info.day);
        }

        let again = solver.solve(1).unwrap().answer;
        assert_eq!(again, example.answers[0], "day {} part 1 after part 2", info.day);
    }
}
