use aoc_solver::{
    AocExamples, AocParser, AocSolver, AutoRegisterSolver, Example, ParseError, PartSolver,
    RegistryBuilder, SolveError,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2015, day = 24, tags = ["test", "numbers"])]
struct Tagged;

impl AocParser for Tagged {
    type SharedData<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .split_whitespace()
            .map(|n| {
                n.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {n}")))
            })
            .collect()
    }
}

impl PartSolver<1> for Tagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<u64>().to_string())
    }
}

impl PartSolver<2> for Tagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::SolveFailed("empty input".into()))
    }
}

impl AocExamples for Tagged {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "5 7 11",
        answers: &["23", "11"],
    }];
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2015, day = 25)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

impl AocExamples for Untagged {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "abc\n",
        answers: &["cba"],
    }];
}

#[test]
fn derived_plugins_are_collected() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins register without duplicates")
        .build();

    let mut solver = registry
        .create_solver(2015, 24, "1 2 3")
        .expect("tagged solver was registered");
    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "3");

    let mut solver = registry.create_solver(2015, 25, "xyz").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "zyx");
}

#[test]
fn tag_filter_skips_untagged_plugins() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"numbers"))
        .unwrap()
        .build();

    assert!(registry.info(2015, 24).is_some());
    assert!(registry.info(2015, 25).is_none());
}

#[test]
fn derived_plugins_pass_their_examples() {
    let registry = RegistryBuilder::new().register_all_plugins().unwrap().build();

    assert_eq!(registry.check_examples(2015, 24).unwrap(), 2);
    assert_eq!(registry.check_examples(2015, 25).unwrap(), 1);
}
