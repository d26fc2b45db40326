//! Property-based tests for the parse -> part 1 -> part 2 pipeline

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
use proptest::prelude::*;

#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct MinMax;

impl AocParser for MinMax {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad int: {l}")))
            })
            .collect()
    }
}

impl PartSolver<1> for MinMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .min()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no numbers".into()))
    }
}

impl PartSolver<2> for MinMax {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Sorts a copy so part 1 can run again afterwards.
        let mut sorted = shared.clone();
        sorted.sort_unstable();
        sorted
            .last()
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no numbers".into()))
    }
}

fn render(numbers: &[i64]) -> String {
    numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// `solve_part(N)` gives the same answer as calling `PartSolver<N>` directly.
    #[test]
    fn solve_part_matches_part_solver(
        numbers in prop::collection::vec(-1000i64..1000, 1..20),
        part in 1u8..=2,
    ) {
        let input = render(&numbers);
        let mut a = MinMax::parse(&input).unwrap();
        let mut b = MinMax::parse(&input).unwrap();

        let dispatched = MinMax::solve_part(&mut a, part).unwrap();
        let direct = match part {
            1 => <MinMax as PartSolver<1>>::solve(&mut b).unwrap(),
            _ => <MinMax as PartSolver<2>>::solve(&mut b).unwrap(),
        };

        prop_assert_eq!(dispatched, direct);
    }

    /// Running both parts twice on one parsed input repeats the answers.
    #[test]
    fn parts_are_repeatable(numbers in prop::collection::vec(-1000i64..1000, 1..20)) {
        let input = render(&numbers);
        let mut shared = MinMax::parse(&input).unwrap();

        let first = (
            MinMax::solve_part(&mut shared, 1).unwrap(),
            MinMax::solve_part(&mut shared, 2).unwrap(),
        );
        let second = (
            MinMax::solve_part(&mut shared, 1).unwrap(),
            MinMax::solve_part(&mut shared, 2).unwrap(),
        );

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.0, numbers.iter().min().unwrap().to_string());
        prop_assert_eq!(first.1, numbers.iter().max().unwrap().to_string());
        prop_assert_eq!(shared, numbers);
    }
}

#[test]
fn empty_input_fails_at_solve_time() {
    let mut shared = MinMax::parse("").unwrap();

    assert!(matches!(
        MinMax::solve_part(&mut shared, 1),
        Err(SolveError::SolveFailed(_))
    ));
}
