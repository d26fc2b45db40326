//! Property-based tests for part number validation

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Solver with configurable PARTS that echoes the requested part
struct Echo<const N: u8>;

impl<const N: u8> AocParser for Echo<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for Echo<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{part}"))
    }
}

fn checked(parts: u8, part: u8) -> Result<String, SolveError> {
    let mut shared = ();
    match parts {
        1 => Echo::<1>::solve_part_checked_range(&mut shared, part),
        2 => Echo::<2>::solve_part_checked_range(&mut shared, part),
        _ => Echo::<3>::solve_part_checked_range(&mut shared, part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Part 0 and parts past PARTS are rejected with the offending number.
    #[test]
    fn out_of_range_parts_are_rejected(parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(parts, part);

        if part == 0 || part > parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{part}"));
        }
    }

    /// In-range parts reach `solve_part` untouched.
    #[test]
    fn in_range_parts_delegate(part in 1u8..=2) {
        let mut shared = ();
        let direct = Echo::<2>::solve_part(&mut shared, part).unwrap();
        prop_assert_eq!(checked(2, part).unwrap(), direct);
    }
}

#[test]
fn part_zero_rejected() {
    assert!(matches!(checked(2, 0), Err(SolveError::PartOutOfRange(0))));
}

#[test]
fn part_past_max_rejected() {
    assert!(matches!(checked(2, 3), Err(SolveError::PartOutOfRange(3))));
}
