use anyhow::{anyhow, bail};
use aoc_solver::{AocExamples, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["2022", "sets"])]
pub struct Solver;

/// Rucksack contents as item priorities, one entry per line.
pub type SharedData = Vec<Vec<u8>>;

/// Priority of an item: `a..=z` map to 1..=26 and `A..=Z` to 27..=52.
pub fn priority(item: u8) -> Option<u8> {
    match item {
        b'a'..=b'z' => Some(item - b'a' + 1),
        b'A'..=b'Z' => Some(item - b'A' + 27),
        _ => None,
    }
}

/// Set of priorities, bit `p` set when priority `p` is present.
fn item_set(items: &[u8]) -> u64 {
    items.iter().fold(0, |set, &p| set | (1 << p))
}

/// The one priority present in every group.
fn common_item<'a>(groups: impl IntoIterator<Item = &'a [u8]>) -> Result<u8, SolveError> {
    let common = groups
        .into_iter()
        .map(item_set)
        .reduce(|a, b| a & b)
        .unwrap_or(0);

    if common.count_ones() != 1 {
        return Err(SolveError::SolveFailed(
            format!("expected exactly one common item, found {}", common.count_ones()).into(),
        ));
    }

    Ok(common.trailing_zeros() as u8)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| -> anyhow::Result<Vec<u8>> {
                if line.len() % 2 != 0 {
                    bail!("(line {}) odd number of items", line_idx + 1);
                }

                line.bytes()
                    .map(|b| {
                        priority(b).ok_or_else(|| {
                            anyhow!("(line {}) not an item: {:?}", line_idx + 1, b as char)
                        })
                    })
                    .collect()
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|bag| {
                let (left, right) = bag.split_at(bag.len() / 2);
                common_item([left, right]).map(u32::from)
            })
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let groups = shared.chunks_exact(3);

        if !groups.remainder().is_empty() {
            return Err(SolveError::SolveFailed(
                format!("{} rucksacks do not split into groups of three", shared.len()).into(),
            ));
        }

        groups
            .map(|group| common_item(group.iter().map(Vec::as_slice)).map(u32::from))
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl AocExamples for Solver {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
",
        answers: &["157", "70"],
    }];
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn example_answers() {
        let mut shared = Solver::parse(Solver::EXAMPLES[0].input).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "157");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "70");
    }

    #[test]
    fn priority_bounds() {
        assert_eq!(priority(b'a'), Some(1));
        assert_eq!(priority(b'z'), Some(26));
        assert_eq!(priority(b'A'), Some(27));
        assert_eq!(priority(b'Z'), Some(52));
        assert_eq!(priority(b'0'), None);
        assert_eq!(priority(b' '), None);
    }

    #[test]
    fn priority_is_injective_over_letters() {
        let priorities: HashSet<_> = (b'a'..=b'z')
            .chain(b'A'..=b'Z')
            .filter_map(priority)
            .collect();

        assert_eq!(priorities.len(), 52);
        assert_eq!(priorities, (1..=52).collect());
    }

    #[test]
    fn example_common_items() {
        let shared = Solver::parse(Solver::EXAMPLES[0].input).unwrap();
        let (left, right) = shared[0].split_at(shared[0].len() / 2);
        assert_eq!(common_item([left, right]).unwrap(), priority(b'p').unwrap());
    }

    #[test]
    fn no_common_item_is_an_error() {
        let mut shared = Solver::parse("abcd").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
    }

    #[test]
    fn incomplete_group_is_an_error() {
        let mut shared = Solver::parse("aa\nbb\ncc\ndd").unwrap();
        assert!(<Solver as PartSolver<2>>::solve(&mut shared).is_err());
    }

    #[test]
    fn odd_length_and_bad_items_are_rejected() {
        assert!(Solver::parse("abc").is_err());
        assert!(Solver::parse("ab\na1").is_err());
    }

    proptest! {
        #[test]
        fn only_letters_have_priorities(item in any::<u8>()) {
            prop_assert_eq!(priority(item).is_some(), item.is_ascii_alphabetic());
        }

        #[test]
        fn shared_letter_is_found(
            left in "[a-m]{1,8}",
            right in "[n-z]{1,8}",
            common in "[A-Z]",
        ) {
            let halves = (format!("{left}{common}"), format!("{common}{right}"));
            let pad = halves.0.len().max(halves.1.len());
            let line = format!("{:a<pad$}{:n<pad$}", halves.0, halves.1);
            let mut shared = Solver::parse(&line).unwrap();

            let expected = priority(common.as_bytes()[0]).unwrap().to_string();
            prop_assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), expected);
        }
    }
}
