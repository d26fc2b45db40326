use std::collections::BTreeMap;

use anyhow::{Context, anyhow, bail, ensure};
use aoc_solver::{AocExamples, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["2022", "simulation"])]
pub struct Solver;

/// Crate stacks keyed by their label, each listed bottom crate first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Stacks(BTreeMap<u32, Vec<char>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    count: usize,
    from: u32,
    to: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crane {
    /// Lifts one crate at a time, so a moved run lands reversed.
    OneAtATime,
    /// Lifts the whole run at once, keeping its order.
    Block,
}

impl Stacks {
    fn apply(&mut self, mv: &Move, crane: Crane) -> anyhow::Result<()> {
        ensure!(
            self.0.contains_key(&mv.to),
            "no stack labelled {} to move onto",
            mv.to
        );

        let from = self
            .0
            .get_mut(&mv.from)
            .ok_or_else(|| anyhow!("no stack labelled {} to move from", mv.from))?;

        let at = from.len().checked_sub(mv.count).ok_or_else(|| {
            anyhow!(
                "cannot move {} crates off stack {} holding {}",
                mv.count,
                mv.from,
                from.len()
            )
        })?;

        let mut lifted = from.split_off(at);

        if crane == Crane::OneAtATime {
            lifted.reverse();
        }

        if let Some(to) = self.0.get_mut(&mv.to) {
            to.extend(lifted);
        }

        Ok(())
    }

    /// Top crate of every stack in label order. Empty stacks are skipped.
    pub fn tops(&self) -> String {
        self.0.values().filter_map(|s| s.last()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct SharedData {
    stacks: Stacks,
    moves: Vec<Move>,
}

impl SharedData {
    /// Replays every move on a fresh copy of the starting stacks.
    fn rearranged(&self, crane: Crane) -> Result<Stacks, SolveError> {
        let mut stacks = self.stacks.clone();

        for (n, mv) in self.moves.iter().enumerate() {
            stacks
                .apply(mv, crane)
                .with_context(|| format!("move {}", n + 1))
                .map_err(|e| SolveError::SolveFailed(e.into()))?;
        }

        Ok(stacks)
    }
}

fn parse_drawing(lines: &[&str]) -> anyhow::Result<Stacks> {
    let Some((labels, rows)) = lines.split_last() else {
        bail!("missing stack drawing");
    };

    let label_pattern = Regex::new(r"\d+")?;
    let mut stacks = Stacks::default();

    for found in label_pattern.find_iter(labels) {
        let label = found.as_str().parse::<u32>()?;
        let column = found.start();
        let mut stack = Vec::new();

        for row in rows.iter().rev() {
            match row.as_bytes().get(column) {
                Some(c) if c.is_ascii_alphabetic() => stack.push(*c as char),
                Some(b' ') | None => {}
                Some(&other) => bail!(
                    "unexpected {:?} above stack {label} in {row:?}",
                    other as char
                ),
            }
        }

        ensure!(
            stacks.0.insert(label, stack).is_none(),
            "stack {label} labelled twice"
        );
    }

    ensure!(!stacks.0.is_empty(), "no stack labels in {labels:?}");
    Ok(stacks)
}

fn parse_moves<'a>(lines: impl Iterator<Item = (usize, &'a str)>) -> anyhow::Result<Vec<Move>> {
    let pattern = Regex::new(r"^move (\d+) from (\d+) to (\d+)$")?;

    lines
        .filter(|(_, line)| !line.is_empty())
        .map(|(line_idx, line)| -> anyhow::Result<Move> {
            let (_, [count, from, to]) = pattern
                .captures(line)
                .ok_or_else(|| anyhow!("(line {}) not a move: {line:?}", line_idx + 1))?
                .extract();

            Ok(Move {
                count: count.parse()?,
                from: from.parse()?,
                to: to.parse()?,
            })
        })
        .collect()
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim_end).enumerate();

        let drawing: Vec<&str> = lines
            .by_ref()
            .map(|(_, line)| line)
            .take_while(|line| !line.is_empty())
            .collect();

        parse_drawing(&drawing)
            .and_then(|stacks| {
                let moves = parse_moves(lines)?;
                Ok(SharedData { stacks, moves })
            })
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.rearranged(Crane::OneAtATime)?.tops())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.rearranged(Crane::Block)?.tops())
    }
}

impl AocExamples for Solver {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "    [D]
[N] [C]
[Z] [M] [P]
 1   2   3

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2
",
        answers: &["CMZ", "MCD"],
    }];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacks(entries: &[(u32, &str)]) -> Stacks {
        Stacks(
            entries
                .iter()
                .map(|&(label, crates)| (label, crates.chars().collect()))
                .collect(),
        )
    }

    #[test]
    fn example_drawing() {
        let shared = Solver::parse(Solver::EXAMPLES[0].input).unwrap();
        assert_eq!(shared.stacks, stacks(&[(1, "ZN"), (2, "MCD"), (3, "P")]));
        assert_eq!(shared.moves.len(), 4);
        assert_eq!(
            shared.moves[1],
            Move {
                count: 3,
                from: 1,
                to: 3
            }
        );
    }

    #[test]
    fn example_answers() {
        let mut shared = Solver::parse(Solver::EXAMPLES[0].input).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), "CMZ");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "MCD");
    }

    #[test]
    fn parts_start_from_the_parsed_stacks() {
        let mut shared = Solver::parse(Solver::EXAMPLES[0].input).unwrap();
        let before = shared.stacks.clone();

        let first = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "MCD");
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut shared).unwrap(), first);
        assert_eq!(shared.stacks, before);
    }

    #[test]
    fn cranes_differ_only_for_multi_crate_moves() {
        let mv = Move {
            count: 2,
            from: 1,
            to: 2,
        };

        let mut single = stacks(&[(1, "ABC"), (2, "")]);
        let mut block = single.clone();
        single.apply(&mv, Crane::OneAtATime).unwrap();
        block.apply(&mv, Crane::Block).unwrap();

        assert_eq!(single, stacks(&[(1, "A"), (2, "CB")]));
        assert_eq!(block, stacks(&[(1, "A"), (2, "BC")]));
        assert_ne!(single.tops(), block.tops());

        let one = Move { count: 1, ..mv };
        let mut single = stacks(&[(1, "ABC"), (2, "")]);
        let mut block = single.clone();
        single.apply(&one, Crane::OneAtATime).unwrap();
        block.apply(&one, Crane::Block).unwrap();
        assert_eq!(single, block);
    }

    #[test]
    fn empty_stack_contributes_nothing_to_tops() {
        assert_eq!(stacks(&[(1, "AB"), (2, ""), (3, "C")]).tops(), "BC");
    }

    #[test]
    fn impossible_moves_fail() {
        let mut overdraw = stacks(&[(1, "A"), (2, "")]);
        let mv = Move {
            count: 2,
            from: 1,
            to: 2,
        };
        assert!(overdraw.apply(&mv, Crane::Block).is_err());
        assert_eq!(overdraw, stacks(&[(1, "A"), (2, "")]));

        let mut shared = Solver::parse("[A]\n 1\n\nmove 1 from 1 to 7\n").unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut shared).is_err());
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert!(Solver::parse("[A]\n 1\n\nmove one from 1 to 2").is_err());
        assert!(Solver::parse("[A]\n\nmove 1 from 1 to 2").is_err());
        assert!(Solver::parse("-\n1\n").is_err());
    }
}
