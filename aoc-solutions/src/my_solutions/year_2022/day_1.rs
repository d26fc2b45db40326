use std::cmp::Reverse;

use anyhow::{Context, anyhow};
use aoc_solver::{AocExamples, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["2022", "parsing"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// Calorie total of each blank-line separated group, in input order
    totals: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .try_fold(
                (Vec::new(), None::<u64>),
                |(mut totals, current), (line_idx, line)| -> anyhow::Result<_> {
                    let line = line.trim();

                    if line.is_empty() {
                        totals.extend(current);
                        return Ok((totals, None));
                    }

                    let calories = line
                        .parse::<u64>()
                        .with_context(|| format!("(line {}) {line:?}", line_idx + 1))?;

                    Ok((totals, Some(current.unwrap_or(0) + calories)))
                },
            )
            .and_then(|(mut totals, current)| {
                totals.extend(current);

                if totals.is_empty() {
                    Err(anyhow!("no calorie groups"))
                } else {
                    Ok(SharedData { totals })
                }
            })
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .totals
            .iter()
            .max()
            .map(u64::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no calorie groups".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .totals
            .iter()
            .sorted_unstable_by_key(|&&total| Reverse(total))
            .take(3)
            .sum::<u64>()
            .to_string())
    }
}

impl AocExamples for Solver {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "1000
2000
3000

4000

5000
6000

7000
8000
9000

10000
",
        answers: &["24000", "45000"],
    }];
}
