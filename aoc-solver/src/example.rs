//! Built-in example inputs and the self-check that runs against them

use crate::error::{CheckError, ParseError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// A small puzzle input with its known answers
///
/// `answers[i]` is the expected answer for part `i + 1`. Parts past the end
/// of the slice are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Example {
    pub input: &'static str,
    pub answers: &'static [&'static str],
}

impl Example {
    /// Expected answer for a part, if one is known
    pub fn answer(&self, part: u8) -> Option<&'static str> {
        let index = usize::from(part).checked_sub(1)?;
        self.answers.get(index).copied()
    }
}

/// Solvers that ship example inputs for self-checking
///
/// The first example is the primary one: it stands in for the puzzle input
/// when none is given.
///
/// ```
/// use aoc_solver::{AocExamples, AocParser, Example, ParseError, SolveError, Solver};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Vec<u32>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Sum {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Vec<u32>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<u32>().to_string())
///     }
/// }
///
/// impl AocExamples for Sum {
///     const EXAMPLES: &'static [Example] = &[Example { input: "1\n2", answers: &["3"] }];
/// }
///
/// assert_eq!(aoc_solver::check_examples::<Sum>(2022, 1).unwrap(), 1);
/// ```
pub trait AocExamples: Solver {
    const EXAMPLES: &'static [Example];
}

/// Check every example of `S` against its known answers
///
/// Returns the number of answers that were compared.
pub fn check_examples<S>(year: u16, day: u8) -> Result<usize, CheckError>
where
    S: AocExamples + 'static,
{
    check_with(year, day, S::EXAMPLES, |input| {
        SolverInstance::<S>::new(year, day, input).map(|s| Box::new(s) as Box<dyn DynSolver>)
    })
}

/// Run the self-check using an arbitrary solver factory
pub(crate) fn check_with<F>(
    year: u16,
    day: u8,
    examples: &[Example],
    create: F,
) -> Result<usize, CheckError>
where
    F: Fn(&'static str) -> Result<Box<dyn DynSolver>, ParseError>,
{
    if examples.is_empty() {
        return Err(CheckError::NoExamples(year, day));
    }

    let mut checked = 0;

    for (index, example) in examples.iter().enumerate() {
        let mut solver = create(example.input).map_err(SolverError::from)?;

        for part in 1..=solver.parts() {
            let Some(expected) = example.answer(part) else {
                continue;
            };

            let actual = solver.solve(part).map_err(SolverError::from)?.answer;

            if actual != expected {
                return Err(CheckError::Mismatch {
                    year,
                    day,
                    example: index,
                    part,
                    expected: expected.to_string(),
                    actual,
                });
            }

            log::debug!("{year}/{day:02} example {index} part {part}: {actual}");
            checked += 1;
        }
    }

    Ok(checked)
}
