use aoc_solver::{AocExamples, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["2022", "window"])]
pub struct Solver;

const PACKET_MARKER: usize = 4;
const MESSAGE_MARKER: usize = 14;

/// One-based position of the last character of the first `window`-long run
/// of pairwise distinct characters.
pub fn first_marker(stream: &[u8], window: usize) -> Option<usize> {
    if window == 0 {
        return None;
    }

    stream
        .windows(window)
        .position(|w| w.iter().all_unique())
        .map(|start| start + window)
}

fn solve_marker(stream: &[u8], window: usize) -> Result<String, SolveError> {
    first_marker(stream, window)
        .map(|position| position.to_string())
        .ok_or_else(|| {
            SolveError::SolveFailed(format!("no run of {window} distinct characters").into())
        })
}

impl AocParser for Solver {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stream = input.trim();

        if stream.is_empty() {
            return Err(ParseError::MissingData("empty datastream".into()));
        }

        if let Some((at, c)) = stream
            .char_indices()
            .find(|(_, c)| !c.is_ascii_lowercase())
        {
            return Err(ParseError::InvalidFormat(format!(
                "datastream must be lowercase letters, found {c:?} at byte {at}"
            )));
        }

        Ok(stream.as_bytes())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_marker(shared, PACKET_MARKER)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_marker(shared, MESSAGE_MARKER)
    }
}

impl AocExamples for Solver {
    const EXAMPLES: &'static [Example] = &[
        Example {
            input: "mjqjpqmgbljsphdztnvjfqwrcgsmlb\n",
            answers: &["7", "19"],
        },
        Example {
            input: "bvwbjplbgvbhsrlpgdmjqwftvncz\n",
            answers: &["5", "23"],
        },
        Example {
            input: "nppdvjthqldpwncqszvftbrmjlhg\n",
            answers: &["6", "23"],
        },
        Example {
            input: "nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg\n",
            answers: &["10", "29"],
        },
        Example {
            input: "zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw\n",
            answers: &["11", "26"],
        },
    ];
}
