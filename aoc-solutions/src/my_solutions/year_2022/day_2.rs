use anyhow::{anyhow, bail};
use aoc_solver::{AocExamples, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 2, tags = ["2022", "lookup"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rock,
    Paper,
    Scissors,
}

impl Shape {
    fn index(self) -> usize {
        self as usize
    }

    fn score(self) -> u32 {
        self as u32 + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Lose,
    Draw,
    Win,
}

impl Outcome {
    fn index(self) -> usize {
        self as usize
    }

    fn score(self) -> u32 {
        self as u32 * 3
    }
}

/// The second column exactly as read. What it stands for depends on the part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    X,
    Y,
    Z,
}

impl Column {
    fn as_response(self) -> Shape {
        match self {
            Column::X => Shape::Rock,
            Column::Y => Shape::Paper,
            Column::Z => Shape::Scissors,
        }
    }

    fn as_target(self) -> Outcome {
        match self {
            Column::X => Outcome::Lose,
            Column::Y => Outcome::Draw,
            Column::Z => Outcome::Win,
        }
    }
}

use Outcome::{Draw, Lose, Win};
use Shape::{Paper, Rock, Scissors};

/// Outcome for us, indexed by `[opponent][response]`.
const OUTCOMES: [[Outcome; 3]; 3] = [
    [Draw, Win, Lose],
    [Lose, Draw, Win],
    [Win, Lose, Draw],
];

/// Shape to play, indexed by `[opponent][target outcome]`.
const RESPONSES: [[Shape; 3]; 3] = [
    [Scissors, Rock, Paper],
    [Rock, Paper, Scissors],
    [Paper, Scissors, Rock],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    opponent: Shape,
    unknown: Column,
}

pub fn score(opponent: Shape, response: Shape) -> u32 {
    response.score() + OUTCOMES[opponent.index()][response.index()].score()
}

pub fn response_for(opponent: Shape, target: Outcome) -> Shape {
    RESPONSES[opponent.index()][target.index()]
}

fn parse_round(line: &str) -> anyhow::Result<Round> {
    let mut tokens = line.split_whitespace();

    let (Some(opponent), Some(unknown), None) = (tokens.next(), tokens.next(), tokens.next())
    else {
        bail!("expected two columns, got {line:?}");
    };

    let opponent = match opponent {
        "A" => Shape::Rock,
        "B" => Shape::Paper,
        "C" => Shape::Scissors,
        other => bail!("opponent move must be A, B or C, got {other:?}"),
    };

    let unknown = match unknown {
        "X" => Column::X,
        "Y" => Column::Y,
        "Z" => Column::Z,
        other => bail!("second column must be X, Y or Z, got {other:?}"),
    };

    Ok(Round { opponent, unknown })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Round>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_idx, line)| {
                parse_round(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|round| score(round.opponent, round.unknown.as_response()))
            .sum::<u32>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .map(|round| {
                let response = response_for(round.opponent, round.unknown.as_target());
                score(round.opponent, response)
            })
            .sum::<u32>()
            .to_string())
    }
}

impl AocExamples for Solver {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "A Y\nB X\nC Z\n",
        answers: &["15", "12"],
    }];
}
