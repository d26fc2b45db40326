use anyhow::{Context, anyhow, ensure};
use aoc_solver::{AocExamples, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["2022", "intervals"])]
pub struct Solver;

/// Inclusive section range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    start: u32,
    end: u32,
}

impl Assignment {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `other` lies entirely within `self`.
    pub fn contains(&self, other: &Assignment) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn overlaps(&self, other: &Assignment) -> bool {
        self.end >= other.start && other.end >= self.start
    }
}

pub type SharedData = Vec<(Assignment, Assignment)>;

fn parse_pair(pattern: &Regex, line: &str) -> anyhow::Result<(Assignment, Assignment)> {
    let (_, bounds) = pattern
        .captures(line)
        .ok_or_else(|| anyhow!("expected `a-b,c-d`, got {line:?}"))?
        .extract::<4>();

    let [a, b, c, d] = bounds.map(str::parse::<u32>);
    let (a, b, c, d) = (
        a.context("section id")?,
        b.context("section id")?,
        c.context("section id")?,
        d.context("section id")?,
    );

    ensure!(a <= b && c <= d, "range ends before it starts: {line:?}");
    Ok((Assignment::new(a, b), Assignment::new(c, d)))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pattern = Regex::new(r"^(\d+)-(\d+),(\d+)-(\d+)$")
            .map_err(|e| ParseError::Other(e.to_string()))?;

        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(line_idx, line)| {
                parse_pair(&pattern, line).with_context(|| format!("line {}", line_idx + 1))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|(a, b)| a.contains(b) || b.contains(a))
            .count()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|(a, b)| a.overlaps(b))
            .count()
            .to_string())
    }
}

impl AocExamples for Solver {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "2-4,6-8
2-3,4-5
5-7,7-9
2-8,3-7
6-6,4-6
2-6,4-8
",
        answers: &["2", "4"],
    }];
}
