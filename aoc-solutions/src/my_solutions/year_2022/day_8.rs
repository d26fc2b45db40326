use anyhow::{anyhow, ensure};
use aoc_solver::{AocExamples, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["2022", "grid"])]
pub struct Solver;

/// Up, down, left, right as `(row, column)` steps.
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Rectangular grid of tree heights, stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.width + col]
    }

    /// Heights met walking from `(row, col)` towards the edge, the start excluded.
    fn ray(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
    ) -> impl Iterator<Item = u8> + '_ {
        std::iter::successors(Some((row, col)), move |&(r, c)| {
            let r = r.checked_add_signed(dr).filter(|&r| r < self.height)?;
            let c = c.checked_add_signed(dc).filter(|&c| c < self.width)?;
            Some((r, c))
        })
        .skip(1)
        .map(move |(r, c)| self.get(r, c))
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| (row, col)))
    }

    /// A tree is visible when every tree towards some edge is strictly shorter.
    pub fn visible(&self, row: usize, col: usize) -> bool {
        let height = self.get(row, col);
        DIRECTIONS
            .iter()
            .any(|&dir| self.ray(row, col, dir).all(|other| other < height))
    }

    /// Product over the four directions of the trees in view, the blocking tree included.
    pub fn scenic(&self, row: usize, col: usize) -> usize {
        let height = self.get(row, col);
        DIRECTIONS
            .iter()
            .map(|&dir| {
                let mut seen = 0;
                for other in self.ray(row, col, dir) {
                    seen += 1;
                    if other >= height {
                        break;
                    }
                }
                seen
            })
            .product()
    }
}

fn push_row(cells: &mut Vec<u8>, row: &str, width: usize) -> anyhow::Result<()> {
    ensure!(
        row.len() == width,
        "row has {} trees, expected {width}",
        row.len()
    );

    for b in row.bytes() {
        ensure!(b.is_ascii_digit(), "not a tree height: {:?}", b as char);
        cells.push(b - b'0');
    }

    Ok(())
}

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rows: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let width = rows.first().map_or(0, |row| row.len());
        let mut cells = Vec::with_capacity(width * rows.len());

        for (row_idx, row) in rows.iter().enumerate() {
            push_row(&mut cells, row, width)
                .map_err(|e| anyhow!("(row {}) {e}", row_idx + 1))
                .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        }

        if cells.is_empty() {
            return Err(ParseError::MissingData("empty grid".into()));
        }

        Ok(Grid {
            width,
            height: rows.len(),
            cells,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &*shared;
        Ok(grid
            .positions()
            .filter(|&(row, col)| grid.visible(row, col))
            .count()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &*shared;
        grid.positions()
            .map(|(row, col)| grid.scenic(row, col))
            .max()
            .map(|score| score.to_string())
            .ok_or_else(|| SolveError::SolveFailed("grid has no trees".into()))
    }
}

impl AocExamples for Solver {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "30373
25512
65332
33549
35390
",
        answers: &["21", "8"],
    }];
}
