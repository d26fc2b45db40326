use std::fmt;

use anyhow::{Context, anyhow, bail};
use aoc_solver::{AocExamples, AocParser, Example, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use log::debug;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 7, tags = ["2022", "tree"])]
pub struct Solver;

const DISK_SIZE: u64 = 70_000_000;
const UPDATE_SIZE: u64 = 30_000_000;
const SMALL_DIR_LIMIT: u64 = 100_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    Dir(Dir<'a>),
    File(File<'a>),
}

impl<'a> Node<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            Node::Dir(dir) => dir.name,
            Node::File(file) => file.name,
        }
    }

    /// File size, or the total size of everything below a directory.
    pub fn size(&self) -> u64 {
        match self {
            Node::Dir(dir) => dir.size(),
            Node::File(file) => file.size,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File<'a> {
    name: &'a str,
    size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dir<'a> {
    name: &'a str,
    children: Vec<Node<'a>>,
}

impl<'a> Dir<'a> {
    fn new(name: &'a str) -> Self {
        Self {
            name,
            children: Vec::new(),
        }
    }

    pub fn size(&self) -> u64 {
        self.children.iter().map(Node::size).sum()
    }

    /// Follows child indices down from `self`. Every step must land on a directory.
    fn dir_at(&mut self, path: &[usize]) -> Option<&mut Dir<'a>> {
        path.iter()
            .try_fold(self, |dir, &idx| match dir.children.get_mut(idx)? {
                Node::Dir(child) => Some(child),
                Node::File(_) => None,
            })
    }

    /// Index of the subdirectory `name`, created empty if it was never listed.
    fn child_dir(&mut self, name: &'a str) -> anyhow::Result<usize> {
        match self.children.iter().position(|c| c.name() == name) {
            Some(idx) => match &self.children[idx] {
                Node::Dir(_) => Ok(idx),
                Node::File(_) => bail!("{name} is a file, not a directory"),
            },
            None => {
                self.children.push(Node::Dir(Dir::new(name)));
                Ok(self.children.len() - 1)
            }
        }
    }

    fn add_file(&mut self, name: &'a str, size: u64) -> anyhow::Result<()> {
        match self.children.iter().find(|c| c.name() == name) {
            None => {
                self.children.push(Node::File(File { name, size }));
                Ok(())
            }
            Some(Node::File(existing)) if existing.size == size => Ok(()),
            Some(Node::File(existing)) => bail!(
                "{name} listed with size {size} after size {}",
                existing.size
            ),
            Some(Node::Dir(_)) => bail!("{name} is a directory, not a file"),
        }
    }

    /// Sizes of every directory in the tree, children before their parent.
    pub fn dir_sizes(&self) -> Vec<u64> {
        let mut sizes = Vec::new();
        self.collect_sizes(&mut sizes);
        sizes
    }

    fn collect_sizes(&self, sizes: &mut Vec<u64>) -> u64 {
        let total = self
            .children
            .iter()
            .map(|child| match child {
                Node::Dir(dir) => dir.collect_sizes(sizes),
                Node::File(file) => file.size,
            })
            .sum();

        sizes.push(total);
        total
    }

    fn fmt_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        writeln!(
            f,
            "{:indent$}- {} (dir, size={})",
            "",
            self.name,
            self.size(),
            indent = depth * 2
        )?;

        for child in &self.children {
            match child {
                Node::Dir(dir) => dir.fmt_tree(f, depth + 1)?,
                Node::File(file) => writeln!(
                    f,
                    "{:indent$}- {} (file, size={})",
                    "",
                    file.name,
                    file.size,
                    indent = (depth + 1) * 2
                )?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for Dir<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_tree(f, 0)
    }
}

/// Applies one terminal line to the tree. `cwd` holds child indices from the root.
fn apply_line<'a>(root: &mut Dir<'a>, cwd: &mut Vec<usize>, line: &'a str) -> anyhow::Result<()> {
    let dir = root
        .dir_at(cwd)
        .ok_or_else(|| anyhow!("working directory no longer exists"))?;

    let tokens: Vec<&'a str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        ["$", "cd", "/"] => cwd.clear(),
        ["$", "cd", ".."] => {
            cwd.pop();
        }
        ["$", "cd", name] => {
            let idx = dir.child_dir(*name)?;
            cwd.push(idx);
        }
        ["$", "ls"] => {}
        ["$", ..] => bail!("unknown command {line:?}"),
        ["dir", name] => {
            dir.child_dir(*name)?;
        }
        [size, name] => {
            let size = size
                .parse()
                .with_context(|| format!("bad file size {size:?}"))?;
            dir.add_file(*name, size)?;
        }
        _ => bail!("unrecognised output {line:?}"),
    }

    Ok(())
}

impl AocParser for Solver {
    type SharedData<'a> = Dir<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut root = Dir::new("/");
        let mut cwd = Vec::new();
        let mut seen_any = false;

        for (line_idx, line) in input.lines().map(str::trim).enumerate() {
            if line.is_empty() {
                continue;
            }

            seen_any = true;
            apply_line(&mut root, &mut cwd, line)
                .with_context(|| format!("line {}", line_idx + 1))
                .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        }

        if !seen_any {
            return Err(ParseError::MissingData("empty terminal output".into()));
        }

        debug!("directory tree:\n{root}");
        Ok(root)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .dir_sizes()
            .into_iter()
            .filter(|&size| size <= SMALL_DIR_LIMIT)
            .sum::<u64>()
            .to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sizes = shared.dir_sizes();
        let used = sizes.last().copied().unwrap_or(0);
        let needed = UPDATE_SIZE.saturating_sub(DISK_SIZE.saturating_sub(used));

        sizes
            .into_iter()
            .filter(|&size| size >= needed)
            .min()
            .map(|size| size.to_string())
            .ok_or_else(|| {
                SolveError::SolveFailed(format!("no directory frees {needed} bytes").into())
            })
    }
}

impl AocExamples for Solver {
    const EXAMPLES: &'static [Example] = &[Example {
        input: "$ cd /
$ ls
dir a
14848514 b.txt
8504156 c.dat
dir d
$ cd a
$ ls
dir e
29116 f
2557 g
62596 h.lst
$ cd e
$ ls
584 i
$ cd ..
$ cd ..
$ cd d
$ ls
4060174 j
8033020 d.log
5626152 d.ext
7214296 k
",
        answers: &["95437", "24933642"],
    }];
}
