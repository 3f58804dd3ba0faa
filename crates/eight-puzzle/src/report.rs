//! Output records for solved runs.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::heuristic::HeuristicKind;
use crate::input::Problem;
use crate::puzzle::Board;
use crate::solver::{SearchResult, SearchStatus, Solution};

/// Text record for one solved run: both boards, depth, node count, moves
/// and the f(n) trace.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    pub problem: &'a Problem,
    pub solution: &'a Solution,
}

impl<'a> Report<'a> {
    pub fn new(problem: &'a Problem, solution: &'a Solution) -> Self {
        Self { problem, solution }
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())
            .map_err(|e| Error::io(format!("write {}", path.display()), e))
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.problem.initial)?;
        writeln!(f)?;
        writeln!(f, "{}", self.problem.goal)?;
        writeln!(f)?;
        writeln!(f, "{}", self.solution.depth)?;
        writeln!(f, "{}", self.solution.nodes_generated)?;
        writeln!(f, "{}", join(&self.solution.path.moves))?;
        writeln!(f, "{}", join(&self.solution.path.f_trace))
    }
}

fn join<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Output file for one heuristic: `Output<N><tag>.txt`, where `<N>` is the
/// digits of the input file name (`Input1.txt` -> `Output1h1.txt`).
pub fn output_file_name(input: &Path, heuristic: HeuristicKind) -> PathBuf {
    let digits: String = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    PathBuf::from(format!("Output{digits}{}.txt", heuristic.tag()))
}

/// JSON summary of one run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub heuristic: HeuristicKind,
    pub status: SearchStatus,
    pub initial: Board,
    pub goal: Board,
    pub nodes_generated: usize,
    pub time_elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<Solution>,
}

impl RunSummary {
    pub fn new(problem: &Problem, result: &SearchResult) -> Self {
        Self {
            heuristic: result.heuristic(),
            status: result.status(),
            initial: problem.initial,
            goal: problem.goal,
            nodes_generated: result.nodes_generated(),
            time_elapsed_ms: result.time_elapsed_ms(),
            solution: result.solution().ok(),
        }
    }
}
