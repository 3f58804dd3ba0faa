//! Problem input: an initial board followed by a goal board.
//!
//! The text format is six rows of three whitespace-separated labels, the
//! first three rows being the initial board. Blank lines are ignored.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::puzzle::{Board, SIZE};

/// A pair of boards to search between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    pub initial: Board,
    pub goal: Board,
}

impl Problem {
    pub fn new(initial: Board, goal: Board) -> Self {
        Self { initial, goal }
    }

    /// Whether the goal can be reached at all. Moves preserve inversion
    /// parity on a 3x3 grid, so boards of different parity never meet.
    pub fn is_solvable(&self) -> bool {
        self.initial.has_even_parity() == self.goal.has_even_parity()
    }
}

/// Parse the six-row text format
pub fn parse_problem(text: &str) -> Result<Problem> {
    let rows: Vec<Vec<&str>> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>())
        .filter(|row| !row.is_empty())
        .collect();

    if rows.len() != 2 * SIZE {
        return Err(Error::InvalidInput {
            line_count: rows.len(),
        });
    }

    let (initial, goal) = rows.split_at(SIZE);
    Ok(Problem {
        initial: Board::from_rows(initial)?,
        goal: Board::from_rows(goal)?,
    })
}

/// Read and parse a problem file
pub fn read_problem(path: &Path) -> Result<Problem> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("read {}", path.display()), e))?;
    parse_problem(&text)
}
