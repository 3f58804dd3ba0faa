//! Cost-to-goal estimates for A*.
//!
//! A [`Heuristic`] is built once per search run from the goal board and
//! owns the tile -> goal position table for that goal.
//!
//! Manhattan distance never overestimates. Linear conflict counts every
//! reversed pair in a line, which can overshoot by two on boards where
//! three tiles of one line are fully reversed.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::puzzle::{Board, Position, BLANK, CELLS, SIZE};

/// Heuristic strategy, fixed for the duration of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    /// h1: sum of Manhattan distances
    #[default]
    Manhattan,
    /// h2: Manhattan plus two moves per linear conflict
    LinearConflict,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 2] = [HeuristicKind::Manhattan, HeuristicKind::LinearConflict];

    /// Short tag used in output file names
    pub fn tag(self) -> &'static str {
        match self {
            HeuristicKind::Manhattan => "h1",
            HeuristicKind::LinearConflict => "h2",
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeuristicKind::Manhattan => f.write_str("Manhattan Distance"),
            HeuristicKind::LinearConflict => f.write_str("Linear Conflict"),
        }
    }
}

/// Heuristic evaluator bound to one goal board
#[derive(Debug, Clone)]
pub struct Heuristic {
    kind: HeuristicKind,
    goal_positions: [Position; CELLS],
}

impl Heuristic {
    pub fn new(kind: HeuristicKind, goal: &Board) -> Self {
        let mut goal_positions = [Position::new(0, 0); CELLS];
        for (pos, tile) in goal.tiles() {
            goal_positions[tile as usize] = pos;
        }
        Self {
            kind,
            goal_positions,
        }
    }

    pub fn kind(&self) -> HeuristicKind {
        self.kind
    }

    /// Where `tile` sits on the goal board
    pub fn goal_position(&self, tile: u8) -> Position {
        self.goal_positions[tile as usize]
    }

    /// Estimate for `board` under the configured strategy
    pub fn evaluate(&self, board: &Board) -> usize {
        match self.kind {
            HeuristicKind::Manhattan => self.manhattan(board),
            HeuristicKind::LinearConflict => self.linear_conflict(board),
        }
    }

    pub fn manhattan(&self, board: &Board) -> usize {
        board
            .tiles()
            .filter(|&(_, tile)| tile != BLANK)
            .map(|(pos, tile)| pos.manhattan(self.goal_position(tile)))
            .sum()
    }

    pub fn linear_conflict(&self, board: &Board) -> usize {
        self.manhattan(board) + 2 * self.count_linear_conflicts(board)
    }

    /// Pairs of tiles that share their goal row (or column) but sit in
    /// reversed order. Rows and columns are counted independently.
    pub fn count_linear_conflicts(&self, board: &Board) -> usize {
        let mut conflicts = 0;

        for line in 0..SIZE {
            // Goal columns of the tiles in this row whose goal row is this row
            let row_targets: SmallVec<[usize; SIZE]> = (0..SIZE)
                .map(|col| board.tile(Position::new(line, col)))
                .filter(|&tile| tile != BLANK)
                .map(|tile| self.goal_position(tile))
                .filter(|goal| goal.row == line)
                .map(|goal| goal.col)
                .collect();
            conflicts += count_inversions(&row_targets);

            let col_targets: SmallVec<[usize; SIZE]> = (0..SIZE)
                .map(|row| board.tile(Position::new(row, line)))
                .filter(|&tile| tile != BLANK)
                .map(|tile| self.goal_position(tile))
                .filter(|goal| goal.col == line)
                .map(|goal| goal.row)
                .collect();
            conflicts += count_inversions(&col_targets);
        }

        conflicts
    }
}

fn count_inversions(targets: &[usize]) -> usize {
    targets
        .iter()
        .enumerate()
        .map(|(i, &a)| targets[i + 1..].iter().filter(|&&b| a > b).count())
        .sum()
}
