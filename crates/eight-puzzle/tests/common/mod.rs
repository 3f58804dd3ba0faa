//! Shared helpers for the integration tests.
//!
//! Distances are computed once by breadth-first search outward from the
//! standard goal; moves are reversible, so the distance from the goal to a
//! board equals the length of the shortest solution from that board.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::OnceLock;

use eight_puzzle::{Board, Move};

/// Exact solution length from every board that can reach the standard goal
pub fn goal_distances() -> &'static HashMap<Board, usize> {
    static DISTANCES: OnceLock<HashMap<Board, usize>> = OnceLock::new();
    DISTANCES.get_or_init(|| {
        let goal = Board::standard_goal();
        let mut distances = HashMap::from([(goal, 0)]);
        let mut queue = VecDeque::from([goal]);

        while let Some(board) = queue.pop_front() {
            let next = distances[&board] + 1;
            for (child, _) in board.generate_moves().expect("valid board") {
                distances.entry(child).or_insert_with(|| {
                    queue.push_back(child);
                    next
                });
            }
        }
        distances
    })
}

/// Board reached from the standard goal by applying `walk` (indices into
/// [`Move::ALL`]), skipping moves that would leave the grid.
pub fn scrambled(walk: &[usize]) -> Board {
    walk.iter().fold(Board::standard_goal(), |board, &i| {
        board
            .apply(Move::ALL[i % Move::ALL.len()])
            .expect("valid board")
            .unwrap_or(board)
    })
}

pub fn board(s: &str) -> Board {
    s.parse().expect("valid board literal")
}
