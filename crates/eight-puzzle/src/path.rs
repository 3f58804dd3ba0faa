//! Rebuild the move sequence and f(n) trace from a solved node.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::node::{NodeArena, NodeId};
use crate::puzzle::{Board, Move};

/// Root-to-goal move sequence with the `f` value of every node on it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Path {
    pub moves: Vec<Move>,
    pub f_trace: Vec<usize>,
}

impl Path {
    /// Walk parent links from `goal` back to the root.
    ///
    /// `moves` has one entry per edge, `f_trace` one per node, both in
    /// root-to-goal order.
    pub fn reconstruct(arena: &NodeArena, goal: NodeId) -> Self {
        let mut moves = Vec::new();
        let mut f_trace = Vec::new();

        for node in arena.ancestors(goal) {
            f_trace.push(node.f());
            moves.extend(node.mv());
        }

        moves.reverse();
        f_trace.reverse();
        Self { moves, f_trace }
    }

    /// Number of moves
    pub fn depth(&self) -> usize {
        self.moves.len()
    }

    /// `f` at the last node on the path
    pub fn final_f(&self) -> Option<usize> {
        self.f_trace.last().copied()
    }

    /// Apply the moves to `start`. `Ok(None)` means a move left the grid.
    pub fn replay(&self, start: &Board) -> Result<Option<Board>> {
        let mut board = *start;
        for &mv in &self.moves {
            match board.apply(mv)? {
                Some(next) => board = next,
                None => return Ok(None),
            }
        }
        Ok(Some(board))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Node;

    #[test]
    fn test_reconstruct_chain() {
        let start: Board = "1 2 3 4 0 6 7 5 8".parse().unwrap();
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::root(start, 2));

        let down = start.apply(Move::Down).unwrap().unwrap();
        let mid = Node::child(root, &arena[root], down, Move::Down, 1);
        let mid = arena.alloc(mid);
        let right = down.apply(Move::Right).unwrap().unwrap();
        let goal = Node::child(mid, &arena[mid], right, Move::Right, 0);
        let goal = arena.alloc(goal);

        let path = Path::reconstruct(&arena, goal);
        assert_eq!(path.moves, vec![Move::Down, Move::Right]);
        assert_eq!(path.f_trace, vec![2, 2, 2]);
        assert_eq!(path.depth(), 2);
        assert_eq!(path.final_f(), Some(2));
        assert_eq!(path.replay(&start).unwrap(), Some(Board::standard_goal()));
        // read-only: no new nodes
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn test_root_only() {
        let mut arena = NodeArena::new();
        let root = arena.alloc(Node::root(Board::standard_goal(), 0));
        let path = Path::reconstruct(&arena, root);
        assert!(path.moves.is_empty());
        assert_eq!(path.f_trace, vec![0]);
    }

    #[test]
    fn test_replay_off_grid() {
        let path = Path {
            moves: vec![Move::Right],
            f_trace: vec![0, 1],
        };
        assert_eq!(path.replay(&Board::standard_goal()).unwrap(), None);
    }
}
