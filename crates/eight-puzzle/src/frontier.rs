//! Open and closed sets for A*.
//!
//! The [`Frontier`] removes nodes in order of lowest `f`, breaking ties in
//! favour of the node inserted first, and answers "is this board waiting
//! to be expanded" in constant time. The [`ClosedSet`] records boards that
//! have already been expanded.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::node::NodeId;
use crate::puzzle::Board;

#[derive(Debug, Clone, PartialEq, Eq)]
struct FrontierEntry {
    f: usize,
    seq: u64,
    id: NodeId,
    board: Board,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reversed so that `BinaryHeap` pops the lowest `f`, then the lowest `seq`
impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Waiting {
    id: NodeId,
    g: usize,
}

/// Generated but not yet expanded nodes.
///
/// At most one node per board is live. Offering a board that is already
/// waiting only succeeds with a strictly smaller `g`; the node it replaces
/// stays in the heap and is skipped when it surfaces.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    members: FxHashMap<Board, Waiting>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a node reaching `board` with cost `g` should be queued
    pub fn improves(&self, board: &Board, g: usize) -> bool {
        self.members.get(board).map_or(true, |waiting| g < waiting.g)
    }

    /// Queue a node, superseding any node already waiting for `board`
    pub fn push(&mut self, board: Board, id: NodeId, g: usize, f: usize) {
        self.members.insert(board, Waiting { id, g });
        self.heap.push(FrontierEntry {
            f,
            seq: self.next_seq,
            id,
            board,
        });
        self.next_seq += 1;
    }

    /// Remove the node with the smallest `f`, earliest-inserted on ties
    pub fn pop(&mut self) -> Option<(NodeId, Board)> {
        while let Some(entry) = self.heap.pop() {
            match self.members.get(&entry.board) {
                Some(waiting) if waiting.id == entry.id => {
                    self.members.remove(&entry.board);
                    return Some((entry.id, entry.board));
                }
                // superseded
                _ => continue,
            }
        }
        None
    }

    /// Node waiting for `board`, if any
    pub fn get(&self, board: &Board) -> Option<NodeId> {
        self.members.get(board).map(|waiting| waiting.id)
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.members.contains_key(board)
    }

    /// Number of live nodes
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Boards that have already been expanded
#[derive(Debug, Default)]
pub struct ClosedSet {
    boards: FxHashSet<Board>,
}

impl ClosedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the board was not closed before
    pub fn insert(&mut self, board: Board) -> bool {
        self.boards.insert(board)
    }

    pub fn contains(&self, board: &Board) -> bool {
        self.boards.contains(board)
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}
