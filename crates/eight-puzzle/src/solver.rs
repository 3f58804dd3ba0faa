//! A* search over 8-puzzle boards.
//!
//! The engine moves through `Ready -> Running -> {Solved, Exhausted}`.
//! Before every expansion it checks whether the goal board is already
//! waiting in the frontier, so the goal is recognised as soon as it has
//! been generated rather than when it would be dequeued.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, debug_span, trace};

use crate::error::{Error, Result};
use crate::frontier::{ClosedSet, Frontier};
use crate::heuristic::{Heuristic, HeuristicKind};
use crate::node::{Node, NodeArena, NodeId};
use crate::path::Path;
use crate::puzzle::Board;

/// Configuration for a search run
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    /// Heuristic used for every node of the run
    pub heuristic: HeuristicKind,
}

impl SolverConfig {
    pub fn with_heuristic(heuristic: HeuristicKind) -> Self {
        Self { heuristic }
    }
}

/// Lifecycle of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    Ready,
    Running,
    Solved,
    Exhausted,
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchStatus::Solved | SearchStatus::Exhausted)
    }
}

/// A single A* run from one board to another
#[derive(Debug)]
pub struct SearchEngine {
    initial: Board,
    goal: Board,
    heuristic: Heuristic,
    arena: NodeArena,
    frontier: Frontier,
    closed: ClosedSet,
    status: SearchStatus,
    goal_node: Option<NodeId>,
}

impl SearchEngine {
    pub fn new(initial: Board, goal: Board, config: &SolverConfig) -> Self {
        Self {
            initial,
            goal,
            heuristic: Heuristic::new(config.heuristic, &goal),
            arena: NodeArena::new(),
            frontier: Frontier::new(),
            closed: ClosedSet::new(),
            status: SearchStatus::Ready,
            goal_node: None,
        }
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    /// Frontier size plus closed size
    pub fn nodes_generated(&self) -> usize {
        self.frontier.len() + self.closed.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    /// Advance by one expansion. A `Ready` engine is seeded first; a
    /// terminal engine is left untouched.
    pub fn step(&mut self) -> Result<SearchStatus> {
        match self.status {
            SearchStatus::Ready => self.seed(),
            SearchStatus::Running => {}
            SearchStatus::Solved | SearchStatus::Exhausted => return Ok(self.status),
        }

        if let Some(id) = self.frontier.get(&self.goal) {
            self.goal_node = Some(id);
            self.status = SearchStatus::Solved;
            return Ok(self.status);
        }

        let Some((id, board)) = self.frontier.pop() else {
            self.status = SearchStatus::Exhausted;
            return Ok(self.status);
        };

        self.expand(id, board)?;
        Ok(self.status)
    }

    /// Run to a terminal state
    pub fn run(mut self) -> Result<SearchResult> {
        let span = debug_span!("a_star", heuristic = %self.heuristic.kind());
        let _enter = span.enter();
        let start_time = Instant::now();

        while !self.step()?.is_terminal() {}

        let elapsed = start_time.elapsed();
        debug!(
            status = ?self.status,
            depth = self.goal_node.map(|id| self.arena[id].g()),
            nodes = self.nodes_generated(),
            elapsed_ms = elapsed.as_millis() as u64,
            "search finished"
        );

        Ok(self.finish(elapsed))
    }

    fn seed(&mut self) {
        let h = self.heuristic.evaluate(&self.initial);
        let root = self.arena.alloc(Node::root(self.initial, h));
        self.frontier.push(self.initial, root, 0, h);
        self.status = SearchStatus::Running;
    }

    fn expand(&mut self, id: NodeId, board: Board) -> Result<()> {
        self.closed.insert(board);
        let parent = self.arena[id].clone();
        trace!(g = parent.g(), h = parent.h(), "expanding");

        let g = parent.g() + 1;

        for (child, mv) in board.generate_moves()? {
            if self.closed.contains(&child) || !self.frontier.improves(&child, g) {
                continue;
            }
            let h = self.heuristic.evaluate(&child);
            let node = Node::child(id, &parent, child, mv, h);
            let f = node.f();
            let child_id = self.arena.alloc(node);
            self.frontier.push(child, child_id, g, f);
        }

        Ok(())
    }

    fn finish(self, elapsed: Duration) -> SearchResult {
        SearchResult {
            heuristic: self.heuristic.kind(),
            status: self.status,
            frontier_len: self.frontier.len(),
            closed_len: self.closed.len(),
            time_elapsed_ms: elapsed.as_millis() as u64,
            goal_node: self.goal_node,
            arena: self.arena,
        }
    }
}

/// Outcome of a finished search run. Owns every node the run created.
#[derive(Debug)]
pub struct SearchResult {
    heuristic: HeuristicKind,
    status: SearchStatus,
    frontier_len: usize,
    closed_len: usize,
    time_elapsed_ms: u64,
    goal_node: Option<NodeId>,
    arena: NodeArena,
}

impl SearchResult {
    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_solved(&self) -> bool {
        self.status == SearchStatus::Solved
    }

    /// Frontier size plus closed size at termination
    pub fn nodes_generated(&self) -> usize {
        self.frontier_len + self.closed_len
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier_len
    }

    pub fn closed_len(&self) -> usize {
        self.closed_len
    }

    pub fn time_elapsed_ms(&self) -> u64 {
        self.time_elapsed_ms
    }

    /// Arena id of the solved node
    pub fn goal_id(&self) -> Option<NodeId> {
        self.goal_node
    }

    pub fn goal_node(&self) -> Option<&Node> {
        self.goal_node.map(|id| &self.arena[id])
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    /// Moves and f(n) trace, if the run was solved
    pub fn path(&self) -> Option<Path> {
        self.goal_node.map(|id| Path::reconstruct(&self.arena, id))
    }

    /// The solution, or [`Error::SearchExhausted`] when there is none
    pub fn solution(&self) -> Result<Solution> {
        let path = self.path().ok_or_else(|| Error::SearchExhausted {
            nodes_generated: self.nodes_generated(),
        })?;

        Ok(Solution {
            heuristic: self.heuristic,
            depth: path.depth(),
            nodes_generated: self.nodes_generated(),
            path,
        })
    }
}

/// Everything an output record needs from a solved run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub heuristic: HeuristicKind,
    pub depth: usize,
    pub nodes_generated: usize,
    #[serde(flatten)]
    pub path: Path,
}

/// Solve `initial -> goal` with the given configuration
pub fn solve(initial: &Board, goal: &Board, config: &SolverConfig) -> Result<SearchResult> {
    SearchEngine::new(*initial, *goal, config).run()
}
