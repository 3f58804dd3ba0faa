//! Optimal 8-puzzle solver.
//!
//! This crate finds a shortest sequence of blank moves that turns one 3x3
//! board into another, using A* with either the Manhattan-distance or the
//! linear-conflict heuristic. It also reads the six-row problem format and
//! renders the per-run output record.

pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod input;
pub mod node;
pub mod path;
pub mod puzzle;
pub mod report;
pub mod solver;

// Re-export main types
pub use error::{Error, Result};
pub use heuristic::{Heuristic, HeuristicKind};
pub use input::{parse_problem, read_problem, Problem};
pub use node::{Node, NodeArena, NodeId};
pub use path::Path;
pub use puzzle::{Board, Move, Position};
pub use report::{output_file_name, Report, RunSummary};
pub use solver::{solve, SearchEngine, SearchResult, SearchStatus, Solution, SolverConfig};
