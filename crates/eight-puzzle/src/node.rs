//! Search-tree nodes and the arena that owns them.
//!
//! Nodes refer to their parent by [`NodeId`]. The arena belongs to one
//! search run and is dropped as a whole, so parent links stay valid for
//! as long as any node is reachable.

use std::ops::Index;

use crate::puzzle::{Board, Move};

/// Stable handle to a node in a [`NodeArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A vertex of the search tree
#[derive(Debug, Clone)]
pub struct Node {
    board: Board,
    mv: Option<Move>,
    g: usize,
    h: usize,
    parent: Option<NodeId>,
}

impl Node {
    pub fn root(board: Board, h: usize) -> Self {
        Self {
            board,
            mv: None,
            g: 0,
            h,
            parent: None,
        }
    }

    pub fn child(parent_id: NodeId, parent: &Node, board: Board, mv: Move, h: usize) -> Self {
        Self {
            board,
            mv: Some(mv),
            g: parent.g + 1,
            h,
            parent: Some(parent_id),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Move that produced this node, `None` for the root
    pub fn mv(&self) -> Option<Move> {
        self.mv
    }

    pub fn g(&self) -> usize {
        self.g
    }

    pub fn h(&self) -> usize {
        self.h
    }

    pub fn f(&self) -> usize {
        self.g + self.h
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Owner of every node created during one search run
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk from `id` up to the root, `id` first
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: Some(id),
        }
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

/// Iterator over a node and its ancestors
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<&'a Node> {
        let node = self.arena.get(self.next?)?;
        self.next = node.parent;
        Some(node)
    }
}
