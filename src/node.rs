//! Search nodes and the arena that owns them.
//!
//! Parent links are arena indices, so a node never borrows its parent and
//! the whole tree is dropped with the arena once a search ends.

use crate::heuristic::GoalPositions;
use crate::puzzle::{swap_blank, Board, Grid, Move, Tile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One tile configuration reached during a search.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub tiles: Box<[Tile]>,
    pub blank: usize,
    pub parent: Option<NodeId>,
    pub incoming: Option<Move>,
    pub depth: u32,
    /// `depth + manhattan` when the search is informed, otherwise zero.
    pub score: u32,
}

impl SearchNode {
    pub fn root(board: &Board, heuristic: Option<&GoalPositions>) -> Self {
        Self {
            tiles: board.tiles().into(),
            blank: board.blank(),
            parent: None,
            incoming: None,
            depth: 0,
            score: heuristic.map_or(0, |h| h.manhattan(board.tiles())),
        }
    }

    /// The node produced by moving the blank to `to` with `mv`.
    pub fn child(
        &self,
        id: NodeId,
        mv: Move,
        to: usize,
        heuristic: Option<&GoalPositions>,
    ) -> Self {
        let tile = self.tiles[to];
        let score = heuristic.map_or(0, |h| h.child_score(self.score, tile, to, self.blank));
        Self {
            tiles: swap_blank(&self.tiles, self.blank, to),
            blank: to,
            parent: Some(id),
            incoming: Some(mv),
            depth: self.depth + 1,
            score,
        }
    }

    pub fn to_board(&self, grid: Grid) -> Board {
        Board::from_parts(grid, self.tiles.clone(), self.blank)
    }
}

#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node`; ids are handed out in insertion order.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.index()]
    }

    /// Nodes from the root down to `id`.
    pub fn path_to(&self, id: NodeId) -> Vec<&SearchNode> {
        let mut path = Vec::with_capacity(self.get(id).depth as usize + 1);
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let node = self.get(current);
            path.push(node);
            cursor = node.parent;
        }
        path.reverse();
        path
    }
}
