//! Frontier-driven state-space search.
//!
//! Breadth-first and depth-first search share one expansion loop and differ
//! only in the [`Frontier`] they pop from and the order children are pushed.
//! A* keeps its own loop because it tracks open and closed sets separately.

mod frontier;
mod informed;
mod uninformed;

pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use informed::a_star;
pub use uninformed::{breadth_first, depth_first};

use crate::heuristic::GoalPositions;
use crate::node::SearchNode;
use crate::puzzle::Board;

/// Expansions between progress events.
const PROGRESS_INTERVAL: usize = 10_000;

/// One search instance: where to start, where to stop.
#[derive(Debug, Clone, Copy)]
pub struct Problem<'a> {
    pub start: &'a Board,
    pub goal: &'a Board,
    /// Goal coordinates, required by A*.
    pub heuristic: &'a GoalPositions,
}

impl Problem<'_> {
    fn is_goal(&self, node: &SearchNode) -> bool {
        *node.tiles == *self.goal.tiles()
    }
}

/// What a search produced.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Root to goal, or `None` when the budget ran out or the space was exhausted.
    pub path: Option<Vec<SearchNode>>,
    pub nodes_expanded: usize,
    /// Deepest node ever placed on the frontier.
    pub max_depth: u32,
    /// Open entries replaced by a strictly shallower path to the same tiles.
    pub superseded: usize,
    /// Frontier entries dropped on pop without being expanded.
    pub discarded: usize,
}

/// Counters shared by every strategy.
#[derive(Debug)]
struct Progress {
    budget: usize,
    expanded: usize,
    max_depth: u32,
    superseded: usize,
    discarded: usize,
}

impl Progress {
    fn new(budget: usize) -> Self {
        Self {
            budget,
            expanded: 0,
            max_depth: 0,
            superseded: 0,
            discarded: 0,
        }
    }

    fn discovered(&mut self, depth: u32) {
        self.max_depth = self.max_depth.max(depth);
    }

    /// Count one expansion; `false` once the budget is exceeded.
    fn expand(&mut self, frontier_len: usize) -> bool {
        self.expanded += 1;
        if self.expanded % PROGRESS_INTERVAL == 0 {
            tracing::trace!(
                expanded = self.expanded,
                frontier = frontier_len,
                max_depth = self.max_depth,
                "search progress"
            );
        }
        if self.expanded > self.budget {
            tracing::debug!(budget = self.budget, "node budget exhausted");
            return false;
        }
        true
    }

    fn finish(self, path: Option<Vec<SearchNode>>) -> SearchOutcome {
        SearchOutcome {
            path,
            nodes_expanded: self.expanded,
            max_depth: self.max_depth,
            superseded: self.superseded,
            discarded: self.discarded,
        }
    }
}
