use rustc_hash::FxHashSet;

use super::{FifoFrontier, Frontier, LifoFrontier, Problem, Progress, SearchOutcome};
use crate::node::{NodeArena, SearchNode};
use crate::puzzle::{MoveOrder, Tile};

/// Shortest solution by move count.
pub fn breadth_first(problem: &Problem<'_>, budget: usize) -> SearchOutcome {
    explore(problem, budget, FifoFrontier::default(), MoveOrder::Forward)
}

/// Children are pushed in reverse so they pop in canonical order.
pub fn depth_first(problem: &Problem<'_>, budget: usize) -> SearchOutcome {
    explore(problem, budget, LifoFrontier::default(), MoveOrder::Reverse)
}

fn explore<F: Frontier>(
    problem: &Problem<'_>,
    budget: usize,
    mut frontier: F,
    order: MoveOrder,
) -> SearchOutcome {
    let grid = problem.start.grid();
    let mut arena = NodeArena::new();
    let mut progress = Progress::new(budget);
    // A configuration leaves the frontier only by being expanded, so one set
    // covers both "on the frontier" and "already visited".
    let mut discovered: FxHashSet<Box<[Tile]>> = FxHashSet::default();

    let root = SearchNode::root(problem.start, None);
    discovered.insert(root.tiles.clone());
    let id = arena.push(root);
    frontier.push(id, arena.get(id));

    while let Some(id) = frontier.pop() {
        let node = arena.get(id);
        if problem.is_goal(node) {
            let path = arena.path_to(id).into_iter().cloned().collect();
            return progress.finish(Some(path));
        }
        if !progress.expand(frontier.len()) {
            return progress.finish(None);
        }

        let children: Vec<SearchNode> = grid
            .neighbours(node.blank, node.incoming, order)
            .map(|(mv, to)| node.child(id, mv, to, None))
            .filter(|child| !discovered.contains(&child.tiles))
            .collect();

        for child in children {
            discovered.insert(child.tiles.clone());
            progress.discovered(child.depth);
            let child_id = arena.push(child);
            frontier.push(child_id, arena.get(child_id));
        }
    }

    progress.finish(None)
}
