use rustc_hash::{FxHashMap, FxHashSet};

use super::{Frontier, PriorityFrontier, Problem, Progress, SearchOutcome};
use crate::node::{NodeArena, NodeId, SearchNode};
use crate::puzzle::{MoveOrder, Tile};

/// A* on `depth + manhattan`.
///
/// Closed configurations are never expanded again. An open configuration is
/// replaced only by a strictly shallower path; the replaced heap entry stays
/// in the heap and is dropped when it surfaces.
pub fn a_star(problem: &Problem<'_>, budget: usize) -> SearchOutcome {
    let grid = problem.start.grid();
    let heuristic = problem.heuristic;
    let mut arena = NodeArena::new();
    let mut frontier = PriorityFrontier::default();
    let mut progress = Progress::new(budget);
    let mut open: FxHashMap<Box<[Tile]>, NodeId> = FxHashMap::default();
    let mut closed: FxHashSet<Box<[Tile]>> = FxHashSet::default();

    let root = SearchNode::root(problem.start, Some(heuristic));
    let tiles = root.tiles.clone();
    let id = arena.push(root);
    open.insert(tiles, id);
    frontier.push(id, arena.get(id));

    while let Some(id) = frontier.pop() {
        let node = arena.get(id);
        // Superseded entries, and entries whose configuration is closed, are
        // no longer the open entry for their tiles.
        if open.get(&node.tiles) != Some(&id) {
            progress.discarded += 1;
            continue;
        }
        if problem.is_goal(node) {
            let path = arena.path_to(id).into_iter().cloned().collect();
            return progress.finish(Some(path));
        }
        if !progress.expand(frontier.len()) {
            return progress.finish(None);
        }
        if let Some((tiles, _)) = open.remove_entry(&node.tiles) {
            closed.insert(tiles);
        }

        let children: Vec<SearchNode> = grid
            .neighbours(node.blank, node.incoming, MoveOrder::Forward)
            .map(|(mv, to)| node.child(id, mv, to, Some(heuristic)))
            .filter(|child| !closed.contains(&child.tiles))
            .collect();

        for child in children {
            if let Some(&existing) = open.get(&child.tiles) {
                if arena.get(existing).depth <= child.depth {
                    continue;
                }
                progress.superseded += 1;
            }
            progress.discovered(child.depth);
            let tiles = child.tiles.clone();
            let child_id = arena.push(child);
            open.insert(tiles, child_id);
            frontier.push(child_id, arena.get(child_id));
        }
    }

    progress.finish(None)
}
