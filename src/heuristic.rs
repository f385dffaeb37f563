//! Manhattan distance to a fixed goal configuration.
//!
//! The goal coordinates are captured once per solver so every node shares
//! them without any process-wide state.

use crate::puzzle::{Board, Grid, Tile};

#[derive(Debug, Clone)]
pub struct GoalPositions {
    grid: Grid,
    // goal cell of each tile, indexed by tile number
    cells: Box<[usize]>,
}

impl GoalPositions {
    pub fn new(goal: &Board) -> Self {
        let mut cells = vec![0; goal.tiles().len()].into_boxed_slice();
        for (index, &tile) in goal.tiles().iter().enumerate() {
            cells[tile as usize] = index;
        }
        Self {
            grid: goal.grid(),
            cells,
        }
    }

    /// Grid distance between cell `index` and the goal cell of `tile`.
    pub fn distance(&self, tile: Tile, index: usize) -> u32 {
        let goal = self.cells[tile as usize];
        let rows = self.grid.row(index).abs_diff(self.grid.row(goal));
        let cols = self.grid.col(index).abs_diff(self.grid.col(goal));
        (rows + cols) as u32
    }

    /// Sum of the distances of every non-blank tile.
    pub fn manhattan(&self, tiles: &[Tile]) -> u32 {
        tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(index, &tile)| self.distance(tile, index))
            .sum()
    }

    /// Score of a child node given its parent's score.
    ///
    /// Only `tile` moves, from `from` to `to`, and the depth grows by one.
    pub fn child_score(&self, parent_score: u32, tile: Tile, from: usize, to: usize) -> u32 {
        parent_score + self.distance(tile, to) + 1 - self.distance(tile, from)
    }
}
