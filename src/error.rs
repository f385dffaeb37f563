use thiserror::Error;

use crate::puzzle::Move;

/// Problems with a tile configuration, detected before any search runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("tile configuration is empty")]
    Empty,
    #[error("{len} tiles do not form a square grid")]
    NotSquare { len: usize },
    #[error("{len} tiles exceed the supported grid size")]
    TooLarge { len: usize },
    #[error("tiles are not a permutation of 0..{len}")]
    NotPermutation { len: usize },
    #[error("`{token}` is not a tile number")]
    InvalidTile { token: String },
    #[error("goal side {goal} does not match initial side {initial}")]
    SideMismatch { initial: usize, goal: usize },
    #[error("unknown search method `{name}` (expected bfs, dfs or ast)")]
    UnknownMethod { name: String },
}

/// Reasons a [`Solver`](crate::solver::Solver) cannot be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("the initial configuration cannot reach the goal")]
    Unsolvable,
}

/// A move that does not fit the blank's position on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot move the blank {} from index {blank}", .mv.name())]
pub struct InvalidMove {
    pub blank: usize,
    pub mv: Move,
}
