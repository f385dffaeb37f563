//! tile-search: a sliding-tile puzzle (8-puzzle, 15-puzzle, ..) solver.
//!
//! This crate provides:
//! - A validated `Board` with a move generator and the parity-based solvability test (`puzzle`)
//! - Breadth-first, depth-first and A* search over tile configurations (`search`)
//! - A `Solver` that checks solvability up front, runs one strategy under a node
//!   budget and reconstructs the move path (`solver`)
//!
//! Quick start:
//! ```
//! use tile_search::puzzle::Move;
//! use tile_search::solver::{Method, Solver, DEFAULT_NODE_BUDGET};
//!
//! let mut solver = Solver::new(Method::AStar, vec![1, 2, 5, 3, 4, 0, 6, 7, 8], None).unwrap();
//! assert!(solver.solve(DEFAULT_NODE_BUDGET).is_some());
//! let stats = solver.statistics().unwrap();
//! assert_eq!(stats.moves, vec![Move::Up, Move::Left, Move::Left]);
//! ```
pub mod error;
pub mod heuristic;
pub mod node;
pub mod puzzle;
pub mod search;
pub mod solver;

pub use error::{ConfigurationError, InvalidMove, SolverError};
pub use puzzle::{BlankPlacement, Board, Move, Tile};
pub use solver::{Method, SearchStatistics, Solver, DEFAULT_NODE_BUDGET};
