#![allow(dead_code)]

use tile_search::{Board, Method, Move, SearchStatistics, Solver, Tile, DEFAULT_NODE_BUDGET};

/// Solve `tiles` against the blank-first goal with the default budget.
pub fn solve(method: Method, tiles: &[Tile]) -> (Solver, SearchStatistics) {
    let mut solver = Solver::new(method, tiles.to_vec(), None).expect("solvable configuration");
    solver.solve(DEFAULT_NODE_BUDGET);
    let stats = solver.statistics().cloned().expect("statistics after solve");
    (solver, stats)
}

/// Parse a move string such as `"LUUR"`.
pub fn moves(letters: &str) -> Vec<Move> {
    letters
        .chars()
        .map(|c| match c {
            'U' => Move::Up,
            'D' => Move::Down,
            'L' => Move::Left,
            'R' => Move::Right,
            other => panic!("not a move letter: {other}"),
        })
        .collect()
}

/// The path replays from the start and ends on the solver's goal.
pub fn assert_round_trip(solver: &Solver, stats: &SearchStatistics) {
    let end: Board = solver.start().replay(&stats.moves).expect("legal moves");
    assert_eq!(&end, solver.goal());
    assert_eq!(stats.path.last(), Some(&end));
    assert_eq!(stats.path.first(), Some(solver.start()));
    assert_eq!(stats.path.len(), stats.moves.len() + 1);
}
