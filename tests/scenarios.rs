mod common;

use common::{assert_round_trip, moves, solve};
use tile_search::{
    BlankPlacement, Board, ConfigurationError, Method, Solver, SolverError, DEFAULT_NODE_BUDGET,
};

#[test]
fn a_star_finds_optimal_path() {
    let (solver, stats) = solve(Method::AStar, &[8, 6, 4, 2, 1, 3, 5, 7, 0]);
    assert_eq!(stats.nodes_expanded, 1660);
    assert_eq!(stats.max_depth, 26);
    assert_eq!(stats.moves, moves("LUULDRDLURRULLDRRULDDRULUL"));
    assert_eq!(stats.search_depth(), Some(26));
    assert_round_trip(&solver, &stats);
}

#[test]
fn breadth_first_scenario() {
    let (solver, stats) = solve(Method::BreadthFirst, &[6, 1, 8, 4, 0, 2, 7, 3, 5]);
    assert_eq!(stats.nodes_expanded, 54094);
    assert_eq!(stats.max_depth, 21);
    assert_eq!(stats.moves, moves("DRUULDRDLULURRDDLLUU"));
    assert_round_trip(&solver, &stats);
}

#[test]
fn depth_first_goes_pathologically_deep() {
    let (solver, stats) = solve(Method::DepthFirst, &[8, 6, 4, 2, 1, 3, 5, 7, 0]);
    assert_eq!(stats.nodes_expanded, 9869);
    assert_eq!(stats.max_depth, 9612);
    assert!(stats.is_solved());
    assert_round_trip(&solver, &stats);
}

#[test]
fn optimal_methods_agree_and_depth_first_is_no_shorter() {
    let tiles = [1, 2, 5, 3, 4, 0, 6, 7, 8];
    let (_, bfs) = solve(Method::BreadthFirst, &tiles);
    let (_, dfs) = solve(Method::DepthFirst, &tiles);
    let (_, ast) = solve(Method::AStar, &tiles);
    assert_eq!(bfs.cost_of_path(), 3);
    assert_eq!(ast.cost_of_path(), bfs.cost_of_path());
    assert!(bfs.cost_of_path() <= dfs.cost_of_path());
}

#[test]
fn swapped_tiles_are_rejected_before_search() {
    let err = Solver::new(Method::BreadthFirst, vec![0, 2, 1, 3, 4, 5, 6, 7, 8], None).unwrap_err();
    assert_eq!(err, SolverError::Unsolvable);
}

#[test]
fn malformed_configurations() {
    assert_eq!(
        Solver::new(Method::AStar, vec![0, 1, 2, 3, 4], None).unwrap_err(),
        SolverError::Configuration(ConfigurationError::NotSquare { len: 5 })
    );
    assert_eq!(
        Solver::new(Method::AStar, vec![0, 1, 2, 2], None).unwrap_err(),
        SolverError::Configuration(ConfigurationError::NotPermutation { len: 4 })
    );
    assert_eq!(
        Solver::new(Method::AStar, vec![0, 1, 2, 3], Some(vec![0, 1, 3])).unwrap_err(),
        SolverError::Configuration(ConfigurationError::NotSquare { len: 3 })
    );
}

#[test]
fn budget_exhaustion_is_not_an_error() {
    let mut solver = Solver::new(Method::BreadthFirst, vec![8, 6, 4, 2, 1, 3, 5, 7, 0], None).unwrap();
    assert!(solver.solve(100).is_none());
    let stats = solver.statistics().unwrap();
    assert!(!stats.is_solved());
    assert_eq!(stats.nodes_expanded, 101);
    assert_eq!(stats.search_depth(), None);
    assert!(stats.moves.is_empty());
}

#[test]
fn blank_last_goal() {
    let start: Board = "1,2,3,4,5,6,7,0,8".parse().unwrap();
    let goal = Board::goal(3, BlankPlacement::Last).unwrap();
    for method in Method::ALL {
        let mut solver = Solver::with_boards(method, start.clone(), goal.clone()).unwrap();
        assert_eq!(solver.solve(DEFAULT_NODE_BUDGET), Some(&goal));
        let stats = solver.statistics().unwrap();
        assert_eq!(stats.moves, moves("R"));
        assert_round_trip(&solver, stats);
    }
}

#[test]
fn custom_goal_on_fifteen_puzzle() {
    let goal = Board::goal(4, BlankPlacement::Last).unwrap();
    let start = goal
        .replay(&moves("UULDR"))
        .expect("legal moves from the corner");
    let mut solver = Solver::new(Method::AStar, start.tiles().to_vec(), Some(goal.tiles().to_vec())).unwrap();
    assert!(solver.solve(DEFAULT_NODE_BUDGET).is_some());
    let stats = solver.statistics().unwrap();
    assert_eq!(stats.cost_of_path(), 5);
    assert_round_trip(&solver, stats);
}
