//! Solver orchestration: validation, strategy dispatch and statistics.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::error::{ConfigurationError, SolverError};
use crate::heuristic::GoalPositions;
use crate::puzzle::{is_solvable, BlankPlacement, Board, Move, Tile};
use crate::search::{self, Problem, SearchOutcome};

/// Expansions allowed when the caller does not say otherwise.
pub const DEFAULT_NODE_BUDGET: usize = 200_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    BreadthFirst,
    DepthFirst,
    AStar,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::BreadthFirst, Method::DepthFirst, Method::AStar];

    pub fn code(&self) -> &'static str {
        match self {
            Method::BreadthFirst => "bfs",
            Method::DepthFirst => "dfs",
            Method::AStar => "ast",
        }
    }

    fn strategy(self) -> fn(&Problem<'_>, usize) -> SearchOutcome {
        match self {
            Method::BreadthFirst => search::breadth_first,
            Method::DepthFirst => search::depth_first,
            Method::AStar => search::a_star,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Method {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.code() == s)
            .ok_or_else(|| ConfigurationError::UnknownMethod { name: s.to_string() })
    }
}

/// Figures gathered by one call to [`Solver::solve`].
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    pub method: Method,
    pub nodes_expanded: usize,
    /// Deepest node ever placed on the frontier.
    pub max_depth: u32,
    pub elapsed: Duration,
    /// Moves from the start to the goal; empty when no solution was found.
    pub moves: Vec<Move>,
    /// Boards from the start to the goal, inclusive.
    pub path: Vec<Board>,
}

impl SearchStatistics {
    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    pub fn cost_of_path(&self) -> usize {
        self.moves.len()
    }

    /// Depth of the goal node, if one was reached.
    pub fn search_depth(&self) -> Option<usize> {
        self.is_solved().then_some(self.moves.len())
    }
}

/// Solves one start configuration with one search method.
#[derive(Debug, Clone)]
pub struct Solver {
    method: Method,
    start: Board,
    goal: Board,
    heuristic: GoalPositions,
    statistics: Option<SearchStatistics>,
}

impl Solver {
    /// Validate `initial` and `goal` (blank first when absent) and check
    /// that the goal is reachable.
    pub fn new(
        method: Method,
        initial: Vec<Tile>,
        goal: Option<Vec<Tile>>,
    ) -> Result<Self, SolverError> {
        let start = Board::new(initial)?;
        let goal = match goal {
            Some(tiles) => Board::new(tiles)?,
            None => Board::goal(start.side(), BlankPlacement::First)?,
        };
        Self::with_boards(method, start, goal)
    }

    pub fn with_boards(method: Method, start: Board, goal: Board) -> Result<Self, SolverError> {
        if start.side() != goal.side() {
            return Err(ConfigurationError::SideMismatch {
                initial: start.side(),
                goal: goal.side(),
            }
            .into());
        }
        if !is_solvable(&start, &goal) {
            return Err(SolverError::Unsolvable);
        }
        let heuristic = GoalPositions::new(&goal);
        Ok(Self {
            method,
            start,
            goal,
            heuristic,
            statistics: None,
        })
    }

    pub fn start(&self) -> &Board {
        &self.start
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Run the search with at most `node_budget` expansions.
    ///
    /// Returns the goal board when it was reached. `None` means the budget ran
    /// out; construction already proved a solution exists.
    pub fn solve(&mut self, node_budget: usize) -> Option<&Board> {
        tracing::debug!(
            method = %self.method,
            side = self.start.side(),
            budget = node_budget,
            "starting search"
        );
        let timer = Instant::now();
        let problem = Problem {
            start: &self.start,
            goal: &self.goal,
            heuristic: &self.heuristic,
        };
        let outcome = (self.method.strategy())(&problem, node_budget);
        let elapsed = timer.elapsed();

        let grid = self.start.grid();
        let nodes = outcome.path.unwrap_or_default();
        let moves: Vec<Move> = nodes.iter().filter_map(|node| node.incoming).collect();
        let path: Vec<Board> = nodes.iter().map(|node| node.to_board(grid)).collect();

        if path.is_empty() {
            tracing::info!(
                method = %self.method,
                expanded = outcome.nodes_expanded,
                "no solution within budget"
            );
        } else {
            tracing::info!(
                method = %self.method,
                cost = moves.len(),
                expanded = outcome.nodes_expanded,
                superseded = outcome.superseded,
                discarded = outcome.discarded,
                ?elapsed,
                "solved"
            );
        }

        let statistics = self.statistics.insert(SearchStatistics {
            method: self.method,
            nodes_expanded: outcome.nodes_expanded,
            max_depth: outcome.max_depth,
            elapsed,
            moves,
            path,
        });
        statistics.path.last()
    }

    /// Statistics of the last [`solve`](Self::solve), if any.
    pub fn statistics(&self) -> Option<&SearchStatistics> {
        self.statistics.as_ref()
    }
}
