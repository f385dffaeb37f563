mod report;

use std::error::Error;

use clap::{Parser, ValueEnum};
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use tile_search::{BlankPlacement, Board, ConfigurationError, Method, Solver, DEFAULT_NODE_BUDGET};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    /// Breadth-first search
    Bfs,
    /// Depth-first search
    Dfs,
    /// A* with the Manhattan distance
    Ast,
}

impl From<MethodArg> for Method {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Bfs => Method::BreadthFirst,
            MethodArg::Dfs => Method::DepthFirst,
            MethodArg::Ast => Method::AStar,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "tile-search",
    version,
    about = "Solve sliding-tile puzzles with breadth-first, depth-first or A* search"
)]
struct Cli {
    /// Search method
    #[arg(value_enum)]
    method: MethodArg,
    /// Initial tiles, comma separated, 0 for the blank (e.g. 1,2,5,3,4,0,6,7,8)
    #[arg(required_unless_present = "random")]
    initial: Option<String>,
    /// Print the path to the goal
    #[arg(short = 'f', long = "final")]
    print_path: bool,
    /// Maximum number of nodes to expand
    #[arg(short = 'n', long = "nodes", default_value_t = DEFAULT_NODE_BUDGET)]
    nodes: usize,
    /// Goal tiles, comma separated
    #[arg(short = 'g', long = "goal", conflicts_with = "zerolast")]
    goal: Option<String>,
    /// Put the blank last in the default goal
    #[arg(long = "zerolast", visible_alias = "zl")]
    zerolast: bool,
    /// Start from a random solvable board of this side instead of INITIAL
    #[arg(long, value_name = "SIDE", conflicts_with = "initial",
          value_parser = clap::value_parser!(u8).range(1..))]
    random: Option<u8>,
    /// Seed for --random
    #[arg(long, requires = "random")]
    seed: Option<u64>,
    /// Print every board along the solution
    #[arg(long)]
    boards: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let (start, goal) = boards(cli)?;
    let mut solver = Solver::with_boards(cli.method.into(), start, goal)?;
    solver.solve(cli.nodes);

    if let Some(stats) = solver.statistics() {
        if cli.boards {
            report::print_boards(solver.start(), stats);
        }
        report::print_statistics(stats, cli.print_path)?;
    }
    Ok(())
}

/// Start and goal boards. The goal is settled first so a random start is
/// drawn from the configurations that can reach it.
fn boards(cli: &Cli) -> Result<(Board, Board), Box<dyn Error>> {
    let placement = if cli.zerolast {
        BlankPlacement::Last
    } else {
        BlankPlacement::First
    };
    let given_goal = cli.goal.as_deref().map(str::parse::<Board>).transpose()?;

    match (&cli.initial, cli.random) {
        (Some(text), _) => {
            let start = text.parse::<Board>()?;
            let goal = match given_goal {
                Some(goal) => goal,
                None => Board::goal(start.side(), placement)?,
            };
            Ok((start, goal))
        }
        (None, Some(side)) => {
            let side = side as usize;
            let goal = match given_goal {
                Some(goal) => goal,
                None => Board::goal(side, placement)?,
            };
            if goal.side() != side {
                return Err(ConfigurationError::SideMismatch {
                    initial: side,
                    goal: goal.side(),
                }
                .into());
            }
            let mut rng = match cli.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Ok((Board::shuffled(&goal, &mut rng), goal))
        }
        (None, None) => Err("either INITIAL or --random is required".into()),
    }
}
