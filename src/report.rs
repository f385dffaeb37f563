use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};

use crossterm::style::{style, Stylize};

use tile_search::{Board, SearchStatistics};

pub fn print_statistics(stats: &SearchStatistics, print_path: bool) -> io::Result<()> {
    let stdout = io::stdout();
    write_statistics(&mut stdout.lock(), stats, print_path, peak_memory_mb())
}

/// Report lines for one search, ending with a notice when the budget ran out.
pub fn write_statistics<W: Write>(
    out: &mut W,
    stats: &SearchStatistics,
    print_path: bool,
    peak_mb: Option<f64>,
) -> io::Result<()> {
    if print_path {
        let moves: Vec<String> = stats.moves.iter().map(|mv| mv.to_string()).collect();
        writeln!(out, "path_to_goal: [{}]", moves.join(", "))?;
    }
    writeln!(out, "cost_of_path: {}", stats.cost_of_path())?;
    writeln!(out, "nodes_expanded: {}", stats.nodes_expanded)?;
    if let Some(depth) = stats.search_depth() {
        writeln!(out, "search_depth: {}", depth)?;
    }
    writeln!(out, "max_depth: {}", stats.max_depth)?;
    writeln!(out, "running_time: {:.8}", stats.elapsed.as_secs_f64())?;
    match peak_mb {
        Some(mb) => writeln!(out, "max_ram_usage: {:.8}", mb)?,
        None => writeln!(out, "max_ram_usage: n/a")?,
    }
    if !stats.is_solved() {
        writeln!(out, "Solution is not found")?;
    }
    Ok(())
}

/// Print the start board and the board after every move, blank highlighted.
pub fn print_boards(start: &Board, stats: &SearchStatistics) {
    println!("Initial board:\n{}", render(start));
    let total = stats.moves.len();
    for (step, (mv, board)) in stats.moves.iter().zip(stats.path.iter().skip(1)).enumerate() {
        println!(
            "{} ({}/{}):\n{}",
            style(mv.name()).bold(),
            step + 1,
            total,
            render(board)
        );
    }
}

fn render(board: &Board) -> String {
    let width = (board.tiles().len() - 1).to_string().len();
    let mut out = String::new();
    for row in board.tiles().chunks(board.side()) {
        for &tile in row {
            let cell = format!("{:>width$}", tile);
            if tile == 0 {
                let _ = write!(out, "{} ", style(cell).reverse());
            } else {
                let _ = write!(out, "{} ", cell);
            }
        }
        out.push('\n');
    }
    out
}

/// Peak resident set size in megabytes, where the platform reports it.
fn peak_memory_mb() -> Option<f64> {
    let status = fs::read_to_string("/proc/self/status").ok()?;
    let line = status.lines().find(|line| line.starts_with("VmHWM:"))?;
    let kb: f64 = line.split_whitespace().nth(1)?.parse().ok()?;
    Some(kb / 1000.0)
}
