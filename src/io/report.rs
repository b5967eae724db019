//! Solution table rendering

use crate::algorithm::search::{SearchStats, Solution};

/// Horizontal rule sized to the solved banner
const RULE: &str = "----------------------";

/// Message printed when the search exhausts every arrangement
pub const NO_SOLUTION_MESSAGE: &str = "Puzzle has no solution.";

/// Render the solved-puzzle table
///
/// One row per cell in row-major order: the cell coordinates, the
/// one-based tile number placed there, and the clockwise quarter-turn
/// count applied to it.
pub fn solution_table(solution: &Solution) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str("Puzzle solution found!\n");
    out.push_str(RULE);
    out.push('\n');
    out.push_str("  Pos  Tile  Rot(CW)  \n");
    for ((row, col), &tile) in solution.positions.indexed_iter() {
        let rotation = solution.rotations.get((row, col)).copied().unwrap_or_default();
        let number = tile + 1;
        out.push_str(&format!("{row:>3},{col}{number:>5}{rotation:>5}\n"));
    }
    out
}

/// One-line summary of the work a search performed
pub fn summary_line(stats: &SearchStats) -> String {
    format!(
        "searched {} arrangements with {} edge checks",
        stats.arrangements, stats.checks
    )
}
