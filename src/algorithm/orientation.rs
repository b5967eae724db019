//! Rotation search for a fixed arrangement

use crate::algorithm::search::SearchStats;
use crate::puzzle::board::{BOARD_CELLS, Board};
use crate::puzzle::tile::EDGES_PER_TILE;

/// Quarter turns available to each tile
const ROTATION_COUNT: u8 = EDGES_PER_TILE as u8;

/// Search for rotations that satisfy every neighbor constraint
///
/// Descends the board in row-major order, settling one cell at a time and
/// checking it only against its north and west neighbors. Each cell runs
/// a trial counter down from four; the rotation written for counter value
/// `v` is `(v + 1) mod 4` clockwise turns, so candidates are tried in the
/// order 0, 3, 2, 1. When a cell exhausts its trials the search backtracks
/// to the previous cell. On success the board holds a settled clockwise
/// rotation for every cell.
pub fn orient(board: &mut Board, stats: &mut SearchStats) -> bool {
    orient_from(board, 0, stats)
}

fn orient_from(board: &mut Board, cell: usize, stats: &mut SearchStats) -> bool {
    if cell >= BOARD_CELLS {
        return true;
    }
    for countdown in (0..ROTATION_COUNT).rev() {
        board.set_rotation(cell, (countdown + 1) % ROTATION_COUNT);
        stats.checks += 1;
        if board.matches_placed_neighbors(cell) && orient_from(board, cell + 1, stats) {
            return true;
        }
    }
    false
}
