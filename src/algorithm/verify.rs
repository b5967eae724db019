//! Independent validation of reported solutions

use crate::algorithm::bitset::TileSet;
use crate::algorithm::search::Solution;
use crate::io::error::{Result, inconsistent_solution};
use crate::puzzle::board::{BOARD_CELLS, BOARD_COLS, BOARD_ROWS, Board};
use crate::puzzle::tile::{EDGES_PER_TILE, Tile};

/// Re-check a solution against the tiles it claims to arrange
///
/// Confirms the grids are three by three, every rotation is under four
/// quarter turns, the positions form a bijection over the tile indices,
/// and every pair of adjacent cells joins cleanly. The check shares no
/// state with the search that produced the solution.
///
/// # Errors
///
/// Returns [`PuzzleError::InconsistentSolution`](crate::PuzzleError)
/// naming the first violated property.
pub fn verify_solution(tiles: &[Tile; BOARD_CELLS], solution: &Solution) -> Result<()> {
    if solution.positions.dim() != (BOARD_ROWS, BOARD_COLS) {
        return Err(inconsistent_solution(&format!(
            "positions grid is {:?}, expected {BOARD_ROWS}x{BOARD_COLS}",
            solution.positions.dim()
        )));
    }
    if solution.rotations.dim() != (BOARD_ROWS, BOARD_COLS) {
        return Err(inconsistent_solution(&format!(
            "rotations grid is {:?}, expected {BOARD_ROWS}x{BOARD_COLS}",
            solution.rotations.dim()
        )));
    }

    let mut positions = [0u8; BOARD_CELLS];
    for (slot, value) in positions.iter_mut().zip(solution.positions.iter()) {
        *slot = *value;
    }
    let mut rotations = [0u8; BOARD_CELLS];
    for (slot, value) in rotations.iter_mut().zip(solution.rotations.iter()) {
        *slot = *value;
    }

    if let Some(cell) = rotations.iter().position(|&r| r >= EDGES_PER_TILE as u8) {
        return Err(inconsistent_solution(&format!(
            "cell {cell} reports a rotation beyond three quarter turns"
        )));
    }

    let mut seen = TileSet::new(BOARD_CELLS);
    for &tile in &positions {
        let index = usize::from(tile);
        if index >= BOARD_CELLS {
            return Err(inconsistent_solution(&format!(
                "tile index {tile} is out of range"
            )));
        }
        if seen.contains(index) {
            return Err(inconsistent_solution(&format!(
                "tile {tile} is placed more than once"
            )));
        }
        seen.insert(index);
    }

    let board = Board::with_arrangement(*tiles, positions, rotations);
    for cell in 0..BOARD_CELLS {
        if !board.matches_placed_neighbors(cell) {
            return Err(inconsistent_solution(&format!(
                "adjacent edges fail to join at cell {cell}"
            )));
        }
    }

    Ok(())
}
