//! Exhaustive search across tile arrangements and rotations

use crate::algorithm::orientation;
use crate::puzzle::board::{BOARD_CELLS, BOARD_COLS, BOARD_ROWS, Board};
use crate::puzzle::tile::Tile;
use ndarray::Array2;

/// A completed placement of all nine tiles
///
/// Both grids are row-major three by three. Tile indices are zero-based
/// into the tile list the search was given; rotations count clockwise
/// quarter turns. A solution is immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    /// Tile index occupying each cell
    pub positions: Array2<u8>,
    /// Clockwise quarter-turn count for each cell
    pub rotations: Array2<u8>,
}

/// Counters describing how much work a search performed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Arrangements (outer permutations) examined
    pub arrangements: u64,
    /// Neighbor match checks evaluated
    pub checks: u64,
}

/// Driver owning the board state for one full search
///
/// Arrangements are visited in lexicographic order starting from the
/// identity permutation; within each arrangement rotations are searched
/// by backtracking. The same inputs always yield the same first-found
/// solution.
pub struct ExhaustiveSearch {
    board: Board,
    stats: SearchStats,
}

impl ExhaustiveSearch {
    /// Create a search over `tiles` starting from the identity arrangement
    pub const fn new(tiles: [Tile; BOARD_CELLS]) -> Self {
        Self {
            board: Board::new(tiles),
            stats: SearchStats {
                arrangements: 0,
                checks: 0,
            },
        }
    }

    /// Run the search to its first solution
    ///
    /// Returns `None` once every arrangement has been tried without a
    /// full match; an unsolvable puzzle is a normal outcome rather than
    /// an error.
    pub fn run(&mut self) -> Option<Solution> {
        loop {
            self.stats.arrangements += 1;
            if orientation::orient(&mut self.board, &mut self.stats) {
                return Some(self.snapshot());
            }
            if !self.board.advance_arrangement() {
                return None;
            }
        }
    }

    /// Work counters accumulated so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    fn snapshot(&self) -> Solution {
        let positions = self.board.positions();
        let rotations = self.board.rotations();
        Solution {
            positions: Array2::from_shape_fn((BOARD_ROWS, BOARD_COLS), |(row, col)| {
                positions.get(row * BOARD_COLS + col).copied().unwrap_or_default()
            }),
            rotations: Array2::from_shape_fn((BOARD_ROWS, BOARD_COLS), |(row, col)| {
                rotations.get(row * BOARD_COLS + col).copied().unwrap_or_default()
            }),
        }
    }
}

/// Solve a puzzle, returning the first solution in search order
pub fn solve(tiles: [Tile; BOARD_CELLS]) -> Option<Solution> {
    let mut search = ExhaustiveSearch::new(tiles);
    search.run()
}
