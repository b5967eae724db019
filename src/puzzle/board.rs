//! Board state: tile placement, rotations, and adjacency checking

use crate::math::permutation::next_permutation;
use crate::puzzle::edge::Edge;
use crate::puzzle::tile::{EDGES_PER_TILE, Side, Tile};

/// Rows in the puzzle grid
pub const BOARD_ROWS: usize = 3;
/// Columns in the puzzle grid
pub const BOARD_COLS: usize = 3;
/// Cells in the puzzle grid, equal to the number of tiles
pub const BOARD_CELLS: usize = BOARD_ROWS * BOARD_COLS;

/// Already-committed neighbors of one cell during row-major descent
#[derive(Debug, PartialEq, Eq)]
struct CellNeighbors {
    north: Option<usize>,
    west: Option<usize>,
}

/// North and west neighbors per cell, row-major
///
/// Cells are committed in row-major order, so when a cell is being
/// decided only these two neighbors can already hold a settled rotation.
const PLACED_NEIGHBORS: [CellNeighbors; BOARD_CELLS] = [
    CellNeighbors { north: None, west: None },
    CellNeighbors { north: None, west: Some(0) },
    CellNeighbors { north: None, west: Some(1) },
    CellNeighbors { north: Some(0), west: None },
    CellNeighbors { north: Some(1), west: Some(3) },
    CellNeighbors { north: Some(2), west: Some(4) },
    CellNeighbors { north: Some(3), west: None },
    CellNeighbors { north: Some(4), west: Some(6) },
    CellNeighbors { north: Some(5), west: Some(7) },
];

/// Mutable search state: which tile sits in each cell and how it is turned
///
/// `positions` maps cells to tile indices and is always a permutation;
/// `rotations` holds clockwise quarter-turn counts. While a search is in
/// flight, rotations beyond the deepest committed cell are leftovers from
/// earlier attempts; a successful search settles every cell before the
/// result is read out.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Tile; BOARD_CELLS],
    positions: [u8; BOARD_CELLS],
    rotations: [u8; BOARD_CELLS],
}

impl Board {
    /// Create a board over `tiles` in the identity arrangement
    pub const fn new(tiles: [Tile; BOARD_CELLS]) -> Self {
        Self {
            tiles,
            positions: [0, 1, 2, 3, 4, 5, 6, 7, 8],
            rotations: [0; BOARD_CELLS],
        }
    }

    /// Recreate a board in a specific arrangement so it can be re-checked
    pub const fn with_arrangement(
        tiles: [Tile; BOARD_CELLS],
        positions: [u8; BOARD_CELLS],
        rotations: [u8; BOARD_CELLS],
    ) -> Self {
        Self {
            tiles,
            positions,
            rotations,
        }
    }

    /// Tile indices currently assigned to cells, row-major
    pub const fn positions(&self) -> &[u8; BOARD_CELLS] {
        &self.positions
    }

    /// Clockwise quarter-turn counts per cell, row-major
    pub const fn rotations(&self) -> &[u8; BOARD_CELLS] {
        &self.rotations
    }

    /// Set the clockwise rotation for a cell
    ///
    /// Values wrap modulo four; out-of-range cells are ignored.
    pub fn set_rotation(&mut self, cell: usize, rotation: u8) {
        if let Some(slot) = self.rotations.get_mut(cell) {
            *slot = rotation % EDGES_PER_TILE as u8;
        }
    }

    /// Edge visible on `side` of the tile placed at `cell`
    pub fn side(&self, cell: usize, side: Side) -> Option<Edge> {
        let rotation = self.rotations.get(cell).copied()?;
        let tile_index = self.positions.get(cell).copied()?;
        let tile = self.tiles.get(usize::from(tile_index))?;
        Some(tile.side(side, rotation))
    }

    /// Check `cell` against its already-committed neighbors
    ///
    /// Consults the static neighbor table, so a top-left cell passes
    /// unconditionally while an interior cell must join both its north
    /// and west neighbors. Out-of-range cells fail.
    pub fn matches_placed_neighbors(&self, cell: usize) -> bool {
        let Some(neighbors) = PLACED_NEIGHBORS.get(cell) else {
            return false;
        };
        let north_ok = neighbors
            .north
            .is_none_or(|north| self.joined(north, Side::Bottom, cell, Side::Top));
        let west_ok = neighbors
            .west
            .is_none_or(|west| self.joined(west, Side::Right, cell, Side::Left));
        north_ok && west_ok
    }

    /// Advance to the next arrangement in lexicographic order
    ///
    /// Returns false once every permutation has been visited and the
    /// board has wrapped back to the identity arrangement.
    pub fn advance_arrangement(&mut self) -> bool {
        next_permutation(&mut self.positions)
    }

    fn joined(&self, from: usize, from_side: Side, to: usize, to_side: Side) -> bool {
        match (self.side(from, from_side), self.side(to, to_side)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        }
    }
}
