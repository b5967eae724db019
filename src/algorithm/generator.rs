//! Reproducible generation of solvable puzzles

use crate::puzzle::board::{BOARD_CELLS, BOARD_COLS};
use crate::puzzle::edge::Edge;
use crate::puzzle::tile::{EDGES_PER_TILE, Side, Tile};
use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

/// Builds guaranteed-solvable puzzles from a fixed seed
///
/// A solved board is laid out first, with every interior boundary given a
/// complementary edge pair, then each tile is pre-turned by a random
/// number of quarter turns and the tile list shuffled. The same seed
/// always produces the same puzzle.
pub struct PuzzleGenerator {
    rng: StdRng,
}

impl PuzzleGenerator {
    /// Create a generator seeded for reproducible output
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce a scrambled tile list that is guaranteed to have a solution
    pub fn generate(&mut self) -> [Tile; BOARD_CELLS] {
        let mut tiles = self.solved_tiles().map(|tile| {
            let rotation = self.rng.random_range(0..EDGES_PER_TILE as u8);
            tile.rotated(rotation)
        });
        tiles.shuffle(&mut self.rng);
        tiles
    }

    /// Lay out tiles that already solve in listed order with no turns
    fn solved_tiles(&mut self) -> [Tile; BOARD_CELLS] {
        let mut tiles = [Tile::default(); BOARD_CELLS];
        for cell in 0..BOARD_CELLS {
            let top = if cell >= BOARD_COLS {
                match tiles.get(cell - BOARD_COLS) {
                    Some(above) => above.side(Side::Bottom, 0).complement(),
                    None => self.random_edge(),
                }
            } else {
                self.random_edge()
            };
            let left = if cell % BOARD_COLS > 0 {
                match tiles.get(cell - 1) {
                    Some(west) => west.side(Side::Right, 0).complement(),
                    None => self.random_edge(),
                }
            } else {
                self.random_edge()
            };
            let right = self.random_edge();
            let bottom = self.random_edge();
            if let Some(slot) = tiles.get_mut(cell) {
                *slot = Tile::new([top, right, bottom, left]);
            }
        }
        tiles
    }

    fn random_edge(&mut self) -> Edge {
        Edge::ALL.choose(&mut self.rng).copied().unwrap_or_default()
    }
}
