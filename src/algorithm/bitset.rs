use bitvec::prelude::*;
use std::fmt;

/// Fixed-capacity bitset over zero-based tile indices
///
/// Tracks which tiles an arrangement has already accounted for, with
/// O(1) membership testing. Out-of-range indices are ignored on insert
/// and never reported as members.
#[derive(Clone, Debug)]
pub struct TileSet {
    bits: BitVec,
    capacity: usize,
}

impl TileSet {
    /// Create a set over `capacity` tile indices with no members
    pub fn new(capacity: usize) -> Self {
        Self {
            bits: bitvec![0; capacity],
            capacity,
        }
    }

    /// Insert a tile index
    pub fn insert(&mut self, tile: usize) {
        if tile < self.capacity {
            self.bits.set(tile, true);
        }
    }

    /// Test tile membership
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Test if no tiles are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tiles in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all member indices in ascending order
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for TileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TileSet({} of {}: {:?})",
            self.count(),
            self.capacity,
            self.to_vec()
        )
    }
}
