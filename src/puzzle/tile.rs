//! Immutable tiles with rotated side access

use crate::puzzle::edge::Edge;
use std::fmt;

/// Edges on a tile, which is also the number of distinct quarter turns
pub const EDGES_PER_TILE: usize = 4;

/// Logical side of a tile, clockwise from the top
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// Northern edge
    Top,
    /// Eastern edge
    Right,
    /// Southern edge
    Bottom,
    /// Western edge
    Left,
}

impl Side {
    /// All sides in clockwise order from the top
    pub const ALL: [Self; EDGES_PER_TILE] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Position of this side in clockwise edge order
    pub const fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }
}

/// A square tile with one directional edge per side
///
/// Edges are stored clockwise from the top and never change after
/// construction; rotated access goes through [`side`](Self::side).
/// Equality is structural, so two rotations of the same tile are
/// distinct values. The default tile has four red tails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    edges: [Edge; EDGES_PER_TILE],
}

impl Tile {
    /// Create a tile from four edges, clockwise from the top
    pub const fn new(edges: [Edge; EDGES_PER_TILE]) -> Self {
        Self { edges }
    }

    /// Edge shown on `side` after `rotation` clockwise quarter turns
    ///
    /// Rotation re-indexes the stored edges rather than moving them:
    /// under `rotation` turns, the slot at `side` shows the edge stored
    /// at `(side + 4 - rotation) mod 4`. The result is periodic in
    /// `rotation` with period four.
    pub const fn side(&self, side: Side, rotation: u8) -> Edge {
        let slot =
            (side.index() + EDGES_PER_TILE - (rotation as usize % EDGES_PER_TILE)) % EDGES_PER_TILE;
        let [top, right, bottom, left] = self.edges;
        match slot {
            0 => top,
            1 => right,
            2 => bottom,
            _ => left,
        }
    }

    /// The stored edges, clockwise from the top
    pub const fn edges(&self) -> [Edge; EDGES_PER_TILE] {
        self.edges
    }

    /// Materialize the tile as it appears after `rotation` clockwise turns
    pub const fn rotated(&self, rotation: u8) -> Self {
        Self::new([
            self.side(Side::Top, rotation),
            self.side(Side::Right, rotation),
            self.side(Side::Bottom, rotation),
            self.side(Side::Left, rotation),
        ])
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [top, right, bottom, left] = self.edges;
        write!(f, "{top} {right} {bottom} {left}")
    }
}
