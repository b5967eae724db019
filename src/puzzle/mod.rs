//! Core puzzle data model
//!
//! Edges pack a color and direction into three bits; tiles hold four
//! edges clockwise from the top; the board tracks which tile occupies
//! each cell and how far it is turned.

/// Board state and adjacency checking
pub mod board;
/// Directional colored edge values
pub mod edge;
/// Immutable tiles with rotated side access
pub mod tile;

pub use board::Board;
pub use edge::Edge;
pub use tile::Tile;
