//! Exhaustive solver for 3x3 edge-matching tile puzzles
//!
//! Nine square tiles each carry four directional colored edges. The solver
//! searches tile arrangements and rotations for a grid in which every pair
//! of adjacent tiles joins a color head to the matching color tail,
//! returning the first consistent layout or reporting that none exists.

#![forbid(unsafe_code)]

/// Search engine, puzzle generation, and solution verification
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for the search
pub mod math;
/// Core puzzle data model: edges, tiles, and the board
pub mod puzzle;

pub use io::error::{PuzzleError, Result};
