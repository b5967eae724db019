/// Fixed-capacity bitset over tile indices
pub mod bitset;
/// Reproducible generation of solvable puzzles
pub mod generator;
/// Rotation search for a fixed arrangement
pub mod orientation;
/// Exhaustive search driver and solution types
pub mod search;
/// Independent validation of reported solutions
pub mod verify;
