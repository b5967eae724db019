//! Mathematical utilities for the search

/// Lexicographic permutation stepping
pub mod permutation;
