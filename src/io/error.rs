//! Error types for puzzle loading, solving, and verification

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all puzzle operations
///
/// An exhausted search is not represented here: a puzzle without a
/// solution is a normal outcome reported through `Option`.
#[derive(Debug)]
pub enum PuzzleError {
    /// An edge code in a puzzle file failed to parse
    InvalidEdgeCode {
        /// The offending code as read from the file
        code: String,
        /// One-based ordinal of the tile being read
        tile_number: usize,
    },

    /// Puzzle file content does not describe exactly nine tiles
    MalformedPuzzle {
        /// Path to the puzzle file
        path: PathBuf,
        /// Description of what is wrong with the content
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A reported solution failed independent verification
    InconsistentSolution {
        /// Description of the violated property
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEdgeCode { code, tile_number } => {
                write!(f, "Invalid edge code '{code}' in tile {tile_number}")
            }
            Self::MalformedPuzzle { path, reason } => {
                write!(f, "Malformed puzzle '{}': {reason}", path.display())
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InconsistentSolution { reason } => {
                write!(f, "Inconsistent solution: {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid edge code error
pub fn invalid_edge_code(code: &impl ToString, tile_number: usize) -> PuzzleError {
    PuzzleError::InvalidEdgeCode {
        code: code.to_string(),
        tile_number,
    }
}

/// Create a malformed puzzle error
pub fn malformed_puzzle(path: &Path, reason: &impl ToString) -> PuzzleError {
    PuzzleError::MalformedPuzzle {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

/// Create a file system error carrying the path and operation
pub fn file_system_error(
    path: &Path,
    operation: &'static str,
    source: std::io::Error,
) -> PuzzleError {
    PuzzleError::FileSystem {
        path: path.to_path_buf(),
        operation,
        source,
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an inconsistent solution error
pub fn inconsistent_solution(reason: &impl ToString) -> PuzzleError {
    PuzzleError::InconsistentSolution {
        reason: reason.to_string(),
    }
}
