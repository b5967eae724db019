//! Input/output operations and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Runtime configuration defaults and display settings
pub mod configuration;
/// Error types for puzzle operations
pub mod error;
/// Puzzle file reading and writing
pub mod loader;
/// Multi-file progress display
pub mod progress;
/// Solution table rendering
pub mod report;
