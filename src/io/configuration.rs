//! Runtime configuration defaults and display settings

// Default values for configurable parameters
/// Fixed seed for reproducible puzzle generation
pub const DEFAULT_SEED: u64 = 42;

// File handling
/// Extension recognized when expanding a directory target
pub const PUZZLE_EXTENSION: &str = "puzzle";

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 100;
