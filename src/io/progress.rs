//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::{MAX_INDIVIDUAL_PROGRESS_BARS, SPINNER_TICK_MS};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Puzzles: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display for batch solves
///
/// Small batches get one spinner per file; larger batches get a single
/// aggregate bar to avoid terminal spam. Each solve is a single opaque
/// call, so spinners tick on a timer rather than reporting iterations.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
        }
    }

    /// Initialize progress bars based on file count
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        } else {
            for _ in 0..file_count {
                let pb = ProgressBar::new_spinner();
                pb.set_style(SPINNER_STYLE.clone());
                self.file_bars.push(self.multi_progress.add(pb));
            }
        }
    }

    /// Begin the spinner for a file
    pub fn start_file(&self, index: usize, path: &Path) {
        if let Some(bar) = self.file_bars.get(index) {
            let display_name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.set_message(format!("Solving {display_name}"));
            bar.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        }
    }

    /// Mark a file as finished and update the aggregate bar
    pub fn complete_file(&self, index: usize, path: &Path, elapsed: Duration) {
        if let Some(bar) = self.file_bars.get(index) {
            bar.disable_steady_tick();
            let display_name = path.file_name().unwrap_or_default().to_string_lossy();
            bar.finish_with_message(format!("✓ {display_name} ({elapsed:.1?})"));
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish();
        }
        let _ = self.multi_progress.clear();
    }
}
