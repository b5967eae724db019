//! Command-line interface for batch solving of puzzle files

use crate::algorithm::generator::PuzzleGenerator;
use crate::algorithm::search::ExhaustiveSearch;
use crate::algorithm::verify::verify_solution;
use crate::io::configuration::{DEFAULT_SEED, PUZZLE_EXTENSION};
use crate::io::error::{Result, invalid_parameter};
use crate::io::loader::{load_tiles, save_tiles};
use crate::io::progress::ProgressManager;
use crate::io::report::{NO_SOLUTION_MESSAGE, solution_table, summary_line};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilefit")]
#[command(
    version,
    about = "Solve 3x3 edge-matching tile puzzles by exhaustive search"
)]
/// Command-line arguments for the puzzle solver
pub struct Cli {
    /// Puzzle file, or directory of .puzzle files, to solve
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for puzzle generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Generate a solvable puzzle at TARGET before solving it
    #[arg(short, long)]
    pub generate: bool,

    /// Independently verify the solution before reporting it
    #[arg(short, long)]
    pub check: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch solving of puzzle files with progress tracking
pub struct PuzzleProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl PuzzleProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process the target according to CLI arguments
    ///
    /// A solved puzzle prints the solution table; an exhausted search
    /// prints the no-solution message. Neither is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, generation, file loading,
    /// or solution verification fails.
    pub fn process(&mut self) -> Result<()> {
        if self.cli.generate {
            self.generate_target()?;
        }

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let show_headers = files.len() > 1;
        for (index, file) in files.iter().enumerate() {
            self.solve_file(file, index, show_headers)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn generate_target(&self) -> Result<()> {
        if self.cli.target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"generation writes a single file, not a directory",
            ));
        }
        let mut generator = PuzzleGenerator::new(self.cli.seed);
        let tiles = generator.generate();
        let comment = format!("Generated with seed {}", self.cli.seed);
        save_tiles(&self.cli.target, &tiles, &comment)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            Ok(vec![self.cli.target.clone()])
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"no such file or directory",
            ))
        }
    }

    // Result tables are the program's product; summaries go to stderr
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    fn solve_file(&mut self, path: &Path, index: usize, show_header: bool) -> Result<()> {
        let start_time = Instant::now();

        if let Some(ref pm) = self.progress_manager {
            pm.start_file(index, path);
        }

        let tiles = load_tiles(path)?;
        let mut search = ExhaustiveSearch::new(tiles);
        let outcome = search.run();

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file(index, path, start_time.elapsed());
        }

        if self.cli.check {
            if let Some(ref solution) = outcome {
                verify_solution(&tiles, solution)?;
            }
        }

        if show_header {
            println!("{}:", path.display());
        }
        match outcome {
            Some(solution) => print!("{}", solution_table(&solution)),
            None => println!("{NO_SOLUTION_MESSAGE}"),
        }

        if !self.cli.quiet {
            eprintln!(
                "{}: {} in {:.2?}",
                path.display(),
                summary_line(&search.stats()),
                start_time.elapsed()
            );
        }

        Ok(())
    }
}
