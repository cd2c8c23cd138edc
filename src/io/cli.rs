//! Command-line interface for generating, rendering and exporting tile maps

use crate::algorithm::executor::{Attempt, Generator, GeneratorConfig};
use crate::algorithm::rules::RuleTable;
use crate::algorithm::validation::find_violations;
use crate::io::configuration::{
    DEFAULT_ATTEMPTS, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, GIF_FRAME_DELAY_MS,
};
use crate::io::error::{GenerationError, Result, file_system_error};
use crate::io::image::export_grid_as_png;
use crate::io::progress::AttemptProgress;
use crate::io::render::{GlyphTable, render};
use crate::io::visualization::TraceCapture;
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::TileType;
use clap::Parser;
use log::{debug, info, warn};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backtile")]
#[command(
    author,
    version,
    about = "Generate connected tile maps by randomized backtracking"
)]
/// Command-line arguments for the map generator
pub struct Cli {
    /// Grid width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Attempts before giving up, each from a fresh random start
    #[arg(short, long, default_value_t = DEFAULT_ATTEMPTS)]
    pub attempts: usize,

    /// Write the text rendering to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Also export the map as a PNG image
    #[arg(short, long, value_name = "FILE")]
    pub png: Option<PathBuf>,

    /// Export a GIF replaying the search of the successful attempt
    #[arg(short, long, value_name = "FILE")]
    pub visualize: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug log messages
    #[arg(short, long)]
    pub debug: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Generator parameters derived from the arguments
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            rows: self.height,
            cols: self.width,
            attempts: self.attempts,
            record_trace: self.visualize.is_some(),
        }
    }

    /// Default log filter for these arguments; `RUST_LOG` overrides it
    pub const fn log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "warn" }
    }
}

/// Initialise `env_logger` with the filter chosen by the arguments
pub fn init_logging(cli: &Cli) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();
}

/// Runs one generation session: attempts, rendering and exports
pub struct Session {
    cli: Cli,
    glyphs: GlyphTable<TileType>,
}

impl Session {
    /// Create a session for the standard pipe tile set
    pub fn new(cli: Cli) -> Self {
        let glyphs = GlyphTable::from_rules(&RuleTable::standard());
        Self { cli, glyphs }
    }

    /// Generate a map and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, every attempt fails,
    /// or an output cannot be written
    pub fn run(&self) -> Result<()> {
        let attempt = self.generate()?;
        let Some(grid) = attempt.grid.as_ref() else {
            return Err(GenerationError::GenerationFailed {
                attempts: self.cli.attempts,
                dimensions: (self.cli.height, self.cli.width),
            });
        };

        self.write_text(grid)?;

        if let Some(path) = &self.cli.png {
            export_grid_as_png(grid, &self.glyphs, path)?;
            info!("wrote image to {}", path.display());
        }

        if let Some(path) = &self.cli.visualize {
            let capture = TraceCapture::new(self.cli.height, self.cli.width, attempt.trace);
            capture.export_gif(&self.glyphs, path, GIF_FRAME_DELAY_MS)?;
            info!("wrote search replay to {}", path.display());
        }

        Ok(())
    }

    /// Run the attempts with progress reporting
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid or every attempt fails
    pub fn generate(&self) -> Result<Attempt<TileType>> {
        let mut generator = Generator::new(
            RuleTable::standard(),
            self.cli.generator_config(),
            self.cli.seed,
        )?;
        let mut progress = AttemptProgress::new(self.cli.attempts, self.cli.should_show_progress());

        let outcome = generator.run(|index, attempt| {
            progress.record(index, attempt.succeeded(), attempt.stats);
        });
        progress.finish();

        let attempt = outcome?;
        if let Some(grid) = attempt.grid.as_ref() {
            let violations = find_violations(grid, generator.rules());
            if !violations.is_empty() {
                warn!("generated grid has {} connector violations", violations.len());
            }
        }
        debug!(
            "seed {} produced a {}x{} map after {} attempt(s)",
            self.cli.seed,
            self.cli.height,
            self.cli.width,
            progress.attempts_seen()
        );

        Ok(attempt)
    }

    /// Text rendering of a grid with the session's glyphs
    pub fn render(&self, grid: &TileGrid<TileType>) -> String {
        render(grid, &self.glyphs)
    }

    // Allow print for the rendered map, the tool's primary output
    #[allow(clippy::print_stdout)]
    fn write_text(&self, grid: &TileGrid<TileType>) -> Result<()> {
        let text = self.render(grid);
        match &self.cli.output {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)
                        .map_err(|e| file_system_error(parent, "create directory", e))?;
                }
                std::fs::write(path, text).map_err(|e| file_system_error(path, "write", e))?;
                info!("wrote map to {}", path.display());
            }
            None => print!("{text}"),
        }
        Ok(())
    }
}
