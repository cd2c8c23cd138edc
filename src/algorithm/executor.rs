use log::{debug, warn};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::builder::{GridBuilder, SearchStats, TraceEvent};
use crate::algorithm::rules::RuleTable;
use crate::io::configuration::{MAX_GRID_CELLS, MAX_GRID_DIMENSION};
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::grid::{Position, TileGrid};
use crate::spatial::tiles::Tile;

/// Parameters for a run of generation attempts
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Grid height in cells
    pub rows: usize,
    /// Grid width in cells
    pub cols: usize,
    /// Attempts made before reporting failure
    pub attempts: usize,
    /// Whether to keep the placement trace of each attempt
    pub record_trace: bool,
}

/// Outcome of a single search from one random starting tile
#[derive(Debug, Clone)]
pub struct Attempt<T> {
    /// The completed grid, `None` when the search failed
    pub grid: Option<TileGrid<T>>,
    /// Cell the search started from
    pub origin: Position,
    /// Tile placed at the origin
    pub origin_tile: T,
    /// Search counters
    pub stats: SearchStats,
    /// Recorded mutations, empty unless tracing was requested
    pub trace: Vec<TraceEvent<T>>,
}

impl<T> Attempt<T> {
    /// Test whether the search produced a grid
    pub const fn succeeded(&self) -> bool {
        self.grid.is_some()
    }
}

/// Check that a grid of the given size can be searched
///
/// # Errors
///
/// Returns an error if either dimension is zero or exceeds
/// `MAX_GRID_DIMENSION`, or the cell count exceeds `MAX_GRID_CELLS`
pub fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    for (parameter, value) in [("height", rows), ("width", cols)] {
        if value == 0 {
            return Err(invalid_parameter(parameter, &value, &"must be positive"));
        }
        if value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must not exceed {MAX_GRID_DIMENSION}"),
            ));
        }
    }

    let cells = rows * cols;
    if cells > MAX_GRID_CELLS {
        return Err(invalid_parameter(
            "cells",
            &cells,
            &format!("grid must not exceed {MAX_GRID_CELLS} cells"),
        ));
    }

    Ok(())
}

/// Run one search on an empty grid from a random cell and tile
///
/// The origin row, origin column and origin tile are drawn in that order,
/// then the search consumes the generator for its shuffles.
///
/// # Errors
///
/// Returns an error if the dimensions are invalid or the rule table has no
/// placeable tiles
pub fn attempt<T, R>(
    rows: usize,
    cols: usize,
    rules: &RuleTable<T>,
    rng: &mut R,
    record_trace: bool,
) -> Result<Attempt<T>>
where
    T: Tile,
    R: Rng + ?Sized,
{
    validate_dimensions(rows, cols)?;

    let origin = [rng.random_range(0..rows), rng.random_range(0..cols)];
    let origin_tile =
        *rules
            .placeable()
            .choose(rng)
            .ok_or_else(|| GenerationError::InvalidRuleTable {
                reason: "no placeable tiles".to_string(),
            })?;

    let mut builder = GridBuilder::new(rows, cols, rules, rng);
    if record_trace {
        builder = builder.record_trace();
    }

    let placed = builder.try_place(origin, origin_tile)?;
    let (grid, stats, trace) = builder.finish();

    if placed && !grid.is_complete() {
        warn!(
            "search from {origin:?} reported success with {} empty cells",
            grid.count_empty()
        );
    }
    let complete = placed && grid.is_complete();

    debug!(
        "search from {origin:?} with {origin_tile:?}: {} after {} placements, {} conflicts, {} rollbacks, depth {}",
        if complete { "complete" } else { "failed" },
        stats.placements,
        stats.conflicts,
        stats.rollbacks,
        stats.max_depth
    );

    Ok(Attempt {
        grid: complete.then_some(grid),
        origin,
        origin_tile,
        stats,
        trace,
    })
}

/// Generate one grid, or `None` if the search failed
///
/// No retry happens here; call again with the same generator for fresh
/// randomness.
///
/// # Errors
///
/// Returns an error if the dimensions are invalid or the rule table has no
/// placeable tiles
pub fn generate<T, R>(
    rows: usize,
    cols: usize,
    rules: &RuleTable<T>,
    rng: &mut R,
) -> Result<Option<TileGrid<T>>>
where
    T: Tile,
    R: Rng + ?Sized,
{
    Ok(attempt(rows, cols, rules, rng, false)?.grid)
}

/// Seeded generator that retries up to a fixed number of attempts
///
/// All attempts draw from one `StdRng`, so a retry sees fresh randomness
/// while the whole run stays reproducible from the seed.
pub struct Generator<T> {
    rules: RuleTable<T>,
    config: GeneratorConfig,
    rng: StdRng,
}

impl<T: Tile> Generator<T> {
    /// Create a deterministic generator
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or `attempts` is zero
    pub fn new(rules: RuleTable<T>, config: GeneratorConfig, seed: u64) -> Result<Self> {
        validate_dimensions(config.rows, config.cols)?;
        if config.attempts == 0 {
            return Err(invalid_parameter(
                "attempts",
                &config.attempts,
                &"must be positive",
            ));
        }

        Ok(Self {
            rules,
            config,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Rule table used by every attempt
    pub const fn rules(&self) -> &RuleTable<T> {
        &self.rules
    }

    /// Run parameters
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run a single attempt
    ///
    /// # Errors
    ///
    /// Propagates validation errors from [`attempt`]
    pub fn attempt(&mut self) -> Result<Attempt<T>> {
        attempt(
            self.config.rows,
            self.config.cols,
            &self.rules,
            &mut self.rng,
            self.config.record_trace,
        )
    }

    /// Attempt until a grid is produced or the attempt budget runs out
    ///
    /// `observer` sees every attempt with its 1-based index.
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailed` when every attempt failed
    pub fn run<F>(&mut self, mut observer: F) -> Result<Attempt<T>>
    where
        F: FnMut(usize, &Attempt<T>),
    {
        for index in 1..=self.config.attempts {
            let outcome = self.attempt()?;
            observer(index, &outcome);

            if outcome.succeeded() {
                debug!("grid completed on attempt {index}");
                return Ok(outcome);
            }
        }

        Err(GenerationError::GenerationFailed {
            attempts: self.config.attempts,
            dimensions: (self.config.rows, self.config.cols),
        })
    }
}
