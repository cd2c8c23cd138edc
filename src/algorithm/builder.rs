//! Randomized backtracking placement
//!
//! A placement tentatively commits a tile, rejects it if any filled
//! neighbour disagrees on a shared edge, and otherwise expands into each
//! empty neighbour in shuffled direction order, trying the placeable tiles
//! in a shuffled order until one fits.
//!
//! Rollback is partial. When a neighbour cannot be filled, only that
//! neighbour and the current cell are reset; neighbours expanded earlier in
//! the same call keep their tiles.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::rules::RuleTable;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Position, TileGrid};
use crate::spatial::tiles::Tile;

/// Counters collected over one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Tentative commits, including ones rejected by a conflict
    pub placements: usize,
    /// Commits rejected because a filled neighbour disagreed
    pub conflicts: usize,
    /// Cells reset to empty after holding a tile
    pub rollbacks: usize,
    /// Deepest recursion level reached (the first placement is level 1)
    pub max_depth: usize,
}

/// A single grid mutation recorded during the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceEvent<T> {
    /// Cell that changed
    pub position: Position,
    /// Tile committed, or `None` when the cell was reset
    pub tile: Option<T>,
}

/// Owns the grid for the duration of a search
///
/// The rule table and random source are borrowed so callers can inject a
/// seeded generator and reuse one table across many searches.
pub struct GridBuilder<'a, T, R: ?Sized> {
    grid: TileGrid<T>,
    rules: &'a RuleTable<T>,
    rng: &'a mut R,
    stats: SearchStats,
    trace: Option<Vec<TraceEvent<T>>>,
}

impl<'a, T: Tile, R: Rng + ?Sized> GridBuilder<'a, T, R> {
    /// Start from an all-empty grid
    pub fn new(rows: usize, cols: usize, rules: &'a RuleTable<T>, rng: &'a mut R) -> Self {
        Self::with_grid(TileGrid::new(rows, cols), rules, rng)
    }

    /// Start from an existing, possibly partially filled, grid
    pub fn with_grid(grid: TileGrid<T>, rules: &'a RuleTable<T>, rng: &'a mut R) -> Self {
        Self {
            grid,
            rules,
            rng,
            stats: SearchStats::default(),
            trace: None,
        }
    }

    /// Record every commit and reset from now on
    #[must_use]
    pub fn record_trace(mut self) -> Self {
        if self.trace.is_none() {
            self.trace = Some(Vec::new());
        }
        self
    }

    /// Place `tile` at `position` and expand from it
    ///
    /// Returns `Ok(true)` when the placement and its whole expansion
    /// succeeded and `Ok(false)` when the search ran out of options. On
    /// `Ok(false)` the cell is empty again, but tiles placed by earlier
    /// successful branches of the expansion may remain.
    ///
    /// # Errors
    ///
    /// Returns an error, without touching the grid, if:
    /// - `position` lies outside the grid
    /// - The cell already holds a tile
    /// - `tile` is the empty tile or has no entry in the rule table
    pub fn try_place(&mut self, position: Position, tile: T) -> Result<bool> {
        if tile.is_empty() {
            return Err(invalid_parameter(
                "tile",
                &format!("{tile:?}"),
                &"the empty tile cannot be placed",
            ));
        }
        if !self.rules.contains(tile) {
            return Err(GenerationError::UnknownTile {
                tile: format!("{tile:?}"),
            });
        }

        match self.grid.get(position) {
            None => Err(GenerationError::OutOfBounds {
                position,
                dimensions: self.grid.dimensions(),
            }),
            Some(occupant) if !occupant.is_empty() => Err(GenerationError::CellOccupied {
                position,
                occupant: format!("{occupant:?}"),
            }),
            Some(_) => Ok(self.place(position, tile, 1)),
        }
    }

    fn place(&mut self, position: Position, tile: T, depth: usize) -> bool {
        self.stats.placements += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);
        self.commit(position, tile);

        if self.has_conflict(position, tile) {
            self.stats.conflicts += 1;
            self.reset(position);
            return false;
        }

        let mut directions = Direction::ALL;
        directions.shuffle(&mut *self.rng);
        let mut candidates = self.rules.placeable().to_vec();
        candidates.shuffle(&mut *self.rng);

        let mut expanded = true;
        for direction in directions {
            let Some(neighbour) = self.grid.neighbour(position, direction) else {
                continue;
            };
            if !self.grid.is_vacant(neighbour) {
                continue;
            }

            let filled = candidates
                .iter()
                .any(|&candidate| self.place(neighbour, candidate, depth + 1));

            if !filled {
                self.reset(neighbour);
                expanded = false;
                break;
            }
        }

        if !expanded {
            self.reset(position);
        }
        expanded
    }

    fn has_conflict(&self, position: Position, tile: T) -> bool {
        Direction::ALL.into_iter().any(|direction| {
            self.grid
                .neighbour(position, direction)
                .and_then(|neighbour| self.grid.get(neighbour))
                .filter(|neighbour_tile| !neighbour_tile.is_empty())
                .is_some_and(|neighbour_tile| {
                    !self.rules.compatible(tile, direction, neighbour_tile)
                })
        })
    }

    fn commit(&mut self, position: Position, tile: T) {
        self.grid.set(position, tile);
        if let Some(trace) = self.trace.as_mut() {
            trace.push(TraceEvent {
                position,
                tile: Some(tile),
            });
        }
    }

    // Resetting a cell that is already empty is a no-op
    fn reset(&mut self, position: Position) {
        let previous = self.grid.set(position, T::EMPTY);
        if previous.is_some_and(|tile| !tile.is_empty()) {
            self.stats.rollbacks += 1;
            if let Some(trace) = self.trace.as_mut() {
                trace.push(TraceEvent {
                    position,
                    tile: None,
                });
            }
        }
    }

    /// Current grid contents
    pub const fn grid(&self) -> &TileGrid<T> {
        &self.grid
    }

    /// Counters collected so far
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Recorded trace, empty unless [`Self::record_trace`] was called
    pub fn trace(&self) -> &[TraceEvent<T>] {
        self.trace.as_deref().unwrap_or_default()
    }

    /// Hand back the grid, statistics and trace
    pub fn finish(self) -> (TileGrid<T>, SearchStats, Vec<TraceEvent<T>>) {
        (self.grid, self.stats, self.trace.unwrap_or_default())
    }
}
