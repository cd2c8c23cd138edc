//! Tile-adjacency constrained map generation by randomized backtracking
//!
//! Tiles expose open connectors on some of their four edges. The generator
//! fills a fixed-size grid so that every pair of adjacent tiles agrees on
//! the edge between them, expanding outward from a random seed tile and
//! undoing placements whose expansion cannot be completed.

#![forbid(unsafe_code)]

/// Rule table, backtracking builder and generation entry points
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Directions, tiles and the tile grid
pub mod spatial;

pub use algorithm::executor::{Generator, GeneratorConfig, generate};
pub use algorithm::rules::RuleTable;
pub use io::error::{GenerationError, Result};
pub use spatial::{Direction, DirectionSet, Position, Tile, TileGrid, TileType};
