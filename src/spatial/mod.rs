//! Spatial data structures for tile placement
//!
//! This module contains:
//! - Compass directions and connector sets
//! - The fixed-size tile grid
//! - The tile vocabulary and bundled pipe-piece set

/// Compass directions and connector sets
pub mod direction;
/// Fixed-size tile grid
pub mod grid;
/// Tile trait and the bundled tile set
pub mod tiles;

pub use direction::{Direction, DirectionSet};
pub use grid::{Position, TileGrid};
pub use tiles::{Tile, TileType};
