//! Tile vocabulary and the bundled pipe-piece tile set
//!
//! The search is generic over any closed tile enumeration that names one
//! member as the empty cell. [`TileType`] is the set shipped with the crate:
//! eleven pipe pieces whose connectors join straight runs, corners, tees and
//! crossings.

use std::fmt;
use std::hash::Hash;

use crate::spatial::direction::Direction;

/// A grid cell value with a distinguished empty member
pub trait Tile: Copy + Eq + Hash + fmt::Debug {
    /// The unassigned cell value
    const EMPTY: Self;

    /// Test whether this is the unassigned cell value
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

/// Pipe pieces named after the connectors they expose
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileType {
    /// Unassigned cell
    #[default]
    Empty,
    /// West and east
    Horizontal,
    /// All four sides
    Cross,
    /// East, south and west
    TeeDown,
    /// North, east and west
    TeeUp,
    /// North and south
    Vertical,
    /// North, east and south
    TeeRight,
    /// North, west and south
    TeeLeft,
    /// North and east
    CornerNorthEast,
    /// North and west
    CornerNorthWest,
    /// South and west
    CornerSouthWest,
    /// East and south
    CornerSouthEast,
}

impl TileType {
    /// Every placeable piece in declaration order
    pub const PLACEABLE: [Self; 11] = [
        Self::Horizontal,
        Self::Cross,
        Self::TeeDown,
        Self::TeeUp,
        Self::Vertical,
        Self::TeeRight,
        Self::TeeLeft,
        Self::CornerNorthEast,
        Self::CornerNorthWest,
        Self::CornerSouthWest,
        Self::CornerSouthEast,
    ];

    /// Directions on which this piece has an open connector
    pub const fn connectors(self) -> &'static [Direction] {
        use Direction::{East, North, South, West};
        match self {
            Self::Empty => &[],
            Self::Horizontal => &[West, East],
            Self::Cross => &[North, East, South, West],
            Self::TeeDown => &[East, South, West],
            Self::TeeUp => &[North, East, West],
            Self::Vertical => &[North, South],
            Self::TeeRight => &[North, East, South],
            Self::TeeLeft => &[North, West, South],
            Self::CornerNorthEast => &[North, East],
            Self::CornerNorthWest => &[North, West],
            Self::CornerSouthWest => &[South, West],
            Self::CornerSouthEast => &[East, South],
        }
    }
}

impl Tile for TileType {
    const EMPTY: Self = Self::Empty;
}
