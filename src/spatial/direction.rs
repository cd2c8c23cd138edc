//! Compass directions and compact connector sets

use bitvec::prelude::*;
use std::fmt;

/// One of the four compass directions a tile edge can face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards row 0
    North,
    /// Towards the last column
    East,
    /// Towards the last row
    South,
    /// Towards column 0
    West,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The direction rotated by 180°
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Step as `[row, col]` when moving one cell this way
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::North => [-1, 0],
            Self::East => [0, 1],
            Self::South => [1, 0],
            Self::West => [0, -1],
        }
    }

    /// Single-letter compass abbreviation
    pub const fn abbreviation(self) -> char {
        match self {
            Self::North => 'N',
            Self::East => 'E',
            Self::South => 'S',
            Self::West => 'W',
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

type DirectionBits = BitArr!(for 4, in u8, Lsb0);

/// Set of directions on which a tile exposes an open connector
///
/// Backed by a 4-bit array indexed in [`Direction::ALL`] order, so sets are
/// `Copy` and compare in constant time.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionSet {
    bits: DirectionBits,
}

impl DirectionSet {
    /// A set with no open connectors
    pub const fn empty() -> Self {
        Self {
            bits: DirectionBits::ZERO,
        }
    }

    /// A set with every direction open
    pub fn all() -> Self {
        Self::from_directions(&Direction::ALL)
    }

    /// Collect a set from a slice, ignoring duplicates
    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut set = Self::empty();
        for &direction in directions {
            set.insert(direction);
        }
        set
    }

    /// Open the connector facing `direction`
    pub fn insert(&mut self, direction: Direction) {
        self.bits.set(direction.index(), true);
    }

    /// Test whether the connector facing `direction` is open
    pub fn contains(&self, direction: Direction) -> bool {
        self.bits.get(direction.index()).as_deref() == Some(&true)
    }

    /// Number of open connectors
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if every connector is closed
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Open directions in clockwise order from north
    pub fn iter(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL
            .into_iter()
            .filter(move |&direction| self.contains(direction))
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in Direction::ALL {
            if self.contains(direction) {
                write!(f, "{direction}")?;
            } else {
                write!(f, "-")?;
            }
        }
        Ok(())
    }
}
