//! Connector rules: which edges of each tile are open
//!
//! Two adjacent tiles are compatible when they agree about the edge they
//! share: either both expose a connector across it or neither does.

use std::collections::HashMap;

use crate::io::error::{GenerationError, Result};
use crate::spatial::direction::{Direction, DirectionSet};
use crate::spatial::tiles::{Tile, TileType};

/// Immutable mapping from placeable tile to its open connectors
///
/// Also fixes the order of placeable tiles, which is the order the search
/// shuffles from.
#[derive(Debug, Clone)]
pub struct RuleTable<T> {
    connectors: HashMap<T, DirectionSet>,
    placeable: Vec<T>,
}

impl<T: Tile> RuleTable<T> {
    /// Build a rule table from `(tile, open directions)` entries
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No entries are given
    /// - An entry is given for the empty tile
    /// - A tile appears more than once
    pub fn from_rules(rules: &[(T, &[Direction])]) -> Result<Self> {
        if rules.is_empty() {
            return Err(GenerationError::InvalidRuleTable {
                reason: "at least one placeable tile is required".to_string(),
            });
        }

        let mut connectors = HashMap::with_capacity(rules.len());
        let mut placeable = Vec::with_capacity(rules.len());

        for &(tile, directions) in rules {
            if tile.is_empty() {
                return Err(GenerationError::InvalidRuleTable {
                    reason: format!("the empty tile {tile:?} cannot carry connectors"),
                });
            }
            if connectors
                .insert(tile, DirectionSet::from_directions(directions))
                .is_some()
            {
                return Err(GenerationError::InvalidRuleTable {
                    reason: format!("tile {tile:?} is listed more than once"),
                });
            }
            placeable.push(tile);
        }

        Ok(Self {
            connectors,
            placeable,
        })
    }

    /// Open connectors of a placeable tile
    ///
    /// Looking up a tile without an entry is a programming error; it trips
    /// a debug assertion and yields the empty set otherwise.
    pub fn open_directions(&self, tile: T) -> DirectionSet {
        debug_assert!(
            self.contains(tile),
            "tile {tile:?} has no entry in the rule table"
        );
        self.connectors.get(&tile).copied().unwrap_or_default()
    }

    /// Test whether `tile` exposes a connector towards `direction`
    pub fn exposes(&self, tile: T, direction: Direction) -> bool {
        self.open_directions(tile).contains(direction)
    }

    /// Test whether `neighbour`, lying `direction` of `tile`, agrees with it
    /// on their shared edge
    pub fn compatible(&self, tile: T, direction: Direction, neighbour: T) -> bool {
        self.exposes(tile, direction) == self.exposes(neighbour, direction.opposite())
    }

    /// Test whether a tile has an entry
    pub fn contains(&self, tile: T) -> bool {
        self.connectors.contains_key(&tile)
    }

    /// Placeable tiles in declaration order
    pub fn placeable(&self) -> &[T] {
        &self.placeable
    }

    /// Number of placeable tiles
    pub fn len(&self) -> usize {
        self.placeable.len()
    }

    /// Test if the table has no placeable tiles
    pub fn is_empty(&self) -> bool {
        self.placeable.is_empty()
    }
}

impl RuleTable<TileType> {
    /// The bundled eleven-piece pipe tile set
    pub fn standard() -> Self {
        let connectors = TileType::PLACEABLE
            .iter()
            .map(|&tile| (tile, DirectionSet::from_directions(tile.connectors())))
            .collect();

        Self {
            connectors,
            placeable: TileType::PLACEABLE.to_vec(),
        }
    }
}
