//! Whole-grid checks of the connector compatibility law

use crate::algorithm::rules::RuleTable;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Position, TileGrid};
use crate::spatial::tiles::Tile;

/// Two adjacent filled cells that disagree about their shared edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Violation<T> {
    /// Cell on the north or west side of the pair
    pub position: Position,
    /// Direction from `position` to the other cell (east or south)
    pub direction: Direction,
    /// Tile at `position`
    pub tile: T,
    /// Tile in the other cell
    pub neighbour: T,
}

/// Report every adjacent filled pair that breaks the compatibility law
///
/// Each pair is visited once, from its north or west member. Empty cells
/// are ignored, so partially filled grids can be checked too.
pub fn find_violations<T: Tile>(grid: &TileGrid<T>, rules: &RuleTable<T>) -> Vec<Violation<T>> {
    let mut violations = Vec::new();

    for (position, tile) in grid.iter().filter(|(_, tile)| !tile.is_empty()) {
        for direction in [Direction::East, Direction::South] {
            let Some(neighbour) = grid
                .neighbour(position, direction)
                .and_then(|next| grid.get(next))
                .filter(|neighbour| !neighbour.is_empty())
            else {
                continue;
            };

            if !rules.compatible(tile, direction, neighbour) {
                violations.push(Violation {
                    position,
                    direction,
                    tile,
                    neighbour,
                });
            }
        }
    }

    violations
}

/// Test whether the grid is complete and free of violations
pub fn is_consistent<T: Tile>(grid: &TileGrid<T>, rules: &RuleTable<T>) -> bool {
    grid.is_complete() && find_violations(grid, rules).is_empty()
}
