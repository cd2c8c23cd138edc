//! Text rendering of tile grids as bordered 3x3 ASCII art

use std::collections::HashMap;

use crate::algorithm::rules::RuleTable;
use crate::io::configuration::{OPEN_GLYPH, WALL_GLYPH};
use crate::spatial::direction::{Direction, DirectionSet};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::Tile;

/// A 3x3 block of characters drawn for one cell
pub type Glyph = [[char; 3]; 3];

/// Solid wall drawn for empty cells and tiles without a glyph
pub const SOLID_GLYPH: Glyph = [[WALL_GLYPH; 3]; 3];

/// Glyph for a tile with the given open connectors
///
/// Corners are always walls and the centre is always open; each edge
/// midpoint is open exactly when the tile exposes a connector there.
pub fn connector_glyph(open: DirectionSet) -> Glyph {
    let edge = |direction: Direction| {
        if open.contains(direction) {
            OPEN_GLYPH
        } else {
            WALL_GLYPH
        }
    };

    [
        [WALL_GLYPH, edge(Direction::North), WALL_GLYPH],
        [edge(Direction::West), OPEN_GLYPH, edge(Direction::East)],
        [WALL_GLYPH, edge(Direction::South), WALL_GLYPH],
    ]
}

/// Mapping from tile to the glyph drawn for it
#[derive(Debug, Clone)]
pub struct GlyphTable<T> {
    glyphs: HashMap<T, Glyph>,
}

impl<T: Tile> GlyphTable<T> {
    /// Create a table where every tile renders solid
    pub fn new() -> Self {
        Self {
            glyphs: HashMap::new(),
        }
    }

    /// Derive connector glyphs for every placeable tile in `rules`
    pub fn from_rules(rules: &RuleTable<T>) -> Self {
        let glyphs = rules
            .placeable()
            .iter()
            .map(|&tile| (tile, connector_glyph(rules.open_directions(tile))))
            .collect();
        Self { glyphs }
    }

    /// Set or replace the glyph of a tile
    pub fn insert(&mut self, tile: T, glyph: Glyph) {
        self.glyphs.insert(tile, glyph);
    }

    /// Glyph for a tile; empty and unknown tiles render solid
    pub fn glyph(&self, tile: T) -> Glyph {
        if tile.is_empty() {
            return SOLID_GLYPH;
        }
        self.glyphs.get(&tile).copied().unwrap_or(SOLID_GLYPH)
    }
}

impl<T: Tile> Default for GlyphTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a grid as text framed by a `+---+` border
///
/// Each grid row becomes three text lines; every line ends with a newline.
pub fn render<T: Tile>(grid: &TileGrid<T>, glyphs: &GlyphTable<T>) -> String {
    let border = format!("+{}+\n", "-".repeat(grid.cols() * 3));
    let mut output = String::with_capacity(border.len() * (grid.rows() * 3 + 2));
    output.push_str(&border);

    for row in grid.to_rows() {
        let cells: Vec<Glyph> = row.iter().map(|&tile| glyphs.glyph(tile)).collect();
        for line in 0..3 {
            output.push('|');
            for glyph in &cells {
                if let Some(chars) = glyph.get(line) {
                    output.extend(chars.iter());
                }
            }
            output.push_str("|\n");
        }
    }

    output.push_str(&border);
    output
}
