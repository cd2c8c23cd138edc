//! Fixed-size tile grid addressed by `[row, col]`
//!
//! Every cell starts out empty. The grid never resizes: positions outside
//! the initial dimensions simply have no cell and no neighbours.

use ndarray::Array2;

use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::Direction;
use crate::spatial::tiles::Tile;

/// Grid coordinates as `[row, col]`
pub type Position = [usize; 2];

/// Rectangular grid of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid<T> {
    cells: Array2<T>,
}

impl<T: Tile> TileGrid<T> {
    /// Create a grid with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((rows, cols), T::EMPTY),
        }
    }

    /// Build a grid from row-major rows of equal length
    ///
    /// # Errors
    ///
    /// Returns an error if the rows differ in length
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let row_count = rows.len();
        let col_count = rows.first().map_or(0, Vec::len);
        let flat: Vec<T> = rows.iter().flatten().copied().collect();

        let cells = Array2::from_shape_vec((row_count, col_count), flat).map_err(|e| {
            invalid_parameter("rows", &format!("{row_count} rows"), &e.to_string())
        })?;

        Ok(Self { cells })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Test whether a position lies inside the grid
    pub fn contains(&self, position: Position) -> bool {
        position[0] < self.rows() && position[1] < self.cols()
    }

    /// Tile at a position, `None` when out of bounds
    pub fn get(&self, position: Position) -> Option<T> {
        self.cells.get(position).copied()
    }

    /// Overwrite a cell, returning the previous value
    ///
    /// Writes outside the grid are ignored and return `None`.
    pub fn set(&mut self, position: Position, tile: T) -> Option<T> {
        self.cells
            .get_mut(position)
            .map(|cell| std::mem::replace(cell, tile))
    }

    /// Test whether a position is inside the grid and still unassigned
    pub fn is_vacant(&self, position: Position) -> bool {
        self.get(position).is_some_and(Tile::is_empty)
    }

    /// Position one step away in `direction`, if it is inside the grid
    pub fn neighbour(&self, position: Position, direction: Direction) -> Option<Position> {
        let [d_row, d_col] = direction.offset();
        let row = position[0].checked_add_signed(d_row)?;
        let col = position[1].checked_add_signed(d_col)?;
        let next = [row, col];
        self.contains(next).then_some(next)
    }

    /// Number of unassigned cells
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|tile| tile.is_empty()).count()
    }

    /// Test whether every cell holds a placeable tile
    pub fn is_complete(&self) -> bool {
        self.count_empty() == 0
    }

    /// Copy the grid out as row-major rows
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.cells.outer_iter().map(|row| row.to_vec()).collect()
    }

    /// Iterate over `(position, tile)` pairs in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Position, T)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &tile)| ([row, col], tile))
    }
}
