//! PNG export drawing each cell from its glyph

use std::path::Path;

use image::{Rgba, RgbaImage};

use crate::io::configuration::{OPEN_COLOR, PIXELS_PER_GLYPH_CELL, WALL_COLOR, WALL_GLYPH};
use crate::io::error::{GenerationError, Result, file_system_error};
use crate::io::render::GlyphTable;
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::Tile;

/// Paint a grid into an image, walls dark and openings light
///
/// Every glyph character becomes a square of `PIXELS_PER_GLYPH_CELL` pixels,
/// so a cell spans three such squares on each axis.
pub fn render_image<T: Tile>(grid: &TileGrid<T>, glyphs: &GlyphTable<T>) -> RgbaImage {
    let scale = PIXELS_PER_GLYPH_CELL;
    let width = grid.cols() as u32 * 3 * scale;
    let height = grid.rows() as u32 * 3 * scale;
    let mut img = RgbaImage::new(width, height);

    for ([row, col], tile) in grid.iter() {
        let glyph = glyphs.glyph(tile);
        for (glyph_row, chars) in glyph.iter().enumerate() {
            for (glyph_col, &ch) in chars.iter().enumerate() {
                let color = if ch == WALL_GLYPH {
                    Rgba(WALL_COLOR)
                } else {
                    Rgba(OPEN_COLOR)
                };

                let origin_x = (col * 3 + glyph_col) as u32 * scale;
                let origin_y = (row * 3 + glyph_row) as u32 * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(origin_x + dx, origin_y + dy, color);
                    }
                }
            }
        }
    }

    img
}

/// Export the grid as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_grid_as_png<T: Tile>(
    grid: &TileGrid<T>,
    glyphs: &GlyphTable<T>,
    output_path: &Path,
) -> Result<()> {
    let img = render_image(grid, glyphs);

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
