//! Search replay: turns a placement trace into an animated GIF

use std::path::Path;

use image::{Delay, Frame};

use crate::algorithm::builder::TraceEvent;
use crate::io::configuration::{FINAL_FRAME_HOLD, MAX_GIF_FRAMES, VIEWER_MIN_FRAME_DELAY_MS};
use crate::io::error::{GenerationError, Result, file_system_error};
use crate::io::image::render_image;
use crate::io::render::GlyphTable;
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::Tile;

/// Captured commits and resets of one search
///
/// Replaying the events in order onto an empty grid reproduces every
/// intermediate state the search went through.
pub struct TraceCapture<T> {
    events: Vec<TraceEvent<T>>,
    rows: usize,
    cols: usize,
}

impl<T: Tile> TraceCapture<T> {
    /// Wrap the trace of a search on a `rows` x `cols` grid
    pub const fn new(rows: usize, cols: usize, events: Vec<TraceEvent<T>>) -> Self {
        Self { events, rows, cols }
    }

    /// Returns all recorded events
    pub fn events(&self) -> &[TraceEvent<T>] {
        &self.events
    }

    /// Replay the first `count` events onto an empty grid
    pub fn replay(&self, count: usize) -> TileGrid<T> {
        let mut grid = TileGrid::new(self.rows, self.cols);
        for event in self.events.iter().take(count) {
            grid.set(event.position, event.tile.unwrap_or(T::EMPTY));
        }
        grid
    }

    /// Number of events folded into each frame
    ///
    /// Frames are skipped when the requested delay is shorter than viewers
    /// honour, and further when the trace would exceed `MAX_GIF_FRAMES`.
    pub fn skip_factor(&self, frame_delay_ms: u32) -> usize {
        let viewer_skip = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms.max(1)) as usize
        } else {
            1
        };
        let size_skip = self.events.len().div_ceil(MAX_GIF_FRAMES).max(1);
        viewer_skip.max(size_skip)
    }

    /// Export the replay as a GIF
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No events were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(
        &self,
        glyphs: &GlyphTable<T>,
        output_path: &Path,
        frame_delay_ms: u32,
    ) -> Result<()> {
        if self.events.is_empty() {
            return Err(GenerationError::InvalidParameter {
                parameter: "trace",
                value: String::new(),
                reason: "no placement events captured for visualization".to_string(),
            });
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let frames = self.generate_frames(glyphs, effective_delay_ms, self.skip_factor(frame_delay_ms));

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(|e| file_system_error(output_path, "create file", e))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| GenerationError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, glyphs: &GlyphTable<T>, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut grid = TileGrid::new(self.rows, self.cols);
        let mut frames = vec![Self::frame(&grid, glyphs, delay_ms)];

        for (index, event) in self.events.iter().enumerate() {
            grid.set(event.position, event.tile.unwrap_or(T::EMPTY));
            if (index + 1) % skip_factor == 0 {
                frames.push(Self::frame(&grid, glyphs, delay_ms));
            }
        }

        if self.events.len() % skip_factor != 0 {
            frames.push(Self::frame(&grid, glyphs, delay_ms));
        }

        // Hold the final state so the result is readable
        frames.push(Self::frame(&grid, glyphs, delay_ms * FINAL_FRAME_HOLD));

        frames
    }

    fn frame(grid: &TileGrid<T>, glyphs: &GlyphTable<T>, delay_ms: u32) -> Frame {
        Frame::from_parts(
            render_image(grid, glyphs),
            0,
            0,
            Delay::from_numer_denom_ms(delay_ms, 1),
        )
    }

    /// Number of frames an export with this delay would write
    pub fn frame_count(&self, frame_delay_ms: u32) -> usize {
        let skip_factor = self.skip_factor(frame_delay_ms);
        let mut count = 1 + self.events.len() / skip_factor;
        if self.events.len() % skip_factor != 0 {
            count += 1;
        }
        count + 1
    }
}
