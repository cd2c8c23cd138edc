//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 20;
/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 10;
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default number of generation attempts before giving up
pub const DEFAULT_ATTEMPTS: usize = 1;

// Recursion depth grows with the cell count, so both limits bound stack use
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 256;
/// Maximum allowed number of cells
pub const MAX_GRID_CELLS: usize = 4096;

// Glyph and image settings
/// Character drawn for a closed edge or wall
pub const WALL_GLYPH: char = '#';
/// Character drawn for an open connector
pub const OPEN_GLYPH: char = ' ';
/// Pixels per glyph character along each axis
pub const PIXELS_PER_GLYPH_CELL: u32 = 4;
/// Colour of wall pixels
pub const WALL_COLOR: [u8; 4] = [40, 44, 52, 255];
/// Colour of open connector pixels
pub const OPEN_COLOR: [u8; 4] = [230, 220, 190, 255];

// Search replay settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 5;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Upper bound on frames written to a replay GIF
pub const MAX_GIF_FRAMES: usize = 400;
/// Multiplier applied to the final frame delay
pub const FINAL_FRAME_HOLD: u32 = 25;
