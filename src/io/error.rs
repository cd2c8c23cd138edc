//! Error types for rule construction, placement preconditions and output
//!
//! A search that finds no consistent assignment is not an error: placement
//! reports it as `Ok(false)` and generation as `Ok(None)`. The variants here
//! cover caller mistakes and I/O failures.

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::Position;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum GenerationError {
    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Connector rules are malformed
    InvalidRuleTable {
        /// Description of what is wrong with the rules
        reason: String,
    },

    /// Placement targeted a cell outside the grid
    OutOfBounds {
        /// Requested position as `[row, col]`
        position: Position,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Placement targeted a cell that already holds a tile
    CellOccupied {
        /// Requested position as `[row, col]`
        position: Position,
        /// Debug rendering of the tile already there
        occupant: String,
    },

    /// Placement used a tile the rule table does not know
    UnknownTile {
        /// Debug rendering of the tile
        tile: String,
    },

    /// Every attempt ended without a complete grid
    GenerationFailed {
        /// Number of attempts made
        attempts: usize,
        /// Grid dimensions (rows, cols)
        dimensions: (usize, usize),
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidRuleTable { reason } => {
                write!(f, "Invalid rule table: {reason}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::CellOccupied { position, occupant } => {
                write!(
                    f,
                    "Cell ({}, {}) is already occupied by {occupant}",
                    position[0], position[1]
                )
            }
            Self::UnknownTile { tile } => {
                write!(f, "Tile {tile} has no entry in the rule table")
            }
            Self::GenerationFailed {
                attempts,
                dimensions,
            } => {
                write!(
                    f,
                    "No consistent {}x{} grid found after {attempts} attempt(s)",
                    dimensions.0, dimensions.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GenerationError {
    GenerationError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a file system error for `path`
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GenerationError {
    GenerationError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
