/// Command-line parsing and session orchestration
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG export
pub mod image;
/// Attempt progress display
pub mod progress;
/// Text rendering
pub mod render;
/// Search replay GIF export
pub mod visualization;
