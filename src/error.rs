//! Centralized error types for the maze-chase core.
//!
//! Parsing and grid access report through these; movement resolution never
//! errors, it answers every probe (out-of-grid probes count as blocked).

use glam::UVec2;

use crate::map::cell::ActorKind;

/// Main error type for the crate.
///
/// This is the umbrella type for public APIs that can fail in more than
/// one way; the focused types below convert into it.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Maze parsing error: {0}")]
    Parse(#[from] ParseError),

    #[error("Grid access error: {0}")]
    OutOfRange(#[from] OutOfRangeError),
}

/// Error type for maze document parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The first line is absent or does not read `"munch maze WxH"`.
    #[error("Missing or malformed header line: {line:?}")]
    MalformedHeader { line: String },

    #[error("Expected {expected} rows after the header, found {found}")]
    RowCountMismatch { expected: u32, found: usize },

    #[error("Row {row} is {found} columns wide, expected {expected}")]
    RowLengthMismatch { row: u32, found: usize, expected: u32 },

    /// Line and column are 1-based file coordinates, header included.
    #[error("Unknown symbol {symbol:?} at line {line} column {column}")]
    UnknownSymbol { line: u32, column: u32, symbol: char },

    #[error("No start cell for {0}")]
    MissingStart(ActorKind),

    #[error("More than one start cell for {actor}: first at {first}, again at {second}")]
    DuplicateStart { actor: ActorKind, first: UVec2, second: UVec2 },
}

/// A cell coordinate fell outside the grid. Carries the offending
/// coordinate and the grid dimensions; coordinates are never clamped.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Cell ({x}, {y}) is outside the {width}x{height} maze")]
pub struct OutOfRangeError {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
