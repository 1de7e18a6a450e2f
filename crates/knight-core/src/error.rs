//! Error types for coordinate handling.

use std::fmt;

/// Errors arising when a coordinate cannot name a board square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// An algebraic coordinate is malformed or names no square (`"I1"`, `"A9"`).
    InvalidCoordinate {
        /// The rejected input, verbatim.
        input: String,
    },
    /// Numeric coordinates lie outside the 8×8 board.
    OutOfBounds {
        /// File index (0 = `A`).
        x: i32,
        /// Rank index (0 = `1`).
        y: i32,
    },
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { input } => {
                write!(f, "invalid coordinate {input:?}: expected a file A-H and a rank 1-8")
            }
            Self::OutOfBounds { x, y } => {
                write!(f, "coordinate ({x}, {y}) out of bounds: expected 0..8 on both axes")
            }
        }
    }
}

impl std::error::Error for CoordError {}
