//! **knight-core** — board geometry and squares for knight-distance search.
//!
//! This crate provides the foundational types used by the search crate and
//! the benchmark harness: unchecked geometry primitives ([`Point`],
//! [`Range`]), the validated board [`Square`] with algebraic-notation
//! parsing, and the [`CoordError`] returned when a coordinate is rejected.

pub mod error;
pub mod geom;
pub mod square;

pub use error::CoordError;
pub use geom::{Point, Range, RangeIter};
pub use square::{BOARD, BOARD_SIZE, SQUARE_COUNT, Square};
