//! Board squares and algebraic notation.

use std::fmt;
use std::str::FromStr;

use crate::error::CoordError;
use crate::geom::{Point, Range};

/// Number of files (and ranks) on the board.
pub const BOARD_SIZE: i32 = 8;

/// Number of squares on the board.
pub const SQUARE_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// The whole board as a range: files `A..=H` on X, ranks `1..=8` on Y.
pub const BOARD: Range = Range::new(0, 0, BOARD_SIZE, BOARD_SIZE);

/// A square on the 8×8 board.
///
/// Unlike a [`Point`], a `Square` is always in bounds: every constructor
/// checks against [`BOARD`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Point", into = "Point")
)]
pub struct Square(Point);

impl Square {
    pub const A1: Square = Square(Point::new(0, 0));
    pub const H8: Square = Square(Point::new(BOARD_SIZE - 1, BOARD_SIZE - 1));

    /// Build a square from file and rank indices in `[0, 8)`.
    pub fn new(x: i32, y: i32) -> Result<Self, CoordError> {
        Self::from_point(Point::new(x, y)).ok_or(CoordError::OutOfBounds { x, y })
    }

    /// The square at `p`, or `None` if `p` is off the board.
    #[inline]
    pub fn from_point(p: Point) -> Option<Self> {
        if BOARD.contains(p) { Some(Self(p)) } else { None }
    }

    /// The square with the given rank-major index (`y * 8 + x`).
    #[inline]
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= SQUARE_COUNT {
            return None;
        }
        let w = BOARD_SIZE as usize;
        Some(Self(Point::new((idx % w) as i32, (idx / w) as i32)))
    }

    /// Rank-major index in `[0, 64)`.
    #[inline]
    pub fn index(self) -> usize {
        (self.0.y * BOARD_SIZE + self.0.x) as usize
    }

    #[inline]
    pub fn point(self) -> Point {
        self.0
    }

    /// File index, 0 = `A`.
    #[inline]
    pub fn x(self) -> i32 {
        self.0.x
    }

    /// Rank index, 0 = `1`.
    #[inline]
    pub fn y(self) -> i32 {
        self.0.y
    }

    /// All 64 squares, `A1, B1, .., H1, A2, .., H8`.
    pub fn all() -> impl ExactSizeIterator<Item = Square> {
        BOARD.iter().map(Square)
    }
}

impl TryFrom<Point> for Square {
    type Error = CoordError;

    fn try_from(p: Point) -> Result<Self, CoordError> {
        Self::new(p.x, p.y)
    }
}

impl From<Square> for Point {
    fn from(sq: Square) -> Point {
        sq.0
    }
}

impl FromStr for Square {
    type Err = CoordError;

    /// Parse a file letter and a rank digit, e.g. `"A1"` or `"h8"`.
    fn from_str(s: &str) -> Result<Self, CoordError> {
        let invalid = || CoordError::InvalidCoordinate {
            input: s.to_string(),
        };
        let &[file, rank] = s.as_bytes() else {
            return Err(invalid());
        };
        let x = i32::from(file.to_ascii_uppercase()) - i32::from(b'A');
        let y = i32::from(rank) - i32::from(b'1');
        Self::from_point(Point::new(x, y)).ok_or_else(invalid)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = char::from(b'A' + self.0.x as u8);
        let rank = char::from(b'1' + self.0.y as u8);
        write!(f, "{file}{rank}")
    }
}
