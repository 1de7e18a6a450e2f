use knight_core::Square;

/// A discovered square and the number of knight moves it took to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub square: Square,
    pub dist: i32,
}

impl SearchNode {
    #[inline]
    pub const fn new(square: Square, dist: i32) -> Self {
        Self { square, dist }
    }
}

/// Sentinel distance meaning "unreachable".
///
/// Every square is reachable from every other on the 8×8 board, so no search
/// from an in-bounds square ever returns it.
pub const UNREACHABLE: i32 = -1;
