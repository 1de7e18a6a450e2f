use knight_core::{Point, Square};

/// The eight knight jumps, in the order every search tries them.
pub const KNIGHT_OFFSETS: [Point; 8] = [
    Point::new(2, 1),
    Point::new(2, -1),
    Point::new(-2, 1),
    Point::new(-2, -1),
    Point::new(1, 2),
    Point::new(1, -2),
    Point::new(-1, 2),
    Point::new(-1, -2),
];

/// Squares one knight move away from `from`, in [`KNIGHT_OFFSETS`] order.
///
/// Jumps that would leave the board are skipped, so corners yield 2 squares
/// and the centre yields 8.
#[inline]
pub fn knight_moves(from: Square) -> impl Iterator<Item = Square> {
    let p = from.point();
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&d| Square::from_point(p + d))
}

/// Cached neighbor computation helper.
///
/// Holds an 8-slot buffer so repeated queries do not allocate.
pub struct Neighbors {
    buf: Vec<Square>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(KNIGHT_OFFSETS.len()),
        }
    }

    /// Return the knight moves from `sq`, keeping only those for which
    /// `keep` returns `true`.
    pub fn knight(&mut self, sq: Square, keep: impl Fn(Square) -> bool) -> &[Square] {
        self.buf.clear();
        self.buf.extend(knight_moves(sq).filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn corner_has_two_moves() {
        let moves: Vec<Square> = knight_moves(sq("A1")).collect();
        assert_eq!(moves, vec![sq("C2"), sq("B3")]);
    }

    #[test]
    fn centre_has_eight_moves_in_table_order() {
        let moves: Vec<Square> = knight_moves(sq("D4")).collect();
        assert_eq!(
            moves,
            vec![
                sq("F5"),
                sq("F3"),
                sq("B5"),
                sq("B3"),
                sq("E6"),
                sq("E2"),
                sq("C6"),
                sq("C2"),
            ]
        );
    }

    #[test]
    fn moves_are_knight_shaped() {
        for from in Square::all() {
            for to in knight_moves(from) {
                let d = to.point() - from.point();
                let (ax, ay) = (d.x.abs(), d.y.abs());
                assert!((ax, ay) == (1, 2) || (ax, ay) == (2, 1), "{from} -> {to}");
            }
        }
    }

    #[test]
    fn moves_are_reversible() {
        for from in Square::all() {
            for to in knight_moves(from) {
                assert!(knight_moves(to).any(|back| back == from));
            }
        }
    }

    #[test]
    fn total_move_count() {
        // 168 undirected knight edges on 8×8, counted from both ends.
        let total: usize = Square::all().map(|s| knight_moves(s).count()).sum();
        assert_eq!(total, 336);
    }

    #[test]
    fn neighbors_helper_filters() {
        let mut n = Neighbors::new();
        let b3 = sq("B3");
        let kept = n.knight(sq("A1"), |s| s != b3);
        assert_eq!(kept, &[sq("C2")]);
        let all = n.knight(sq("A1"), |_| true);
        assert_eq!(all.len(), 2);
    }
}
