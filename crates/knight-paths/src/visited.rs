use knight_core::{BOARD_SIZE, Square};

const SIDE: usize = BOARD_SIZE as usize;

/// One flag per square, flipped from unvisited to visited and never back.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    cells: [[bool; SIDE]; SIDE],
}

impl VisitedSet {
    /// A set with every square unvisited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `sq` visited. Returns `true` if it was not visited before.
    #[inline]
    pub fn insert(&mut self, sq: Square) -> bool {
        let cell = &mut self.cells[sq.x() as usize][sq.y() as usize];
        let fresh = !*cell;
        *cell = true;
        fresh
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.cells[sq.x() as usize][sq.y() as usize]
    }

    /// Number of visited squares.
    pub fn len(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
