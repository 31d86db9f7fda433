//! Board representation: coordinates, directions, marks and the sparse grid

pub mod grid;
pub mod mark;

#[cfg(test)]
mod tests;

// Re-exports
pub use grid::MarkGrid;
pub use mark::{Mark, MarkId};

/// Opaque player token.
///
/// Identifies a competitor by its seat in the turn order. Names are kept by
/// the match configuration, marks only carry the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u8);

impl PlayerId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Position on the grid
///
/// Signed so that lookups one step past an edge are still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Neighboring position one step in `dir`, or `None` past the `i32` range
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let row = self.row.checked_add(dir.dr as i32)?;
        let col = self.col.checked_add(dir.dc as i32)?;
        Some(Pos::new(row, col))
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Unit offset to one of the 8 surrounding cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    /// All 8 neighbor offsets, in link-slot order.
    ///
    /// Slot `i` and slot `7 - i` are always opposite each other.
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    #[inline]
    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    /// Link slot of this direction. Panics in debug builds for (0, 0).
    #[inline]
    pub fn slot(self) -> usize {
        debug_assert!(self.dr != 0 || self.dc != 0, "(0, 0) is not a direction");
        let raw = ((self.dr + 1) * 3 + (self.dc + 1)) as usize;
        // skip the centre cell (raw index 4)
        if raw > 4 {
            raw - 1
        } else {
            raw
        }
    }

    #[inline]
    pub const fn opposite(self) -> Direction {
        Direction::new(-self.dr, -self.dc)
    }
}
