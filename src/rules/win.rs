//! Win detection by walking neighbor links
//!
//! A line through a freshly placed mark is found without scanning the grid:
//! starting at the mark, follow its same-owner links along one axis in both
//! directions until a link is missing. Only the four axes through the new
//! mark can have changed, so only those are checked.

use crate::board::{Direction, MarkGrid, MarkId, PlayerId, Pos};

/// Default run length that ends a match
pub const WIN_LENGTH: usize = 5;

/// The four axes, in check order: horizontal, diagonal down-right,
/// vertical, diagonal up-right.
///
/// Each is paired with its opposite when a line is assembled. All of them
/// point toward a smaller row or column, which fixes the order of a
/// [`WinLine`].
pub const AXES: [Direction; 4] = [
    Direction::new(0, -1),
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
];

/// Five or more contiguous same-owner marks along one axis.
///
/// Marks are ordered from the endpoint reached along the axis direction to
/// the endpoint reached along its opposite, e.g. left to right for a
/// horizontal line and top to bottom for the others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinLine {
    player: PlayerId,
    axis: Direction,
    marks: Vec<MarkId>,
}

impl WinLine {
    #[inline]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[inline]
    pub fn axis(&self) -> Direction {
        self.axis
    }

    #[inline]
    pub fn marks(&self) -> &[MarkId] {
        &self.marks
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    #[inline]
    pub fn contains(&self, id: MarkId) -> bool {
        self.marks.contains(&id)
    }

    /// Positions of the line's marks, in line order
    pub fn positions(&self, grid: &MarkGrid) -> Vec<Pos> {
        self.marks.iter().map(|&id| grid.mark(id).pos()).collect()
    }
}

/// Follow links from `start` in `dir` until one is missing.
///
/// Returns the visited marks in walking order, excluding `start`. Always
/// terminates: row and column change monotonically along a fixed direction.
pub fn walk(grid: &MarkGrid, start: MarkId, dir: Direction) -> Vec<MarkId> {
    let mut visited = Vec::new();
    let mut current = start;
    while let Some(next) = grid.mark(current).neighbor(dir) {
        visited.push(next);
        current = next;
    }
    visited
}

/// Full run of same-owner marks through `id` along `axis`
pub fn line_through(grid: &MarkGrid, id: MarkId, axis: Direction) -> Vec<MarkId> {
    let mut line = walk(grid, id, axis);
    line.reverse();
    line.push(id);
    line.extend(walk(grid, id, axis.opposite()));
    line
}

/// Check the four axes through a just-placed mark.
///
/// Returns the first line of at least `win_length` marks, in [`AXES`] order.
pub fn find_win_line(grid: &MarkGrid, id: MarkId, win_length: usize) -> Option<WinLine> {
    let player = grid.mark(id).player();
    AXES.into_iter().find_map(|axis| {
        let marks = line_through(grid, id, axis);
        (marks.len() >= win_length).then_some(WinLine { player, axis, marks })
    })
}
