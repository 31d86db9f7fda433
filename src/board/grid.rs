//! Sparse grid of placed marks

use rustc_hash::FxHashMap;

use super::mark::{Mark, MarkId};
use super::{PlayerId, Pos};

/// Sparse two-level mapping row -> (col -> mark).
///
/// The grid also owns every mark (an append-only arena), so neighbor links
/// and win lines refer to marks by [`MarkId`]. It performs no bounds
/// checking: any coordinate that was never written is simply absent.
#[derive(Debug, Clone, Default)]
pub struct MarkGrid {
    marks: Vec<Mark>,
    cells: FxHashMap<i32, FxHashMap<i32, MarkId>>,
}

impl MarkGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `mark` at its own position and return its id.
    ///
    /// Every neighbor the mark linked to during [`Mark::new`] receives the
    /// reverse link here, so both sides are wired by the time this returns.
    /// The cell must be empty; the engine checks occupancy beforehand.
    pub(crate) fn put(&mut self, mark: Mark) -> MarkId {
        let pos = mark.pos();
        debug_assert!(self.get_id(pos).is_none(), "cell {pos} already occupied");

        let id = MarkId(self.marks.len() as u32);
        for (dir, neighbor) in mark.links() {
            self.marks[neighbor.index()].link(dir.opposite(), id);
        }
        self.marks.push(mark);
        self.cells.entry(pos.row).or_default().insert(pos.col, id);
        id
    }

    /// Create, wire and register a mark in one step.
    ///
    /// This is the only way to add a mark from outside the crate, so a mark
    /// is always wired against the grid it ends up in.
    pub fn place(&mut self, player: PlayerId, pos: Pos) -> MarkId {
        let mark = Mark::new(player, pos, self);
        self.put(mark)
    }

    /// Mark at `pos`, if any
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<&Mark> {
        self.get_id(pos).map(|id| self.mark(id))
    }

    /// Id of the mark at `pos`, if any
    #[inline]
    pub fn get_id(&self, pos: Pos) -> Option<MarkId> {
        self.cells.get(&pos.row)?.get(&pos.col).copied()
    }

    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.get_id(pos).is_some()
    }

    /// Mark by id. Ids are only issued by this grid, so lookup cannot miss.
    #[inline]
    pub fn mark(&self, id: MarkId) -> &Mark {
        &self.marks[id.index()]
    }

    #[inline]
    pub(crate) fn mark_mut(&mut self, id: MarkId) -> &mut Mark {
        &mut self.marks[id.index()]
    }

    /// Marks in placement order
    pub fn iter(&self) -> impl Iterator<Item = (MarkId, &Mark)> {
        self.marks
            .iter()
            .enumerate()
            .map(|(i, mark)| (MarkId(i as u32), mark))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Direction;

    const P1: PlayerId = PlayerId(0);
    const P2: PlayerId = PlayerId(1);

    #[test]
    fn test_get_after_put() {
        let mut grid = MarkGrid::new();
        let id = grid.place(P1, Pos::new(4, 7));
        assert_eq!(grid.get_id(Pos::new(4, 7)), Some(id));
        assert_eq!(grid.get(Pos::new(4, 7)).map(Mark::player), Some(P1));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_unwritten_cells_are_absent() {
        let mut grid = MarkGrid::new();
        grid.place(P1, Pos::new(0, 0));
        assert!(grid.get(Pos::new(0, 1)).is_none());
        assert!(grid.get(Pos::new(1, 0)).is_none());
        assert!(grid.get(Pos::new(-1, -1)).is_none());
        assert!(grid.get(Pos::new(i32::MAX, i32::MIN)).is_none());
    }

    #[test]
    fn test_put_wires_reverse_links() {
        let mut grid = MarkGrid::new();
        let a = grid.place(P1, Pos::new(2, 2));
        let b = grid.place(P1, Pos::new(3, 3));
        assert_eq!(grid.mark(a).neighbor(Direction::new(1, 1)), Some(b));
        assert_eq!(grid.mark(b).neighbor(Direction::new(-1, -1)), Some(a));
    }

    #[test]
    fn test_foreign_neighbor_not_linked() {
        let mut grid = MarkGrid::new();
        let a = grid.place(P1, Pos::new(2, 2));
        let b = grid.place(P2, Pos::new(2, 3));
        assert_eq!(grid.mark(a).link_count(), 0);
        assert_eq!(grid.mark(b).link_count(), 0);
    }

    #[test]
    fn test_iter_in_placement_order() {
        let mut grid = MarkGrid::new();
        grid.place(P1, Pos::new(9, 9));
        grid.place(P2, Pos::new(0, 0));
        let positions: Vec<_> = grid.iter().map(|(_, m)| m.pos()).collect();
        assert_eq!(positions, vec![Pos::new(9, 9), Pos::new(0, 0)]);
    }
}
