//! A single placed mark and its links to same-owner neighbors

use super::{Direction, MarkGrid, PlayerId, Pos};

/// Index of a mark inside the grid's arena.
///
/// Marks are never removed during a match, so an id stays valid for as long
/// as the grid that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub(crate) u32);

impl MarkId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One placed mark.
///
/// Holds a link for each of the 8 surrounding cells that is occupied by a
/// mark of the same player. Links are filled in both directions when the
/// later of the two marks is placed, see [`MarkGrid::place`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    player: PlayerId,
    pos: Pos,
    neighbors: [Option<MarkId>; 8],
    winning: bool,
}

impl Mark {
    /// Create a mark for `player` at `pos`, discovering its same-owner
    /// neighbors among the marks already in `grid`.
    ///
    /// Only the outgoing links are set here. The reverse links are written
    /// when the mark is registered with [`MarkGrid::put`].
    pub(crate) fn new(player: PlayerId, pos: Pos, grid: &MarkGrid) -> Self {
        let mut mark = Self {
            player,
            pos,
            neighbors: [None; 8],
            winning: false,
        };
        for dir in Direction::ALL {
            mark.consider_neighbor(dir, grid);
        }
        mark
    }

    fn consider_neighbor(&mut self, dir: Direction, grid: &MarkGrid) {
        let Some(id) = self.pos.step(dir).and_then(|pos| grid.get_id(pos)) else {
            return;
        };
        if grid.mark(id).belongs_to(self.player) {
            self.link(dir, id);
        }
    }

    #[inline]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub fn belongs_to(&self, player: PlayerId) -> bool {
        self.player == player
    }

    /// Same-owner mark adjacent in `dir`, if any
    #[inline]
    pub fn neighbor(&self, dir: Direction) -> Option<MarkId> {
        self.neighbors[dir.slot()]
    }

    /// All current links as (direction, neighbor) pairs
    pub fn links(&self) -> impl Iterator<Item = (Direction, MarkId)> + '_ {
        Direction::ALL
            .into_iter()
            .zip(self.neighbors.iter())
            .filter_map(|(dir, link)| link.map(|id| (dir, id)))
    }

    #[inline]
    pub fn link_count(&self) -> usize {
        self.neighbors.iter().flatten().count()
    }

    /// Whether this mark is part of the line that ended the match
    #[inline]
    pub fn is_winning(&self) -> bool {
        self.winning
    }

    #[inline]
    pub(crate) fn link(&mut self, dir: Direction, id: MarkId) {
        self.neighbors[dir.slot()] = Some(id);
    }

    /// Flag as winning. Returns false if it already was.
    #[inline]
    pub(crate) fn become_winner(&mut self) -> bool {
        !std::mem::replace(&mut self.winning, true)
    }
}
