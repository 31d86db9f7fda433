use super::*;
use proptest::prelude::*;
use rustc_hash::FxHashSet;

#[test]
fn test_direction_slots_are_distinct() {
    let mut seen = [false; 8];
    for (i, dir) in Direction::ALL.iter().enumerate() {
        assert_eq!(dir.slot(), i);
        assert!(!seen[dir.slot()]);
        seen[dir.slot()] = true;
    }
}

#[test]
fn test_direction_opposite_slot() {
    for dir in Direction::ALL {
        assert_eq!(dir.opposite().slot(), 7 - dir.slot());
        assert_eq!(dir.opposite().opposite(), dir);
    }
}

#[test]
fn test_pos_step() {
    let pos = Pos::new(0, 0);
    assert_eq!(pos.step(Direction::new(-1, -1)), Some(Pos::new(-1, -1)));
    assert_eq!(pos.step(Direction::new(1, 0)), Some(Pos::new(1, 0)));
    assert_eq!(pos.step(Direction::new(0, 1)), Some(Pos::new(0, 1)));
}

#[test]
fn test_pos_step_past_i32_range() {
    assert_eq!(Pos::new(i32::MAX, 0).step(Direction::new(1, 0)), None);
    assert_eq!(Pos::new(0, i32::MIN).step(Direction::new(0, -1)), None);
    assert_eq!(
        Pos::new(i32::MAX, 0).step(Direction::new(-1, 1)),
        Some(Pos::new(i32::MAX - 1, 1))
    );
}

#[test]
fn test_place_at_i32_extremes() {
    let mut grid = MarkGrid::new();
    let top = grid.place(PlayerId(0), Pos::new(i32::MAX, i32::MAX));
    let below = grid.place(PlayerId(0), Pos::new(i32::MAX - 1, i32::MAX));
    assert_eq!(grid.mark(top).neighbor(Direction::new(-1, 0)), Some(below));
    assert_eq!(grid.mark(below).neighbor(Direction::new(1, 0)), Some(top));
    assert_eq!(grid.mark(top).link_count(), 1);

    let low = grid.place(PlayerId(1), Pos::new(i32::MIN, i32::MIN));
    assert_eq!(grid.mark(low).link_count(), 0);
    assert_eq!(grid.get_id(Pos::new(i32::MIN, i32::MIN)), Some(low));
}

#[test]
fn test_place_links_regardless_of_order() {
    // a mark placed next to an existing same-owner mark wires both sides,
    // whichever of the two came first
    let mut grid = MarkGrid::new();
    let right = grid.place(PlayerId(0), Pos::new(0, 1));
    let left = grid.place(PlayerId(0), Pos::new(0, 0));
    assert_eq!(grid.mark(left).neighbor(Direction::new(0, 1)), Some(right));
    assert_eq!(grid.mark(right).neighbor(Direction::new(0, -1)), Some(left));
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_display() {
    assert_eq!(Pos::new(10, -2).to_string(), "(10, -2)");
}

/// Random placement sequences on a small board so that neighbors are common
fn placements() -> impl Strategy<Value = Vec<(i32, i32, u8)>> {
    prop::collection::vec((0..8i32, 0..8i32, 0..2u8), 0..64)
}

fn build(moves: &[(i32, i32, u8)]) -> (MarkGrid, Vec<(Pos, MarkId)>) {
    let mut grid = MarkGrid::new();
    let mut placed = Vec::new();
    for &(row, col, player) in moves {
        let pos = Pos::new(row, col);
        if grid.is_occupied(pos) {
            continue;
        }
        let id = grid.place(PlayerId(player), pos);
        placed.push((pos, id));
    }
    (grid, placed)
}

proptest! {
    #[test]
    fn prop_one_mark_per_cell(moves in placements()) {
        let (grid, placed) = build(&moves);
        let cells: FxHashSet<Pos> = grid.iter().map(|(_, m)| m.pos()).collect();
        prop_assert_eq!(cells.len(), grid.len());
        for (pos, id) in placed {
            prop_assert_eq!(grid.get_id(pos), Some(id));
            prop_assert_eq!(grid.mark(id).pos(), pos);
        }
    }

    #[test]
    fn prop_links_are_symmetric(moves in placements()) {
        let (grid, _) = build(&moves);
        for (id, mark) in grid.iter() {
            for (dir, other) in mark.links() {
                prop_assert_eq!(grid.mark(other).neighbor(dir.opposite()), Some(id));
            }
        }
    }

    #[test]
    fn prop_links_match_adjacent_same_owner(moves in placements()) {
        let (grid, _) = build(&moves);
        for (_, mark) in grid.iter() {
            for dir in Direction::ALL {
                let expected = mark
                    .pos()
                    .step(dir)
                    .and_then(|pos| grid.get_id(pos))
                    .filter(|&id| grid.mark(id).belongs_to(mark.player()));
                prop_assert_eq!(mark.neighbor(dir), expected);
            }
        }
    }
}
