//! Grid rendering and click-to-cell translation

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{PlayerId, Pos};

use super::game_state::GameState;
use super::theme::*;

/// Board view handles rendering and input for the grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Grid drawing area
    board_rect: Rect,
    rows: i32,
    cols: i32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            board_rect: Rect::NOTHING,
            rows: 0,
            cols: 0,
        }
    }
}

impl BoardView {
    /// Render the grid and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState) -> Option<Pos> {
        let grid = &state.engine.config().grid;
        self.rows = grid.rows;
        self.cols = grid.cols;

        // Square cells sized to fit the available space
        let available = ui.available_size() - Vec2::splat(2.0 * BOARD_MARGIN);
        self.cell_size = (available.x / self.cols as f32)
            .min(available.y / self.rows as f32)
            .max(4.0);
        let size = Vec2::new(self.cols as f32, self.rows as f32) * self.cell_size;

        let (response, painter) = ui.allocate_painter(size, Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(2), GRID_BG);
        self.draw_winning_cells(&painter, state);
        self.draw_grid(&painter);
        self.draw_marks(&painter, state);

        if let Some(pos) = state.last_move {
            let center = self.cell_center(pos);
            painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, GRID_BG);
        }

        if state.engine.is_over() {
            return None;
        }

        let pointer = response.hover_pos()?;
        let pos = self.screen_to_cell(pointer)?;
        if state.engine.grid().is_occupied(pos) {
            return None;
        }

        let radius = self.cell_size * MARK_RADIUS_RATIO;
        painter.circle_filled(
            self.cell_center(pos),
            radius,
            hover_valid(state.current_player()),
        );

        response.clicked().then_some(pos)
    }

    /// Draw the cell borders, like an HTML table
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.board_rect.min;
        let max = self.board_rect.max;

        for row in 0..=self.rows {
            let y = min.y + row as f32 * self.cell_size;
            painter.line_segment([Pos2::new(min.x, y), Pos2::new(max.x, y)], stroke);
        }
        for col in 0..=self.cols {
            let x = min.x + col as f32 * self.cell_size;
            painter.line_segment([Pos2::new(x, min.y), Pos2::new(x, max.y)], stroke);
        }
    }

    fn draw_winning_cells(&self, painter: &Painter, state: &GameState) {
        for mark in state.engine.history() {
            if state.is_winning_cell(mark.pos()) {
                painter.rect_filled(self.cell_rect(mark.pos()), CornerRadius::ZERO, WIN_CELL_BG);
            }
        }
    }

    fn draw_marks(&self, painter: &Painter, state: &GameState) {
        for mark in state.engine.history() {
            self.draw_mark(painter, mark.pos(), mark.player());
            if state.is_winning_cell(mark.pos()) {
                let radius = self.cell_size * MARK_RADIUS_RATIO + 2.0;
                painter.circle_stroke(self.cell_center(mark.pos()), radius, Stroke::new(2.0, WIN_HIGHLIGHT));
            }
        }
    }

    fn draw_mark(&self, painter: &Painter, pos: Pos, player: PlayerId) {
        let center = self.cell_center(pos);
        let radius = self.cell_size * MARK_RADIUS_RATIO;
        painter.circle_filled(center, radius, player_color(player));
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to a grid cell
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if (0..self.cols).contains(&col) && (0..self.rows).contains(&row) {
            Some(Pos::new(row, col))
        } else {
            None
        }
    }
}
