//! Theme constants for the GUI

use egui::Color32;

use crate::PlayerId;

// Grid colors
pub const GRID_BG: Color32 = Color32::from_rgb(236, 232, 222);
pub const GRID_LINE: Color32 = Color32::from_rgb(170, 160, 145);
pub const WIN_CELL_BG: Color32 = Color32::from_rgb(170, 235, 170);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// One color per seat, wraps around for larger rosters
pub const PLAYER_COLORS: [Color32; 4] = [
    Color32::from_rgb(40, 90, 200),
    Color32::from_rgb(210, 60, 60),
    Color32::from_rgb(40, 160, 90),
    Color32::from_rgb(200, 140, 30),
];

pub fn player_color(player: PlayerId) -> Color32 {
    PLAYER_COLORS[player.index() % PLAYER_COLORS.len()]
}

pub fn hover_valid(player: PlayerId) -> Color32 {
    player_color(player).gamma_multiply(0.35)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const WIN_CARD_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const MARK_RADIUS_RATIO: f32 = 0.36;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 2.5;
