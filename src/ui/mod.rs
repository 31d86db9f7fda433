//! GUI front end
//!
//! Draws the grid with egui/eframe, turns clicks into (row, col) and shows
//! the winning line as reported by the engine's notifications.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::MatchApp;
pub use game_state::{GameState, Highlights};
