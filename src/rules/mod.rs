//! Game rules
//!
//! A match is won by the first player to get a contiguous run of
//! [`WIN_LENGTH`] or more marks along any axis. Longer runs also win.

pub mod win;

// Re-exports for convenient access
pub use win::{find_win_line, line_through, walk, WinLine, AXES, WIN_LENGTH};
