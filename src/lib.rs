//! Five-in-a-row match engine with incremental win detection
//!
//! Two (or more) players take turns placing marks on an N×M grid. The first
//! player to get five marks in a row horizontally, vertically or diagonally
//! wins.
//!
//! Win detection never rescans the grid. Every mark keeps links to the
//! same-owner marks in its 8 surrounding cells, wired in both directions when
//! it is placed; a win check walks those links outward from the new mark
//! along the four axes.
//!
//! # Architecture
//!
//! - [`board`]: positions, marks with neighbor links, the sparse grid
//! - [`rules`]: walking links and finding a winning line
//! - [`turn`]: cyclic turn rotation
//! - [`engine`]: the match itself, validation and notifications
//! - [`config`]: grid size and player names, loadable from TOML
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{MatchEngine, MatchState, Placement, PlacementError, Pos};
//!
//! let mut engine = MatchEngine::default(); // 30x30, "gamer1" vs "gamer2"
//!
//! assert!(matches!(engine.place_mark(10, 10), Ok(Placement::Accepted(_))));
//! assert_eq!(engine.place_mark(10, 10), Err(PlacementError::CellOccupied(Pos::new(10, 10))));
//! assert_eq!(engine.state(), MatchState::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod turn;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Direction, Mark, MarkGrid, MarkId, PlayerId, Pos};
pub use config::{GridConfig, MatchConfig, PlayersConfig};
pub use engine::{MatchEngine, MatchObserver, MatchState, Placement};
pub use error::{ConfigError, PlacementError};
pub use rules::{WinLine, WIN_LENGTH};
pub use turn::{Counter, TurnQueue};
