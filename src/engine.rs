//! Match orchestration
//!
//! [`MatchEngine`] owns the whole state of one match: the grid of marks, the
//! turn rotation and whether the match has ended. Each call to
//! [`MatchEngine::place_mark`] runs to completion:
//!
//! 1. **Validate**: match still running, cell inside the grid, cell empty
//! 2. **Place**: take the active player from the turn queue, create the
//!    mark, wire its neighbor links and register it
//! 3. **Check**: walk the four axes through the new mark
//! 4. **End**: on a winning line, flag its marks and notify observers
//!
//! A rejected placement changes nothing, not even the turn order.
//!
//! # Example
//!
//! ```
//! use gomoku::{MatchEngine, Placement};
//!
//! let mut engine = MatchEngine::default();
//! for col in 0..4 {
//!     engine.place_mark(10, col).unwrap(); // first player
//!     engine.place_mark(20, col).unwrap(); // second player
//! }
//! match engine.place_mark(10, 4).unwrap() {
//!     Placement::MatchEnded(line) => assert_eq!(line.len(), 5),
//!     Placement::Accepted(_) => unreachable!(),
//! }
//! ```

use tracing::{debug, info, instrument};

use crate::board::{Mark, MarkGrid, MarkId, PlayerId, Pos};
use crate::config::MatchConfig;
use crate::error::{ConfigError, PlacementError};
use crate::rules::{find_win_line, WinLine};
use crate::turn::TurnQueue;

/// Match lifecycle. Moves only from `InProgress` to `Ended`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchState {
    #[default]
    InProgress,
    Ended,
}

/// Outcome of an accepted placement
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Mark placed, match continues
    Accepted(MarkId),
    /// Mark placed and completed a winning line
    MatchEnded(WinLine),
}

/// Receives match events, e.g. to render them.
///
/// All methods default to doing nothing.
pub trait MatchObserver {
    /// A mark was placed and wired into the grid
    fn on_mark_placed(&mut self, _mark: &Mark) {}

    /// Fired once per mark of the winning line, in line order
    fn on_winning_mark(&mut self, _mark: &Mark) {}

    /// Fired once, after every `on_winning_mark`
    fn on_match_end(&mut self, _line: &WinLine) {}
}

/// State of a single match
pub struct MatchEngine {
    config: MatchConfig,
    grid: MarkGrid,
    turns: TurnQueue<PlayerId>,
    state: MatchState,
    win_line: Option<WinLine>,
    observers: Vec<Box<dyn MatchObserver>>,
}

impl MatchEngine {
    /// Start a match with a validated configuration
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: MatchConfig) -> Self {
        let turns = Self::turn_queue(&config);
        Self {
            config,
            grid: MarkGrid::new(),
            turns,
            state: MatchState::InProgress,
            win_line: None,
            observers: Vec::new(),
        }
    }

    fn turn_queue(config: &MatchConfig) -> TurnQueue<PlayerId> {
        let seats = (0..config.players.names.len()).map(|i| PlayerId(i as u8));
        TurnQueue::new(seats.collect())
    }

    /// Register an observer for the rest of this engine's life
    pub fn subscribe(&mut self, observer: Box<dyn MatchObserver>) {
        self.observers.push(observer);
    }

    /// Place a mark for the active player at (`row`, `col`)
    #[instrument(level = "debug", skip(self))]
    pub fn place_mark(&mut self, row: i32, col: i32) -> Result<Placement, PlacementError> {
        let pos = Pos::new(row, col);
        self.validate(pos)?;

        let player = self.turns.next_player();
        let id = self.grid.place(player, pos);
        let mark = self.grid.mark(id);
        debug!(
            player = self.player_name(player).unwrap_or_default(),
            %pos,
            links = ?mark.links().map(|(dir, _)| (dir.dr, dir.dc)).collect::<Vec<_>>(),
            "mark placed"
        );
        for observer in self.observers.iter_mut() {
            observer.on_mark_placed(mark);
        }

        match find_win_line(&self.grid, id, self.config.grid.win_length) {
            Some(line) => {
                self.win(&line);
                Ok(Placement::MatchEnded(line))
            }
            None => Ok(Placement::Accepted(id)),
        }
    }

    fn validate(&self, pos: Pos) -> Result<(), PlacementError> {
        if self.state == MatchState::Ended {
            return Err(PlacementError::MatchAlreadyEnded);
        }
        if !self.config.grid.contains(pos) {
            return Err(PlacementError::CoordinateOutOfBounds {
                pos,
                rows: self.config.grid.rows,
                cols: self.config.grid.cols,
            });
        }
        if self.grid.is_occupied(pos) {
            return Err(PlacementError::CellOccupied(pos));
        }
        Ok(())
    }

    fn win(&mut self, line: &WinLine) {
        self.state = MatchState::Ended;
        info!(
            winner = self.player_name(line.player()).unwrap_or_default(),
            length = line.len(),
            axis = ?(line.axis().dr, line.axis().dc),
            "match ended"
        );

        for &id in line.marks() {
            self.grid.mark_mut(id).become_winner();
            let mark = self.grid.mark(id);
            for observer in self.observers.iter_mut() {
                observer.on_winning_mark(mark);
            }
        }
        for observer in self.observers.iter_mut() {
            observer.on_match_end(line);
        }
        self.win_line = Some(line.clone());
    }

    /// Discard the grid and start over with the same config and observers
    pub fn reset(&mut self) {
        self.grid = MarkGrid::new();
        self.turns = Self::turn_queue(&self.config);
        self.state = MatchState::InProgress;
        self.win_line = None;
        info!("new match");
    }

    #[inline]
    pub fn state(&self) -> MatchState {
        self.state
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state == MatchState::Ended
    }

    #[inline]
    pub fn grid(&self) -> &MarkGrid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Line that ended the match
    #[inline]
    pub fn win_line(&self) -> Option<&WinLine> {
        self.win_line.as_ref()
    }

    #[inline]
    pub fn winner(&self) -> Option<PlayerId> {
        self.win_line.as_ref().map(WinLine::player)
    }

    /// Player who places the next mark
    #[inline]
    pub fn current_player(&self) -> PlayerId {
        *self.turns.peek()
    }

    /// Configured name of `player`, `None` for a seat outside the roster
    pub fn player_name(&self, player: PlayerId) -> Option<&str> {
        self.config.players.names.get(player.index()).map(String::as_str)
    }

    #[inline]
    pub fn move_count(&self) -> usize {
        self.grid.len()
    }

    /// Placed marks in placement order
    pub fn history(&self) -> impl Iterator<Item = &Mark> {
        self.grid.iter().map(|(_, mark)| mark)
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::from_valid_config(MatchConfig::default())
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("moves", &self.grid.len())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}
