//! Match session state for the GUI

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::{Mark, MatchConfig, MatchEngine, MatchObserver, Placement, PlayerId, Pos, WinLine};

/// Cells to highlight, filled in by the engine's win notifications
#[derive(Debug, Default)]
pub struct Highlights {
    pub cells: FxHashSet<Pos>,
    pub banner: Option<String>,
}

/// Observer that collects winning cells for rendering
struct WinnerCells {
    shared: Rc<RefCell<Highlights>>,
    names: Vec<String>,
}

impl MatchObserver for WinnerCells {
    fn on_winning_mark(&mut self, mark: &Mark) {
        self.shared.borrow_mut().cells.insert(mark.pos());
    }

    fn on_match_end(&mut self, line: &WinLine) {
        let name = &self.names[line.player().index()];
        self.shared.borrow_mut().banner = Some(format!("{name} wins with {} in a row", line.len()));
    }
}

/// One match as seen by the front end
pub struct GameState {
    pub engine: MatchEngine,
    pub last_move: Option<Pos>,
    pub message: Option<String>,
    highlights: Rc<RefCell<Highlights>>,
}

impl GameState {
    pub fn new(config: MatchConfig) -> Result<Self, crate::ConfigError> {
        let names = config.players.names.clone();
        let mut engine = MatchEngine::new(config)?;
        let highlights = Rc::new(RefCell::new(Highlights::default()));
        engine.subscribe(Box::new(WinnerCells {
            shared: highlights.clone(),
            names,
        }));
        Ok(Self {
            engine,
            last_move: None,
            message: None,
            highlights,
        })
    }

    pub fn reset(&mut self) {
        self.engine.reset();
        *self.highlights.borrow_mut() = Highlights::default();
        self.last_move = None;
        self.message = None;
    }

    /// Forward a clicked cell to the engine, keeping the rejection message
    pub fn try_place(&mut self, pos: Pos) {
        match self.engine.place_mark(pos.row, pos.col) {
            Ok(Placement::Accepted(_)) | Ok(Placement::MatchEnded(_)) => {
                self.last_move = Some(pos);
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn is_winning_cell(&self, pos: Pos) -> bool {
        self.highlights.borrow().cells.contains(&pos)
    }

    pub fn banner(&self) -> Option<String> {
        self.highlights.borrow().banner.clone()
    }

    pub fn current_player(&self) -> PlayerId {
        self.engine.current_player()
    }

    pub fn current_name(&self) -> &str {
        self.engine
            .player_name(self.engine.current_player())
            .unwrap_or_default()
    }
}
