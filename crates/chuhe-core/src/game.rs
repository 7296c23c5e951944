use log::debug;

use crate::board::{Board, BoardError};
use crate::config::BoardConfig;
use crate::executor::{attempt_move, check_move, MoveError, MoveOutcome};
use crate::movegen::{generate_move_set, MoveSet};
use crate::selection::SelectionState;
use crate::setup::{staged_order, standard_placements, Placement};
use crate::types::{Coord, Piece, PieceId, PieceKind, Side};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing selected, so a cell click has no effect.
    Ignored,
    Moved(MoveOutcome),
    /// The move was refused; the selection is kept so another target can
    /// be picked.
    Rejected(MoveError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagedPlacement {
    pub placement: Placement,
    pub delay_ms: u32,
}

/// A board plus the single-selection interaction state.
///
/// Neither side is forced to wait for the other, and check is not
/// detected: any piece may be moved at any time.
#[derive(Debug, Clone)]
pub struct Xiangqi {
    board: Board,
    selection: SelectionState,
    config: BoardConfig,
}

impl Default for Xiangqi {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Xiangqi {
    pub fn new(config: BoardConfig) -> Self {
        let board = if config.populate {
            Board::standard()
        } else {
            Board::empty()
        };
        Self {
            board,
            selection: SelectionState::Idle,
            config,
        }
    }

    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            selection: SelectionState::Idle,
            config: BoardConfig {
                populate: false,
                ..BoardConfig::default()
            },
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.board.piece(id)
    }

    pub fn add_piece(
        &mut self,
        kind: PieceKind,
        side: Side,
        at: Coord,
    ) -> Result<PieceId, BoardError> {
        self.board.add_piece(kind, side, at)
    }

    /// Opening placements in entrance order, each with its animation delay.
    pub fn setup_plan(&self) -> Vec<StagedPlacement> {
        let mut placements = standard_placements();
        staged_order(&mut placements);
        placements
            .into_iter()
            .enumerate()
            .map(|(index, placement)| StagedPlacement {
                placement,
                delay_ms: self.config.setup_delay_ms(index),
            })
            .collect()
    }

    pub fn move_set(&self, id: PieceId) -> MoveSet {
        generate_move_set(&self.board, id)
    }

    /// Structural move; reachability is the caller's concern.
    pub fn attempt_move(&mut self, id: PieceId, target: Coord) -> Result<MoveOutcome, MoveError> {
        let outcome = attempt_move(&mut self.board, id, target)?;
        self.drop_stale_selection();
        Ok(outcome)
    }

    /// Like [`Xiangqi::attempt_move`] but refuses targets outside the
    /// piece's move set.
    pub fn play(&mut self, id: PieceId, target: Coord) -> Result<MoveOutcome, MoveError> {
        check_move(&self.board, id, target)?;
        if !self.move_set(id).can_reach(target) {
            return Err(MoveError::Unreachable {
                x: target.x,
                y: target.y,
            });
        }
        self.attempt_move(id, target)
    }

    pub fn remove(&mut self, at: Coord) -> bool {
        let removed = self.board.remove(at);
        self.drop_stale_selection();
        removed
    }

    /// Unknown or captured pieces leave the selection unchanged.
    pub fn click_piece(&mut self, id: PieceId) -> SelectionState {
        if self.board.contains(id) {
            self.selection = self.selection.toggle(id);
            debug!("selection -> {:?}", self.selection);
        }
        self.selection
    }

    pub fn click_cell(&mut self, at: Coord) -> ClickOutcome {
        let Some(id) = self.selection.selected() else {
            return ClickOutcome::Ignored;
        };
        match self.play(id, at) {
            Ok(outcome) => {
                self.selection = SelectionState::Idle;
                ClickOutcome::Moved(outcome)
            }
            Err(err) => {
                debug!("move of {} to {} refused: {}", id, at, err);
                ClickOutcome::Rejected(err)
            }
        }
    }

    fn drop_stale_selection(&mut self) {
        if let Some(id) = self.selection.selected() {
            if !self.board.contains(id) {
                self.selection = SelectionState::Idle;
            }
        }
    }
}
