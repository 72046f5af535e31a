//! Ultimate Tic-Tac-Toe rules.
//!
//! A move into cell `c` of any sub-board sends the opponent to sub-board
//! `c`. If that sub-board is captured or full, the opponent may play in any
//! uncaptured sub-board instead. Three captures in a line end the game.

use tracing::trace;

use super::engine::{GameResult, MoveList, RulesEngine};
use super::error::IllegalMoveError;
use super::lines::line_winner;
use crate::core::{GameState, Move, Target, BOARD_SIZE};

/// The Ultimate Tic-Tac-Toe rules engine. Stateless.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UltimateTicTacToe;

impl UltimateTicTacToe {
    /// Create the engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Check `mv` against the rules without applying it.
    pub fn validate(&self, state: &GameState, mv: Move) -> Result<(), IllegalMoveError> {
        let (board, cell) = (mv.board(), mv.cell());
        match state.target {
            Target::Finished => return Err(IllegalMoveError::GameFinished),
            Target::Board(required) if required != board => {
                return Err(IllegalMoveError::WrongBoard { required, got: mv });
            }
            _ => {}
        }
        if state.captures[board].is_some() {
            return Err(IllegalMoveError::BoardCaptured { board });
        }
        if state.boards[board][cell].is_some() {
            return Err(IllegalMoveError::CellOccupied { board, cell });
        }
        Ok(())
    }

    /// Whether any legal move exists, without collecting them.
    fn has_legal_move(state: &GameState) -> bool {
        match state.target {
            Target::Finished => false,
            Target::Board(k) => state.is_board_open(k),
            Target::Any => (0..BOARD_SIZE).any(|b| state.is_board_open(b)),
        }
    }

    fn push_empty_cells(state: &GameState, board: usize, out: &mut MoveList) {
        for (cell, contents) in state.boards[board].iter().enumerate() {
            if contents.is_none() {
                out.push(Move::new(board as u8, cell as u8));
            }
        }
    }
}

impl RulesEngine for UltimateTicTacToe {
    fn initial(&self) -> GameState {
        GameState::initial()
    }

    fn legal_moves(&self, state: &GameState) -> MoveList {
        let mut moves = MoveList::new();
        match state.target {
            Target::Finished => {}
            Target::Board(k) => Self::push_empty_cells(state, k, &mut moves),
            Target::Any => {
                // Drawn sub-boards stay eligible and simply contribute nothing.
                for board in 0..BOARD_SIZE {
                    if state.captures[board].is_none() {
                        Self::push_empty_cells(state, board, &mut moves);
                    }
                }
            }
        }
        moves
    }

    fn apply_move(&self, state: &GameState, mv: Move) -> GameState {
        debug_assert!(
            self.validate(state, mv).is_ok(),
            "illegal move {} applied",
            mv
        );

        let player = state.turn;
        let (board, cell) = (mv.board(), mv.cell());
        let mut next = *state;

        next.boards[board][cell] = Some(player);
        if next.captures[board].is_none() && line_winner(&next.boards[board]).is_some() {
            next.captures[board] = Some(player);
            trace!(board, %player, "sub-board captured");
        }

        next.turn = player.opponent();

        if line_winner(&next.captures).is_some() {
            next.target = Target::Finished;
            trace!(%player, "capture line completed, game over");
            return next;
        }

        next.target = if next.is_board_open(cell) {
            Target::Board(cell)
        } else {
            Target::Any
        };
        next
    }

    fn try_apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, IllegalMoveError> {
        self.validate(state, mv)?;
        Ok(self.apply_move(state, mv))
    }

    fn outcome(&self, state: &GameState) -> Option<GameResult> {
        if !self.is_terminal(state) {
            return None;
        }
        Some(line_winner(&state.captures).map_or(GameResult::Draw, GameResult::Winner))
    }

    fn is_terminal(&self, state: &GameState) -> bool {
        state.target.is_finished() || !Self::has_legal_move(state)
    }
}
