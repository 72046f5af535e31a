//! Rule violations reported by validating entry points.

use crate::core::Move;

/// A move that is not in the legal-move set of the state it was applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMoveError {
    /// The game has already ended.
    #[display("game is already finished")]
    GameFinished,

    /// The move is outside the sub-board the mover was sent to.
    #[display("move {got} must be played in sub-board {required}")]
    WrongBoard { required: usize, got: Move },

    /// The sub-board has already been captured.
    #[display("sub-board {board} is already captured")]
    BoardCaptured { board: usize },

    /// The cell is already marked.
    #[display("cell {cell} of sub-board {board} is already occupied")]
    CellOccupied { board: usize, cell: usize },
}

impl std::error::Error for IllegalMoveError {}

/// `result()` was asked for a state that is not terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
#[display("result requested for a non-terminal state")]
pub struct UndefinedResultError;

impl std::error::Error for UndefinedResultError {}
