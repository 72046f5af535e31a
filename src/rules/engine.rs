//! Rules engine trait and game results.
//!
//! Consumers (playouts, replay verification, bindings, encoders) drive a
//! game through three narrow entry points:
//! - `legal_moves`: enumerate what the side to move may play
//! - `apply_move`: produce the successor state
//! - `outcome` / `is_terminal` / `result`: read the end of the game

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{IllegalMoveError, UndefinedResultError};
use crate::core::{GameState, Move, Player, MOVE_COUNT};

/// Legal moves of one position. Never spills to the heap.
pub type MoveList = SmallVec<[Move; MOVE_COUNT]>;

/// Result of a completed game.
///
/// Serializes as the replay tag `"X"`, `"O"`, or `"draw"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum GameResult {
    /// One player completed a line of captures.
    Winner(Player),
    /// No line of captures and no moves left.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(*p),
            GameResult::Draw => None,
        }
    }

    /// Terminal value for `player`: +1 win, -1 loss, 0 draw.
    #[must_use]
    pub fn value_for(&self, player: Player) -> f64 {
        match self {
            GameResult::Winner(p) if *p == player => 1.0,
            GameResult::Winner(_) => -1.0,
            GameResult::Draw => 0.0,
        }
    }

    /// Replay tag.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            GameResult::Winner(Player::X) => "X",
            GameResult::Winner(Player::O) => "O",
            GameResult::Draw => "draw",
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A replay tag other than `"X"`, `"O"`, or `"draw"`.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
#[display("unknown result tag {_0:?}")]
pub struct UnknownResultTag(pub String);

impl std::error::Error for UnknownResultTag {}

impl std::str::FromStr for GameResult {
    type Err = UnknownResultTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "X" => Ok(GameResult::Winner(Player::X)),
            "O" => Ok(GameResult::Winner(Player::O)),
            "draw" => Ok(GameResult::Draw),
            other => Err(UnknownResultTag(other.to_string())),
        }
    }
}

impl TryFrom<String> for GameResult {
    type Error = UnknownResultTag;

    fn try_from(tag: String) -> Result<Self, Self::Error> {
        tag.parse()
    }
}

impl From<GameResult> for String {
    fn from(result: GameResult) -> Self {
        result.tag().to_string()
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: ordered by sub-board, then cell; empty when terminal
/// - `apply_move`: pure; the input state is left untouched
/// - `try_apply_move`: same as `apply_move`, but validates first
/// - `outcome`: `None` while the game continues
pub trait RulesEngine {
    /// Starting position.
    fn initial(&self) -> GameState;

    /// All legal moves, in ascending flat-index order.
    fn legal_moves(&self, state: &GameState) -> MoveList;

    /// Successor state after `mv`.
    ///
    /// `mv` must be legal in `state`. Debug builds assert this; release
    /// builds produce an unspecified state for illegal input.
    fn apply_move(&self, state: &GameState, mv: Move) -> GameState;

    /// Successor state after `mv`, rejecting illegal moves.
    fn try_apply_move(&self, state: &GameState, mv: Move) -> Result<GameState, IllegalMoveError>;

    /// Final result, or `None` if the game continues.
    fn outcome(&self, state: &GameState) -> Option<GameResult>;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> bool {
        self.outcome(state).is_some()
    }

    /// Final result of a terminal state.
    fn result(&self, state: &GameState) -> Result<GameResult, UndefinedResultError> {
        self.outcome(state).ok_or(UndefinedResultError)
    }

    /// Check if `mv` is legal in `state`.
    fn is_legal(&self, state: &GameState, mv: Move) -> bool {
        self.legal_moves(state).contains(&mv)
    }
}
