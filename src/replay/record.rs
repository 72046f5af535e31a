//! Replay records and verified reconstruction.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::{GameState, Move};
use crate::rules::{GameResult, IllegalMoveError, RulesEngine, UltimateTicTacToe};

/// Why a replay could not be built, decoded, or verified.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// A move was illegal in the position it was played from.
    #[display("move {ply} is illegal: {source}")]
    IllegalMove { ply: usize, source: IllegalMoveError },

    /// All moves were legal but the game is not over.
    #[display("game is not finished after {steps} moves")]
    Unfinished { steps: usize },

    /// `steps` disagrees with the number of recorded moves.
    #[display("replay claims {steps} steps but holds {moves} moves")]
    StepCountMismatch { steps: usize, moves: usize },

    /// The recorded result is not what the moves produce.
    #[display("recorded result {recorded} but moves produce {actual}")]
    ResultMismatch {
        recorded: GameResult,
        actual: GameResult,
    },

    /// Binary encoding or decoding failed.
    #[display("replay encoding failed: {_0}")]
    Encoding(String),
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::IllegalMove { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A complete game: its moves and final result.
///
/// JSON form: `{"moves": [[4, 4], [4, 0], ...], "result": "X", "steps": 2}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    /// Moves in play order, starting with `X`.
    pub moves: Vec<Move>,

    /// Final result.
    pub result: GameResult,

    /// Number of moves.
    pub steps: usize,
}

impl Replay {
    /// Build a replay by playing `moves` from the initial state.
    ///
    /// Fails if any move is illegal or the game is not over at the end.
    pub fn from_moves(moves: Vec<Move>) -> Result<Self, ReplayError> {
        let rules = UltimateTicTacToe::new();
        let state = play_through(&rules, &moves, |_| {})?;
        let result = rules
            .outcome(&state)
            .ok_or(ReplayError::Unfinished { steps: moves.len() })?;

        Ok(Self {
            steps: moves.len(),
            result,
            moves,
        })
    }

    /// Replay the moves and return the final state.
    ///
    /// Verifies that every move is legal, the final state is terminal,
    /// `steps` matches, and the recorded result is the actual one.
    pub fn reconstruct(&self) -> Result<GameState, ReplayError> {
        self.verified(|_| {})
    }

    /// Every state of the game, from the initial state to the final one.
    pub fn states(&self) -> Result<Vec<GameState>, ReplayError> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(GameState::initial());
        self.verified(|s| states.push(*s))?;
        Ok(states)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ReplayError> {
        bincode::serialize(self).map_err(|e| ReplayError::Encoding(e.to_string()))
    }

    /// Decode from bincode. The decoded replay is not verified.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ReplayError> {
        bincode::deserialize(bytes).map_err(|e| ReplayError::Encoding(e.to_string()))
    }

    fn verified(&self, on_state: impl FnMut(&GameState)) -> Result<GameState, ReplayError> {
        let outcome = self.check(on_state);
        if let Err(err) = &outcome {
            warn!(error = %err, steps = self.steps, "replay verification failed");
        }
        outcome
    }

    fn check(&self, on_state: impl FnMut(&GameState)) -> Result<GameState, ReplayError> {
        if self.steps != self.moves.len() {
            return Err(ReplayError::StepCountMismatch {
                steps: self.steps,
                moves: self.moves.len(),
            });
        }

        let rules = UltimateTicTacToe::new();
        let state = play_through(&rules, &self.moves, on_state)?;
        let actual = rules
            .outcome(&state)
            .ok_or(ReplayError::Unfinished { steps: self.steps })?;

        if actual != self.result {
            return Err(ReplayError::ResultMismatch {
                recorded: self.result,
                actual,
            });
        }
        Ok(state)
    }
}

/// Apply `moves` from the initial state, reporting each successor state.
fn play_through(
    rules: &UltimateTicTacToe,
    moves: &[Move],
    mut on_state: impl FnMut(&GameState),
) -> Result<GameState, ReplayError> {
    let mut state = rules.initial();
    for (ply, &mv) in moves.iter().enumerate() {
        state = rules
            .try_apply_move(&state, mv)
            .map_err(|source| ReplayError::IllegalMove { ply, source })?;
        on_state(&state);
    }
    Ok(state)
}
