//! # ultimate-ttt
//!
//! Ultimate Tic-Tac-Toe game-state engine for self-play data collection and
//! training.
//!
//! ## Design Principles
//!
//! 1. **Immutable States**: `GameState` is a small `Copy` value. Applying a
//!    move returns a new state and never touches the input, so alternative
//!    continuations can be explored from one ancestor, from any thread.
//!
//! 2. **Explicit Targets**: where the next move must go is a tagged
//!    `Target` (`Any`, `Board(k)`, `Finished`), not a sentinel integer.
//!
//! 3. **Deterministic**: move generation is ordered by flat index and random
//!    playouts are seeded, so replays reproduce games exactly.
//!
//! ## Game Loop
//!
//! ```
//! use ultimate_ttt::{GameRng, RulesEngine, UltimateTicTacToe};
//!
//! let rules = UltimateTicTacToe::new();
//! let mut rng = GameRng::new(42);
//! let mut state = rules.initial();
//! while !rules.is_terminal(&state) {
//!     let moves = rules.legal_moves(&state);
//!     let mv = moves[rng.gen_index(moves.len())];
//!     state = rules.apply_move(&state, mv);
//! }
//! assert!(rules.result(&state).is_ok());
//! ```
//!
//! ## Modules
//!
//! - `core`: players, moves, game state, RNG
//! - `rules`: `RulesEngine` trait and the Ultimate Tic-Tac-Toe rules
//! - `nn`: state encoding and legal-move masks for network input
//! - `replay`: replay records and verified reconstruction
//! - `playout`: seeded random playouts
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod nn;
pub mod playout;
pub mod replay;
pub mod rules;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Cell, CellView, GameRng, GameState, Move, MoveRecord, Player, Target,
    BOARD_SIZE, MOVE_COUNT,
};

pub use crate::rules::{
    GameResult, IllegalMoveError, MoveList, RulesEngine, UltimateTicTacToe, UndefinedResultError,
};

pub use crate::nn::{legal_mask, EncodedState, FlatEncoder, StateEncoder};

pub use crate::replay::{Replay, ReplayError};

pub use crate::playout::{Playout, PlayoutConfig, PlayoutStats, RandomPlayout, CAPTURE_BONUS};
