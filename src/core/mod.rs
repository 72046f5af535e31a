//! Core value types: players, moves, state, RNG.
//!
//! Everything here is plain data. Game rules live in `rules`.

pub mod action;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Move, MoveRangeError, MoveRecord, BOARD_SIZE, MOVE_COUNT};
pub use player::{Cell, CellView, Player};
pub use rng::GameRng;
pub use state::{GameState, InvalidStateError, Target, TARGET_CATEGORIES};
