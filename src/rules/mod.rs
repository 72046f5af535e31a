//! Game rules.
//!
//! - `RulesEngine`: the entry points consumers drive a game through
//! - `UltimateTicTacToe`: move generation, move application, terminal logic
//! - `lines`: three-in-a-row detection shared by sub-boards and captures
//! - `error`: illegal-move and undefined-result errors

pub mod engine;
pub mod error;
pub mod lines;
pub mod ultimate;

pub use engine::{GameResult, MoveList, RulesEngine, UnknownResultTag};
pub use error::{IllegalMoveError, UndefinedResultError};
pub use ultimate::UltimateTicTacToe;
