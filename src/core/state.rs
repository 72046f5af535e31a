//! Game state: cell grid, captures, side to move, and active target.
//!
//! ## GameState
//!
//! A small `Copy` value (81 cells + 9 captures + turn + target). Every move
//! produces a new state; the previous one stays valid, so any number of
//! continuations can be explored from a shared ancestor without cloning
//! costs or synchronization.
//!
//! ## Target
//!
//! Which sub-board the side to move must play in:
//! - `Any`: any sub-board that is not captured
//! - `Board(k)`: sub-board `k` only
//! - `Finished`: the capture grid holds a line; no moves remain
//!
//! State transitions live in `rules::UltimateTicTacToe`. This module only
//! stores and exposes the raw fields.

use serde::{Deserialize, Serialize};

use super::action::BOARD_SIZE;
use super::player::{Cell, CellView, Player};

/// Number of target categories exposed to encoders (`Any` + 9 boards).
pub const TARGET_CATEGORIES: usize = BOARD_SIZE + 1;

/// Constraint on where the next move must be played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    /// Any uncaptured sub-board.
    Any,
    /// Only the given sub-board.
    Board(usize),
    /// Game over.
    Finished,
}

impl Target {
    /// Category index for encoders: `Any = 0`, `Board(k) = k + 1`.
    ///
    /// Returns `None` for `Finished`.
    #[must_use]
    pub fn category(self) -> Option<usize> {
        match self {
            Target::Any => Some(0),
            Target::Board(k) => Some(k + 1),
            Target::Finished => None,
        }
    }

    /// Check if this is the terminal target.
    #[must_use]
    pub fn is_finished(self) -> bool {
        matches!(self, Target::Finished)
    }
}

/// A deserialized state whose target cannot be played into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum InvalidStateError {
    #[display("target sub-board {board} does not exist")]
    TargetOutOfRange { board: usize },

    #[display("target sub-board {board} is captured or full")]
    TargetClosed { board: usize },
}

impl std::error::Error for InvalidStateError {}

/// Complete game state.
///
/// Deserialization rejects a `Board(k)` target that is out of range or
/// closed, so every decoded state is safe to pass to the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    /// 9 sub-boards of 9 cells each.
    pub(crate) boards: [[Cell; BOARD_SIZE]; BOARD_SIZE],

    /// Capture owner per sub-board. Set once, never cleared.
    pub(crate) captures: [Cell; BOARD_SIZE],

    /// Side to move. Still flipped after the final move.
    pub(crate) turn: Player,

    /// Where the side to move must play.
    pub(crate) target: Target,
}

impl GameState {
    /// The starting position: empty grid, `X` to move, `Target::Any`.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            boards: [[None; BOARD_SIZE]; BOARD_SIZE],
            captures: [None; BOARD_SIZE],
            turn: Player::X,
            target: Target::Any,
        }
    }

    /// Side to move.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Active target.
    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    /// Contents of one cell.
    ///
    /// # Panics
    ///
    /// Panics if either index is 9 or more.
    #[must_use]
    pub fn cell(&self, board: usize, cell: usize) -> Cell {
        self.boards[board][cell]
    }

    /// All cells of one sub-board.
    #[must_use]
    pub fn sub_board(&self, board: usize) -> &[Cell; BOARD_SIZE] {
        &self.boards[board]
    }

    /// Capture owner of one sub-board.
    #[must_use]
    pub fn capture(&self, board: usize) -> Cell {
        self.captures[board]
    }

    /// All capture slots.
    #[must_use]
    pub fn captures(&self) -> &[Cell; BOARD_SIZE] {
        &self.captures
    }

    /// A cell as seen by the side to move.
    #[must_use]
    pub fn cell_view(&self, board: usize, cell: usize) -> CellView {
        CellView::of(self.boards[board][cell], self.turn)
    }

    /// A capture slot as seen by the side to move.
    #[must_use]
    pub fn capture_view(&self, board: usize) -> CellView {
        CellView::of(self.captures[board], self.turn)
    }

    /// Check if every cell of a sub-board is marked.
    #[must_use]
    pub fn is_board_full(&self, board: usize) -> bool {
        self.boards[board].iter().all(Option::is_some)
    }

    /// Check if a sub-board can still receive moves: uncaptured with an empty cell.
    #[must_use]
    pub fn is_board_open(&self, board: usize) -> bool {
        self.captures[board].is_none() && !self.is_board_full(board)
    }

    /// Number of empty cells across the whole grid.
    #[must_use]
    pub fn empty_cells(&self) -> usize {
        self.boards
            .iter()
            .flatten()
            .filter(|c| c.is_none())
            .count()
    }
}

/// Unchecked wire form of `GameState`.
#[derive(Deserialize)]
struct RawGameState {
    boards: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    captures: [Cell; BOARD_SIZE],
    turn: Player,
    target: Target,
}

impl TryFrom<RawGameState> for GameState {
    type Error = InvalidStateError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let state = GameState {
            boards: raw.boards,
            captures: raw.captures,
            turn: raw.turn,
            target: raw.target,
        };
        if let Target::Board(board) = state.target {
            if board >= BOARD_SIZE {
                return Err(InvalidStateError::TargetOutOfRange { board });
            }
            if !state.is_board_open(board) {
                return Err(InvalidStateError::TargetClosed { board });
            }
        }
        Ok(state)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// Renders the 9x9 grid, sub-boards laid out in their 3x3 arrangement.
impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 && row % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            let big_row = row / 3;
            let small_row = row % 3;
            for col in 0..BOARD_SIZE {
                if col > 0 && col % 3 == 0 {
                    write!(f, "| ")?;
                }
                let board = big_row * 3 + col / 3;
                let cell = small_row * 3 + col % 3;
                let symbol = self.boards[board][cell].map_or('.', Player::symbol);
                write!(f, "{}", symbol)?;
                if col + 1 < BOARD_SIZE {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.turn(), Player::X);
        assert_eq!(state.target(), Target::Any);
        assert_eq!(state.empty_cells(), 81);
        assert!(state.captures().iter().all(Option::is_none));
        assert_eq!(state, GameState::default());
    }

    #[test]
    fn test_target_category() {
        assert_eq!(Target::Any.category(), Some(0));
        assert_eq!(Target::Board(0).category(), Some(1));
        assert_eq!(Target::Board(8).category(), Some(9));
        assert_eq!(Target::Finished.category(), None);
        assert!(Target::Finished.is_finished());
        assert!(!Target::Board(3).is_finished());
    }

    #[test]
    fn test_board_open_and_full() {
        let mut state = GameState::initial();
        assert!(state.is_board_open(4));

        state.boards[4] = [Some(Player::X); BOARD_SIZE];
        assert!(state.is_board_full(4));
        assert!(!state.is_board_open(4));

        state.captures[2] = Some(Player::O);
        assert!(!state.is_board_full(2));
        assert!(!state.is_board_open(2));
    }

    #[test]
    fn test_perspective_views() {
        let mut state = GameState::initial();
        state.boards[0][0] = Some(Player::X);
        state.captures[1] = Some(Player::O);

        assert_eq!(state.cell_view(0, 0), CellView::Mine);
        assert_eq!(state.capture_view(1), CellView::Theirs);
        assert_eq!(state.cell_view(0, 1), CellView::Empty);

        state.turn = Player::O;
        assert_eq!(state.cell_view(0, 0), CellView::Theirs);
        assert_eq!(state.capture_view(1), CellView::Mine);
    }

    #[test]
    fn test_display_layout() {
        let mut state = GameState::initial();
        state.boards[0][0] = Some(Player::X);
        state.boards[8][8] = Some(Player::O);

        let rendered = state.to_string();
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("X . ."));
        assert!(lines[10].ends_with(". . O"));
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::initial();
        state.boards[3][5] = Some(Player::O);
        state.target = Target::Board(5);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    fn with_target(state: &GameState, target: serde_json::Value) -> serde_json::Result<GameState> {
        let mut value = serde_json::to_value(state).unwrap();
        value["target"] = target;
        serde_json::from_value(value)
    }

    #[test]
    fn test_deserialize_rejects_missing_target_board() {
        let err = with_target(&GameState::initial(), serde_json::json!({ "Board": 12 }))
            .unwrap_err();
        assert!(err.to_string().contains("target sub-board 12 does not exist"));
    }

    #[test]
    fn test_deserialize_rejects_closed_target_board() {
        let mut state = GameState::initial();
        state.captures[2] = Some(Player::X);
        state.boards[6] = [Some(Player::O); BOARD_SIZE];

        let err = with_target(&state, serde_json::json!({ "Board": 2 })).unwrap_err();
        assert!(err.to_string().contains("target sub-board 2 is captured or full"));
        let err = with_target(&state, serde_json::json!({ "Board": 6 })).unwrap_err();
        assert!(err.to_string().contains("target sub-board 6 is captured or full"));

        let ok = with_target(&state, serde_json::json!({ "Board": 4 })).unwrap();
        assert_eq!(ok.target(), Target::Board(4));
        assert_eq!(with_target(&state, serde_json::json!("Any")).unwrap().target(), Target::Any);
    }
}
