//! Players, cell marks, and perspective views.
//!
//! ## Player
//!
//! The two sides of the game. `X` always moves first.
//!
//! ## Cell
//!
//! A cell (or a sub-board capture) is `Option<Player>`: `None` while empty,
//! `Some(player)` once marked. Marks are write-once.
//!
//! ## CellView
//!
//! The same three values seen from the side to move, as consumed by
//! state encoders: mine, theirs, or empty.

use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First player.
    X,
    /// Second player.
    O,
}

impl Player {
    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character symbol, as used in replays and board rendering.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a cell or a sub-board capture slot.
pub type Cell = Option<Player>;

/// A cell as seen by one player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellView {
    /// Marked by the viewing player.
    Mine,
    /// Marked by the opponent.
    Theirs,
    /// Not marked.
    Empty,
}

impl CellView {
    /// View `cell` from `perspective`.
    #[must_use]
    pub fn of(cell: Cell, perspective: Player) -> Self {
        match cell {
            None => CellView::Empty,
            Some(p) if p == perspective => CellView::Mine,
            Some(_) => CellView::Theirs,
        }
    }

    /// Signed scalar form: +1 mine, -1 theirs, 0 empty.
    #[must_use]
    pub fn signed(self) -> f32 {
        match self {
            CellView::Mine => 1.0,
            CellView::Theirs => -1.0,
            CellView::Empty => 0.0,
        }
    }
}
