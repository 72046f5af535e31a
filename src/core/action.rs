//! Move representation: sub-board index + cell index.
//!
//! A move places the mover's mark into cell `cell` of sub-board `board`.
//! Both indices are row-major positions in a 3x3 grid (0..9).
//!
//! The flat index `board * 9 + cell` (0..81) is the canonical encoding
//! used by fixed-size policy outputs and by legal-move masks.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Number of sub-boards, and of cells per sub-board.
pub const BOARD_SIZE: usize = 9;

/// Number of distinct moves (`BOARD_SIZE * BOARD_SIZE`).
pub const MOVE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Move indices outside `0..9` (or a flat index outside `0..81`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
#[display("move ({board}, {cell}) is out of range")]
pub struct MoveRangeError {
    pub board: u8,
    pub cell: u8,
}

impl std::error::Error for MoveRangeError {}

/// A single move.
///
/// Serializes as a `[board, cell]` pair.
///
/// ## Example
///
/// ```
/// use ultimate_ttt::core::Move;
///
/// let mv = Move::new(4, 7);
/// assert_eq!(mv.index(), 43);
/// assert_eq!(Move::from_index(43), Some(mv));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Move {
    board: u8,
    cell: u8,
}

impl Move {
    /// Create a move.
    ///
    /// # Panics
    ///
    /// Panics if either index is 9 or more. Use `Move::try_from` for
    /// untrusted input.
    #[must_use]
    pub const fn new(board: u8, cell: u8) -> Self {
        assert!((board as usize) < BOARD_SIZE, "board index out of range");
        assert!((cell as usize) < BOARD_SIZE, "cell index out of range");
        Self { board, cell }
    }

    /// Decode a flat index in `0..81`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        if (index as usize) < MOVE_COUNT {
            Some(Self {
                board: index / BOARD_SIZE as u8,
                cell: index % BOARD_SIZE as u8,
            })
        } else {
            None
        }
    }

    /// Sub-board the move is played in.
    #[must_use]
    pub const fn board(self) -> usize {
        self.board as usize
    }

    /// Cell within the sub-board. Also the sub-board the opponent is sent to.
    #[must_use]
    pub const fn cell(self) -> usize {
        self.cell as usize
    }

    /// Flat index `board * 9 + cell`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.board as usize * BOARD_SIZE + self.cell as usize
    }

    /// Iterate over all 81 moves in flat-index order.
    pub fn all() -> impl Iterator<Item = Move> {
        (0..MOVE_COUNT as u8).filter_map(Move::from_index)
    }
}

impl TryFrom<(u8, u8)> for Move {
    type Error = MoveRangeError;

    fn try_from((board, cell): (u8, u8)) -> Result<Self, Self::Error> {
        if (board as usize) < BOARD_SIZE && (cell as usize) < BOARD_SIZE {
            Ok(Self { board, cell })
        } else {
            Err(MoveRangeError { board, cell })
        }
    }
}

impl From<Move> for (u8, u8) {
    fn from(mv: Move) -> Self {
        (mv.board, mv.cell)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.board, self.cell)
    }
}

/// A played move with metadata, as collected during playouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The move played.
    pub mv: Move,

    /// 0-based ply number.
    pub ply: u32,

    /// Whether this move captured its sub-board.
    pub captured: bool,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, mv: Move, ply: u32, captured: bool) -> Self {
        Self {
            player,
            mv,
            ply,
            captured,
        }
    }
}
