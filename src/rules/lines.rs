//! Three-in-a-row detection on a 3x3 grid.
//!
//! Used both for sub-boards (cells) and for the capture grid.

use crate::core::{Cell, Player, BOARD_SIZE};

/// The 8 winning lines of a row-major 3x3 grid.
pub const LINES: [[usize; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Owner of the first complete line, if any.
///
/// At most one player can own lines in a reachable position, so "first"
/// only fixes iteration order.
#[must_use]
pub fn line_winner(grid: &[Cell; BOARD_SIZE]) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| match grid[a] {
        Some(p) if grid[b] == Some(p) && grid[c] == Some(p) => Some(p),
        _ => None,
    })
}
