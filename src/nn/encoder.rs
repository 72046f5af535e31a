//! State encoding for neural network input.
//!
//! Encoders read the raw fields of `GameState` from the perspective of the
//! side to move. They never evaluate rules themselves, except for the legal
//! mask, which goes through `RulesEngine::legal_moves`.

use crate::core::{GameState, Player, BOARD_SIZE, MOVE_COUNT, TARGET_CATEGORIES};
use crate::rules::{RulesEngine, UltimateTicTacToe};

/// Network input: a flat `f32` buffer and its shape.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedState {
    pub tensor: Vec<f32>,
    pub shape: Vec<usize>,
}

impl EncodedState {
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(tensor.len(), shape.iter().product::<usize>());
        Self { tensor, shape }
    }
}

/// Encodes game state into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the state from the side to move's perspective.
    fn encode(&self, state: &GameState) -> EncodedState;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Size of the policy output (one slot per flat move index).
    fn action_space_size(&self) -> usize {
        MOVE_COUNT
    }
}

/// Flat 101-feature encoder.
///
/// | range      | contents                                        |
/// |------------|-------------------------------------------------|
/// | `0..9`     | captures: +1 mine, -1 opponent's, 0 undecided   |
/// | `9..90`    | cells at `9 + board * 9 + cell`, same values    |
/// | `90`       | side to move: +1 X, -1 O                        |
/// | `91..101`  | target one-hot: `Any` at 91, `Board(k)` at 92+k |
///
/// The target block is all zeros for a finished game.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatEncoder;

impl FlatEncoder {
    /// Offset of the capture block.
    pub const CAPTURES: usize = 0;
    /// Offset of the cell block.
    pub const CELLS: usize = Self::CAPTURES + BOARD_SIZE;
    /// Index of the side-to-move feature.
    pub const TURN: usize = Self::CELLS + MOVE_COUNT;
    /// Offset of the target one-hot block.
    pub const TARGET: usize = Self::TURN + 1;
    /// Total feature count.
    pub const SIZE: usize = Self::TARGET + TARGET_CATEGORIES;

    /// Create the encoder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl StateEncoder for FlatEncoder {
    fn encode(&self, state: &GameState) -> EncodedState {
        let mut tensor = vec![0.0f32; Self::SIZE];

        for board in 0..BOARD_SIZE {
            tensor[Self::CAPTURES + board] = state.capture_view(board).signed();
            for cell in 0..BOARD_SIZE {
                tensor[Self::CELLS + board * BOARD_SIZE + cell] =
                    state.cell_view(board, cell).signed();
            }
        }

        tensor[Self::TURN] = match state.turn() {
            Player::X => 1.0,
            Player::O => -1.0,
        };

        if let Some(category) = state.target().category() {
            tensor[Self::TARGET + category] = 1.0;
        }

        EncodedState::new(tensor, vec![Self::SIZE])
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![Self::SIZE]
    }
}

/// 81-wide mask with 1.0 at each legal move's flat index.
#[must_use]
pub fn legal_mask(state: &GameState) -> Vec<f32> {
    let mut mask = vec![0.0f32; MOVE_COUNT];
    for mv in UltimateTicTacToe::new().legal_moves(state) {
        mask[mv.index()] = 1.0;
    }
    mask
}
