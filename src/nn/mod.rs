//! Neural network input encoding.
//!
//! - **Encoding**: `StateEncoder` trait, `FlatEncoder` (101 features),
//!   producing an `EncodedState`
//! - **Masking**: `legal_mask`, one slot per flat move index
//!
//! ```
//! use ultimate_ttt::core::GameState;
//! use ultimate_ttt::nn::{legal_mask, FlatEncoder, StateEncoder};
//!
//! let state = GameState::initial();
//! let encoded = FlatEncoder::new().encode(&state);
//! assert_eq!(encoded.tensor.len(), 101);
//! assert_eq!(legal_mask(&state).len(), 81);
//! ```

pub mod encoder;

pub use encoder::{legal_mask, EncodedState, FlatEncoder, StateEncoder};
