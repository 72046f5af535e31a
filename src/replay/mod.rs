//! Game replays.
//!
//! A replay is the move list of a complete game plus its result tag. Since
//! the rules are deterministic, the move list alone reconstructs every
//! position; the result and step count are stored for consumers that only
//! need a summary, and are checked on reconstruction.
//!
//! ## Usage
//!
//! ```
//! use ultimate_ttt::playout::{PlayoutConfig, RandomPlayout};
//! use ultimate_ttt::replay::Replay;
//!
//! let playout = RandomPlayout::new(PlayoutConfig::default().with_seed(9)).play(0);
//! let bytes = playout.replay().unwrap().to_bytes().unwrap();
//!
//! let restored = Replay::from_bytes(&bytes).unwrap();
//! assert_eq!(restored.reconstruct().unwrap(), playout.final_state);
//! ```

mod record;

pub use record::{Replay, ReplayError};
