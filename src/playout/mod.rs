//! Seeded random playouts.
//!
//! Random games are the simplest consumer of the rules: they exercise move
//! generation end to end and produce replays for tooling.
//!
//! ## Usage
//!
//! ```
//! use ultimate_ttt::playout::{PlayoutConfig, PlayoutStats, RandomPlayout};
//!
//! let runner = RandomPlayout::new(PlayoutConfig::default().with_seed(42));
//! let games = runner.play_many(4);
//! let stats: PlayoutStats = games.iter().collect();
//! assert_eq!(stats.games, 4);
//! ```

mod random;

pub use random::{Playout, PlayoutConfig, PlayoutStats, RandomPlayout, CAPTURE_BONUS};
