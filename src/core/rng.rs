//! Seeded random number generation for playouts.
//!
//! Same seed, same sequence of choices. `for_game(i)` derives an
//! independent stream for game `i`, so one game of a batch can be
//! reproduced without replaying the others.
//!
//! ```
//! use ultimate_ttt::core::GameRng;
//!
//! let base = GameRng::new(7);
//! let mut a = base.for_game(3);
//! let mut b = GameRng::new(7).for_game(3);
//! assert_eq!(a.gen_index(81), b.gen_index(81));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Independent stream for game number `index`.
    ///
    /// Depends only on the seed and `index`, not on how much of this
    /// stream has been consumed.
    #[must_use]
    pub fn for_game(&self, index: u64) -> Self {
        let game_seed = self
            .seed
            .wrapping_add(index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
        Self::new(game_seed)
    }

    /// Uniform index in `0..len`.
    ///
    /// # Panics
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose a uniformly random element, or `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draw(rng: &mut GameRng, n: usize) -> Vec<usize> {
        (0..n).map(|_| rng.gen_index(1000)).collect()
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);
        assert_eq!(draw(&mut rng1, 100), draw(&mut rng2, 100));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);
        assert_ne!(draw(&mut rng1, 10), draw(&mut rng2, 10));
    }

    #[test]
    fn test_for_game_ignores_consumption() {
        let base = GameRng::new(42);
        let mut advanced = GameRng::new(42);
        draw(&mut advanced, 50);

        let mut a = base.for_game(5);
        let mut b = advanced.for_game(5);
        assert_eq!(draw(&mut a, 10), draw(&mut b, 10));
    }

    #[test]
    fn test_for_game_streams_differ() {
        let base = GameRng::new(42);
        let mut g0 = base.for_game(0);
        let mut g1 = base.for_game(1);
        assert_ne!(draw(&mut g0, 10), draw(&mut g1, 10));
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3, 4, 5];

        let chosen = rng.choose(&items).copied();
        assert!(chosen.is_some_and(|c| items.contains(&c)));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
