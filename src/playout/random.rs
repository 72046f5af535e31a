//! Uniformly random playouts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{GameRng, GameState, MoveRecord, Player, MOVE_COUNT};
use crate::replay::Replay;
use crate::rules::{GameResult, RulesEngine, UltimateTicTacToe};

/// Reward added to a move that captures a sub-board. Kept below the
/// terminal reward so winning the game stays the main signal.
pub const CAPTURE_BONUS: f64 = 0.15;

/// Configuration for random playouts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutConfig {
    /// Base seed. Game `i` of a batch uses the stream `GameRng::new(seed).for_game(i)`.
    pub seed: u64,

    /// Maximum moves per game. Games longer than this stop unfinished.
    /// A game never lasts more than 81 moves, so the default never truncates.
    pub max_moves: usize,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_moves: MOVE_COUNT,
        }
    }
}

impl PlayoutConfig {
    /// Create a new playout config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set maximum moves per game.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }
}

/// One played game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Playout {
    /// Index of the game within its batch.
    pub game_index: u64,

    /// Every move, in order.
    pub records: Vec<MoveRecord>,

    /// Position after the last move.
    pub final_state: GameState,

    /// Result, or `None` if `max_moves` cut the game short.
    pub outcome: Option<GameResult>,
}

impl Playout {
    /// Number of moves played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no moves were played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if the game reached a terminal state.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// Replay record of a complete game.
    #[must_use]
    pub fn replay(&self) -> Option<Replay> {
        let result = self.outcome?;
        Some(Replay {
            moves: self.records.iter().map(|r| r.mv).collect(),
            result,
            steps: self.records.len(),
        })
    }

    /// Training reward per move: the final result from the mover's side
    /// (+1 win, -1 loss, 0 draw), plus `capture_bonus` for capturing moves.
    ///
    /// `None` if the game was cut short.
    #[must_use]
    pub fn rewards(&self, capture_bonus: f64) -> Option<Vec<f64>> {
        let result = self.outcome?;
        Some(
            self.records
                .iter()
                .map(|r| {
                    let bonus = if r.captured { capture_bonus } else { 0.0 };
                    result.value_for(r.player) + bonus
                })
                .collect(),
        )
    }

    /// Moves that captured a sub-board, by player.
    pub fn captures_by(&self, player: Player) -> impl Iterator<Item = &MoveRecord> {
        self.records
            .iter()
            .filter(move |r| r.captured && r.player == player)
    }
}

/// Plays games by choosing uniformly among legal moves.
///
/// Deterministic: the same config and game index always produce the same
/// game.
#[derive(Clone, Debug)]
pub struct RandomPlayout<E: RulesEngine = UltimateTicTacToe> {
    engine: E,
    config: PlayoutConfig,
}

impl RandomPlayout<UltimateTicTacToe> {
    /// Create a playout runner for the standard rules.
    pub fn new(config: PlayoutConfig) -> Self {
        Self::with_engine(UltimateTicTacToe::new(), config)
    }
}

impl<E: RulesEngine> RandomPlayout<E> {
    /// Create a playout runner for a given engine.
    pub fn with_engine(engine: E, config: PlayoutConfig) -> Self {
        Self { engine, config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &PlayoutConfig {
        &self.config
    }

    /// Play game number `game_index` from the initial position.
    pub fn play(&self, game_index: u64) -> Playout {
        let mut rng = GameRng::new(self.config.seed).for_game(game_index);
        let mut state = self.engine.initial();
        let mut records = Vec::new();

        while records.len() < self.config.max_moves && !self.engine.is_terminal(&state) {
            let moves = self.engine.legal_moves(&state);
            let Some(&mv) = rng.choose(&moves) else {
                break;
            };

            let next = self.engine.apply_move(&state, mv);
            let captured =
                state.capture(mv.board()).is_none() && next.capture(mv.board()).is_some();
            records.push(MoveRecord::new(state.turn(), mv, records.len() as u32, captured));
            state = next;
        }

        let outcome = self.engine.outcome(&state);
        let result = outcome.map_or("unfinished", |r| r.tag());
        debug!(game_index, moves = records.len(), result, "playout finished");

        Playout {
            game_index,
            records,
            final_state: state,
            outcome,
        }
    }

    /// Play games `0..count`.
    pub fn play_many(&self, count: u64) -> Vec<Playout> {
        (0..count).map(|i| self.play(i)).collect()
    }
}

/// Aggregate results over a batch of playouts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayoutStats {
    /// Games recorded.
    pub games: u32,

    /// Wins for `X`.
    pub x_wins: u32,

    /// Wins for `O`.
    pub o_wins: u32,

    /// Drawn games.
    pub draws: u32,

    /// Games cut short by `max_moves`.
    pub unfinished: u32,

    /// Total moves across all games.
    pub total_moves: u64,
}

impl PlayoutStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one game.
    pub fn record(&mut self, playout: &Playout) {
        self.games += 1;
        self.total_moves += playout.len() as u64;
        match playout.outcome {
            Some(GameResult::Winner(Player::X)) => self.x_wins += 1,
            Some(GameResult::Winner(Player::O)) => self.o_wins += 1,
            Some(GameResult::Draw) => self.draws += 1,
            None => self.unfinished += 1,
        }
    }

    /// Average game length in moves.
    #[must_use]
    pub fn avg_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }
}

impl<'a> FromIterator<&'a Playout> for PlayoutStats {
    fn from_iter<I: IntoIterator<Item = &'a Playout>>(iter: I) -> Self {
        let mut stats = Self::new();
        for playout in iter {
            stats.record(playout);
        }
        stats
    }
}
