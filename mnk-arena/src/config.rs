//! Batch configuration

use mnk_core::GameConfig;
use serde::{Deserialize, Serialize};

/// Configuration for a batch of self-play games
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Game configuration shared by every game in the batch
    pub game: GameConfig,
    /// Number of games to play
    pub games: usize,
    /// Base seed; game i runs with base_seed + i
    pub base_seed: u64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            games: 100,
            base_seed: 42,
        }
    }
}

impl BatchConfig {
    pub fn new(game: GameConfig) -> Self {
        Self {
            game,
            ..Default::default()
        }
    }

    /// Set the number of games
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.base_seed = seed;
        self
    }
}
