//! Batch execution and outcome aggregation

use mnk_core::{ConfigError, Game, GameResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::BatchConfig;

/// Outcome of a single game in a batch
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Tie-break seed the game ran with
    pub seed: u64,
    pub result: GameResult,
    /// Moves played
    pub moves: usize,
}

/// Aggregated outcomes of a batch
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub cross_wins: u32,
    pub nought_wins: u32,
    pub draws: u32,
    pub games_played: u32,
    /// Average game length in moves
    pub avg_moves: f32,
    /// Individual game outcomes, in seed order
    pub outcomes: Vec<GameSummary>,
}

impl BatchSummary {
    /// Create empty summary
    pub fn empty() -> Self {
        Self {
            cross_wins: 0,
            nought_wins: 0,
            draws: 0,
            games_played: 0,
            avg_moves: 0.0,
            outcomes: Vec::new(),
        }
    }

    /// Win rate for crosses
    pub fn cross_win_rate(&self) -> f32 {
        self.rate(self.cross_wins)
    }

    /// Win rate for noughts
    pub fn nought_win_rate(&self) -> f32 {
        self.rate(self.nought_wins)
    }

    /// Draw rate
    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    fn rate(&self, count: u32) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            count as f32 / self.games_played as f32
        }
    }
}

/// Play the batch sequentially
pub fn run_batch(config: &BatchConfig) -> Result<BatchSummary, ConfigError> {
    config.game.validate()?;

    let seeds = prepare_seeds(config);
    let outcomes = seeds.iter().map(|&seed| play_one(config, seed)).collect();
    Ok(aggregate(outcomes))
}

/// Play the batch across worker threads
///
/// Games are independent, so the summary is identical to the sequential
/// run for the same configuration.
pub fn run_batch_parallel(config: &BatchConfig) -> Result<BatchSummary, ConfigError> {
    config.game.validate()?;

    let seeds = prepare_seeds(config);
    let outcomes = seeds
        .par_iter()
        .map(|&seed| play_one(config, seed))
        .collect();
    Ok(aggregate(outcomes))
}

/// Derive one tie-break seed per game
fn prepare_seeds(config: &BatchConfig) -> Vec<u64> {
    (0..config.games)
        .map(|i| config.base_seed.wrapping_add(i as u64))
        .collect()
}

/// Run a single game at the given seed
fn play_one(config: &BatchConfig, seed: u64) -> GameSummary {
    let game = Game::with_seed(config.game, seed).expect("config validated before the batch");
    let report = game.play();
    GameSummary {
        seed,
        result: report.result,
        moves: report.moves(),
    }
}

/// Aggregate game outcomes into a batch summary
fn aggregate(outcomes: Vec<GameSummary>) -> BatchSummary {
    let mut cross_wins = 0u32;
    let mut nought_wins = 0u32;
    let mut draws = 0u32;
    let mut total_moves = 0usize;

    for outcome in &outcomes {
        total_moves += outcome.moves;
        match outcome.result {
            GameResult::CrossesWon => cross_wins += 1,
            GameResult::NoughtsWon => nought_wins += 1,
            GameResult::Draw => draws += 1,
            GameResult::Ongoing => {}
        }
    }

    let games_played = outcomes.len() as u32;
    let avg_moves = if games_played > 0 {
        total_moves as f32 / games_played as f32
    } else {
        0.0
    };

    BatchSummary {
        cross_wins,
        nought_wins,
        draws,
        games_played,
        avg_moves,
        outcomes,
    }
}
