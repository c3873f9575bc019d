//! MNK Arena - batch self-play
//!
//! Runs many engine games across derived tie-break seeds and aggregates
//! their outcomes into win/draw statistics.

pub mod batch;
pub mod config;

pub use batch::{run_batch, run_batch_parallel, BatchSummary, GameSummary};
pub use config::BatchConfig;
