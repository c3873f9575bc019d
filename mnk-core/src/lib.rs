//! MNK Core - N-in-a-row self-play engine
//!
//! This crate provides the heuristic move-selection engine:
//! - Board grid, player marks, and text rendering
//! - Frontier tracking of candidate cells around placed marks
//! - Directional attack/defense scoring with forced-win detection
//! - The self-play turn loop with a per-turn board snapshot log

pub mod board;
pub mod frontier;
pub mod eval;
pub mod engine;

// Re-exports for convenient access
pub use board::{Board, Coord, Mark, LINE_DIRECTIONS, NEIGHBOR_OFFSETS};
pub use frontier::{FrontierSet, FrontierTracker};
pub use eval::{select_move, FirstTieBreak, SeededTieBreak, Selection, TieBreak};
pub use engine::{ConfigError, Game, GameConfig, GameReport, GameResult, TurnRecord};
