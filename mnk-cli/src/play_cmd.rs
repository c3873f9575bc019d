//! Play command - run a single self-play game
//!
//! ## Architecture (3-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_config(), play_game(), report_game()
//! - Level 3: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mnk_core::{Game, GameConfig, GameReport};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Board rows
    #[arg(long, default_value = "3")]
    pub rows: usize,

    /// Board columns
    #[arg(long, default_value = "3")]
    pub cols: usize,

    /// Line length required to win
    #[arg(long, default_value = "3")]
    pub win: usize,

    /// Game config JSON file (overrides --rows/--cols/--win)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// This function reads like a table of contents:
/// 1. Resolve the game configuration
/// 2. Play the game to completion
/// 3. Report the turn log and result
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = load_config(&args)?;

    tracing::info!(
        "Starting game: {}x{} board, {} in a row to win",
        config.rows,
        config.cols,
        config.win_condition
    );

    let report = play_game(config, seed)?;

    tracing::info!("Finished: {} after {} moves", report.result, report.moves());

    report_game(&report, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Resolve configuration from file or flags
fn load_config(args: &PlayArgs) -> Result<GameConfig> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load game config: {}", path.display()))?,
        None => GameConfig::new(args.rows, args.cols, args.win),
    };
    validate_dimensions(&config)?;
    Ok(config)
}

/// Validate that board dimensions and win condition are positive
fn validate_dimensions(config: &GameConfig) -> Result<()> {
    if config.rows == 0 || config.cols == 0 {
        anyhow::bail!(
            "Board dimensions must be positive, got {}x{}",
            config.rows,
            config.cols
        );
    }
    if config.win_condition == 0 {
        anyhow::bail!("Win condition must be positive");
    }
    Ok(())
}

/// Play a single game to completion
fn play_game(config: GameConfig, seed: Option<u64>) -> Result<GameReport> {
    let game = match seed {
        Some(s) => Game::with_seed(config, s)?,
        None => Game::new(config)?,
    };
    Ok(game.play())
}

/// Report the finished game
fn report_game(report: &GameReport, args: &PlayArgs) {
    if args.json {
        print_json_report(report);
    } else {
        print_text_report(report);
    }
}

// ============================================================================
// LEVEL 3 - FORMATTING
// ============================================================================

/// Print the report as JSON
fn print_json_report(report: &GameReport) {
    if let Ok(json) = serde_json::to_string_pretty(report) {
        println!("{}", json);
    }
}

/// Print the turn log as text, one board snapshot per move
fn print_text_report(report: &GameReport) {
    for turn in &report.turns {
        println!(
            "Move {}: {:?} -> ({}, {})",
            turn.index, turn.mover, turn.cell.row, turn.cell.col
        );
        println!("{}\n", turn.snapshot);
    }
    println!("Result: {}", report.result);
}

// ============================================================================
// TESTS
// ============================================================================
