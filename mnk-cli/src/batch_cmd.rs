//! Batch command - run many self-play games and aggregate outcomes
//!
//! ## Architecture (3-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), execute_batch(), report_summary()
//! - Level 3: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use mnk_arena::{run_batch, run_batch_parallel, BatchConfig, BatchSummary, GameSummary};
use mnk_core::GameConfig;

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct BatchArgs {
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

    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Run games across worker threads
    #[arg(long)]
    pub parallel: bool,

    /// Output the summary as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run batch command
///
/// This function reads like a table of contents:
/// 1. Build the batch configuration
/// 2. Execute the batch (sequential or parallel)
/// 3. Report the aggregated summary
pub fn run(args: BatchArgs, seed: Option<u64>) -> Result<()> {
    let config = build_config(&args, seed)?;

    tracing::info!(
        "Starting batch: {} games on a {}x{} board, {} in a row to win",
        config.games,
        config.game.rows,
        config.game.cols,
        config.game.win_condition
    );

    let summary = execute_batch(&config, args.parallel)?;

    tracing::info!(
        "Finished batch: {} crosses, {} noughts, {} draws",
        summary.cross_wins,
        summary.nought_wins,
        summary.draws
    );

    report_summary(&summary, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Build the batch configuration from file or flags
fn build_config(args: &BatchArgs, seed: Option<u64>) -> Result<BatchConfig> {
    let game = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load game config: {}", path.display()))?,
        None => GameConfig::new(args.rows, args.cols, args.win),
    };
    validate_dimensions(&game)?;

    let mut config = BatchConfig::new(game).with_games(args.games);
    if let Some(s) = seed {
        config = config.with_seed(s);
    }
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

/// Execute the batch in the requested mode
fn execute_batch(config: &BatchConfig, parallel: bool) -> Result<BatchSummary> {
    let summary = if parallel {
        run_batch_parallel(config)?
    } else {
        run_batch(config)?
    };
    Ok(summary)
}

/// Report the batch summary
fn report_summary(summary: &BatchSummary, args: &BatchArgs) {
    if args.json {
        print_json_summary(summary);
    } else {
        print_text_summary(summary);
    }
}

// ============================================================================
// LEVEL 3 - FORMATTING
// ============================================================================

/// Print the summary as JSON with derived rates
fn print_json_summary(summary: &BatchSummary) {
    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        games_played: u32,
        cross_wins: u32,
        nought_wins: u32,
        draws: u32,
        avg_moves: f32,
        cross_win_rate: f32,
        nought_win_rate: f32,
        draw_rate: f32,
        outcomes: &'a [GameSummary],
    }

    let output = JsonOutput {
        games_played: summary.games_played,
        cross_wins: summary.cross_wins,
        nought_wins: summary.nought_wins,
        draws: summary.draws,
        avg_moves: summary.avg_moves,
        cross_win_rate: summary.cross_win_rate(),
        nought_win_rate: summary.nought_win_rate(),
        draw_rate: summary.draw_rate(),
        outcomes: &summary.outcomes,
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print the summary as text
fn print_text_summary(summary: &BatchSummary) {
    println!("\n=== Batch Results ===");
    println!("Games played: {}", summary.games_played);
    println!(
        "Cross wins:   {} ({:.1}%)",
        summary.cross_wins,
        summary.cross_win_rate() * 100.0
    );
    println!(
        "Nought wins:  {} ({:.1}%)",
        summary.nought_wins,
        summary.nought_win_rate() * 100.0
    );
    println!(
        "Draws:        {} ({:.1}%)",
        summary.draws,
        summary.draw_rate() * 100.0
    );
    println!("Avg moves:    {:.1}", summary.avg_moves);
}

// ============================================================================
// TESTS
// ============================================================================
