//! MNK CLI - Command-line interface
//!
//! Commands:
//! - play: Play a single self-play game
//! - batch: Run a batch of self-play games

use clap::{Parser, Subcommand};

mod batch_cmd;
mod play_cmd;

#[derive(Parser)]
#[command(name = "mnk")]
#[command(about = "N-in-a-row self-play engine")]
struct Cli {
    /// Tie-break seed (defaults to 42)
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single self-play game
    Play(play_cmd::PlayArgs),
    /// Run a batch of self-play games
    Batch(batch_cmd::BatchArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Batch(args) => batch_cmd::run(args, cli.seed),
    }
}
