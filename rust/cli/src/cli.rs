//! Command-line argument definitions for the fivedraw CLI.

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "fivedraw",
    version,
    about = "Five-card draw poker at the terminal"
)]
pub struct FivedrawCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play an interactive game against computer opponents
    Play {
        /// Number of seats at the table, including you
        #[arg(long)]
        players: Option<usize>,
        /// Draw rounds per game
        #[arg(long)]
        rounds: Option<u32>,
        /// RNG seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Your display name (prompted for when omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// Deal a single hand and show its rank
    Deal {
        /// RNG seed for a deterministic deal
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Simulate games among computer players
    Sim {
        /// Number of games to simulate
        #[arg(long)]
        games: u64,
        /// Path for JSONL round records
        #[arg(long)]
        output: Option<String>,
        /// Base RNG seed (each game uses seed + game index)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show resolved configuration
    Cfg,
}
