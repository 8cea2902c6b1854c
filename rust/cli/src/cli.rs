//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "flipseven",
    version,
    about = "Flip 7 rules engine: simulations and risk tools"
)]
pub struct FlipsevenCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play full games between AI players and report the winners
    Sim {
        /// Number of games to play
        #[arg(long)]
        games: u32,
        /// Players per game (overrides FLIPSEVEN_PLAYERS)
        #[arg(long)]
        players: Option<usize>,
        /// Base seed; game N uses seed + N
        #[arg(long)]
        seed: Option<u64>,
        /// AI preset seated at every chair
        #[arg(long)]
        ai: Option<String>,
        /// Score that ends a game
        #[arg(long)]
        target: Option<u32>,
        /// Print a JSON summary instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Estimate bust chances for a hand against a fresh deck
    Risk {
        /// Number values already held, comma separated (e.g. 3,7,12)
        #[arg(long, value_delimiter = ',')]
        held: Vec<u8>,
        /// The hand holds an unused Second Chance
        #[arg(long)]
        second_chance: bool,
        /// Seed for the deck shuffle and the Flip Three trials
        #[arg(long)]
        seed: Option<u64>,
    },
}
