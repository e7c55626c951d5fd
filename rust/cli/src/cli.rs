//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "handrank",
    version,
    about = "Classify poker hands and rank them against each other"
)]
pub struct HandrankCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate a single hand of five or more cards
    Eval {
        /// Card tokens such as `10H QS AD`, or one JSON array of tokens
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Print suits as glyphs
        #[arg(long)]
        unicode: bool,
    },
    /// Rank several hands and show the best (or all, weakest first)
    Rank {
        /// One hand, e.g. "KC KH 10S QD QH"; repeat for more hands
        #[arg(long = "hand")]
        hands: Vec<String>,
        /// File with one hand per line
        #[arg(long)]
        input: Option<String>,
        /// Show every hand instead of only the best
        #[arg(long)]
        all: bool,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[arg(long)]
        unicode: bool,
    },
    /// Compare two hands; prints -1, 0 or 1 from the first hand's point of view
    Compare {
        first: String,
        second: String,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        #[arg(long)]
        unicode: bool,
    },
    /// Display the resolved configuration and where each value came from
    Cfg,
}
