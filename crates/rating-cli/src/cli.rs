//! CLI argument definitions for rating.

use clap::{Parser, Subcommand};
use rating_core::MaimaiDxLamp;

#[derive(Parser)]
#[command(name = "rating")]
#[command(about = "Rhythm-game rating calculator", version)]
pub struct Args {
    /// Print results as JSON
    #[arg(long, global = true, env = "RATING_OUTPUT_JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// WACCA rate for a score
    #[command(allow_negative_numbers = true)]
    Wacca {
        /// Score (0 - 1000000)
        #[arg(long)]
        score: i64,
        /// Internal chart constant
        #[arg(long)]
        level: f64,
        /// Use the WACCA Plus brackets
        #[arg(long)]
        plus: bool,
    },
    /// Minimum WACCA score for a rate
    #[command(allow_negative_numbers = true)]
    WaccaInverse {
        /// Target rate
        #[arg(long)]
        rate: f64,
        /// Internal chart constant
        #[arg(long)]
        level: f64,
        /// Use the WACCA Plus brackets
        #[arg(long)]
        plus: bool,
    },
    /// maimai DX rate for an achievement percentage
    #[command(allow_negative_numbers = true)]
    MaimaiDx {
        /// Achievement percentage (0 - 101)
        #[arg(long)]
        score: f64,
        /// Internal chart constant
        #[arg(long)]
        level: f64,
        /// Clear lamp, e.g. "ALL PERFECT" (inferred from the score if omitted)
        #[arg(long)]
        lamp: Option<MaimaiDxLamp>,
    },
    /// Project SEKAI rating from judgement counts
    #[command(allow_negative_numbers = true)]
    Proseka {
        #[arg(long, default_value = "0")]
        perfect: i64,
        #[arg(long, default_value = "0")]
        great: i64,
        #[arg(long, default_value = "0")]
        good: i64,
        #[arg(long, default_value = "0")]
        bad: i64,
        #[arg(long, default_value = "0")]
        miss: i64,
        /// Chart constant
        #[arg(long)]
        level: f64,
        /// Total note count
        #[arg(long)]
        max_combo: i64,
        /// Use the plus ruleset (bads worth half a point)
        #[arg(long)]
        plus: bool,
    },
    /// Evaluate a JSON array of requests
    Batch {
        /// Input file ("-" for stdin)
        #[arg(short, long, default_value = "-")]
        input: String,
    },
}
