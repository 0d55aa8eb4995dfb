mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use rating_core::{Judgements, RatingRequest};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries results only
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rating=warn,rating_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let request = match args.command {
        Command::Wacca { score, level, plus } => {
            if plus {
                RatingRequest::WaccaPlus { score, level }
            } else {
                RatingRequest::Wacca { score, level }
            }
        }
        Command::WaccaInverse { rate, level, plus } => {
            if plus {
                RatingRequest::WaccaPlusInverse { rate, level }
            } else {
                RatingRequest::WaccaInverse { rate, level }
            }
        }
        Command::MaimaiDx { score, level, lamp } => RatingRequest::MaimaiDx { score, level, lamp },
        Command::Proseka {
            perfect,
            great,
            good,
            bad,
            miss,
            level,
            max_combo,
            plus,
        } => {
            let judgements = Judgements::new(perfect, great, good, bad, miss);
            if plus {
                RatingRequest::ProsekaPlus {
                    judgements,
                    level,
                    max_combo,
                }
            } else {
                RatingRequest::Proseka {
                    judgements,
                    level,
                    max_combo,
                }
            }
        }
        Command::Batch { input } => return commands::batch::run(&input),
    };

    commands::single::run(&request, args.json)
}
