//! Command line options for the `roshambo` binary.
use crate::*;
use clap::Parser;
use std::path::PathBuf;

/// Play Rock-Paper-Scissors against the computer.
#[derive(Debug, Parser)]
#[command(name = "roshambo", version, about)]
pub struct Args {
    /// Player name; skips the name prompt.
    #[arg(long)]
    pub name: Option<String>,
    /// Seed for the computer's moves, for a reproducible session.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print INFO reports and the closing summary as JSON.
    #[arg(long)]
    pub json: bool,
    /// Use plain line prompts even on an interactive terminal.
    #[arg(long)]
    pub plain: bool,
    /// Log debug detail to stderr.
    #[arg(short, long)]
    pub verbose: bool,
    /// Also write a debug log file into this directory.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            name: self.name.clone(),
            format: match self.json {
                true => Format::Json,
                false => Format::Text,
            },
        }
    }
}
