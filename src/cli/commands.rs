use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chips",
    about = concat!("[+] chips v", env!("CARGO_PKG_VERSION"), " - pick people from a roster, chip by chip"),
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load people from a JSON roster file instead of the built-in list
    #[arg(short, long, global = true)]
    pub roster: Option<PathBuf>,

    /// Path to a chips.toml config (default: ./chips.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the roster and exit
    Roster,
}
