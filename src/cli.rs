use crate::models::TieBreak;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "alien-order")]
#[command(about = "Infer an alphabet's ordering from a sorted word list")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive the ordering for a word list
    Solve {
        /// Words in sorted order (read from --file or stdin when omitted)
        words: Vec<String>,
        /// Read words from a file, one per line (`-` for stdin)
        #[arg(long, short, conflicts_with = "words")]
        file: Option<PathBuf>,
        /// How to order characters that are otherwise unconstrained
        #[arg(long, value_enum, env = "ALIEN_ORDER_TIE_BREAK", default_value_t = TieBreak::FirstSeen)]
        tie_break: TieBreak,
        /// Print a JSON report instead of the bare ordering
        #[arg(long)]
        json: bool,
        /// Fail with the reason when no ordering exists
        #[arg(long)]
        strict: bool,
    },

    /// Run the built-in reference scenarios
    Demo,
}
