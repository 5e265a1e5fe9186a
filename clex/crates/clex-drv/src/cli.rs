//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::sink::OutputFormat;

/// clex - scan C-like source text into classified tokens
///
/// Reads INPUT, scans it, and writes the token sequence to OUTPUT or to
/// standard output.
#[derive(Parser, Debug)]
#[command(name = "clex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan C-like source text into classified tokens", long_about = None)]
pub struct Cli {
    /// Source file to scan (`-` reads standard input)
    pub input: PathBuf,

    /// Output file (default: standard output)
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Longest lexeme accepted, in characters (0 disables the limit)
    #[arg(long, value_name = "N")]
    pub max_lexeme_len: Option<usize>,

    /// Skip digits instead of emitting number literals
    #[arg(long)]
    pub skip_numbers: bool,

    /// Path to configuration file
    #[arg(short, long, env = "CLEX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "CLEX_VERBOSE")]
    pub verbose: bool,

    /// Disable color output
    #[arg(long, env = "CLEX_NO_COLOR")]
    pub no_color: bool,
}
