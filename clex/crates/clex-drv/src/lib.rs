//! clex-drv - Scanner Driver
//!
//! Ties the scanner to the outside world: parses the command line, loads
//! configuration, sets up logging, opens the input and output, runs the
//! scan and hands the finished token sequence to the sink.

pub mod cli;
pub mod config;
pub mod error;
pub mod sink;

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use clex_lex::{Lexer, LexerConfig, Token};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub use cli::Cli;
pub use config::Config;
pub use error::{DriverError, Result};
pub use sink::{write_tokens, OutputFormat};

/// Input locator meaning "read standard input".
pub const STDIN_LOCATOR: &str = "-";

/// A single scan run with all settings resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Source path, or `-` for standard input.
    pub input: PathBuf,
    /// Destination path; `None` writes to standard output.
    pub output: Option<PathBuf>,
    /// Output rendering.
    pub format: OutputFormat,
    /// Scanner options.
    pub lexer: LexerConfig,
}

impl Session {
    /// Resolves a session from parsed arguments and loaded configuration.
    ///
    /// Command-line flags take precedence over configuration values.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        let mut lexer = config.lexer.to_lexer_config();
        if let Some(max) = cli.max_lexeme_len {
            lexer = lexer.with_max_lexeme_len(max);
        }
        if cli.skip_numbers {
            lexer = lexer.with_number_literals(false);
        }

        Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            format: cli.format.unwrap_or(config.format),
            lexer,
        }
    }

    /// Runs the session: open the sink, read the source, scan, render.
    ///
    /// The sink is opened before the source is read. Both are closed when
    /// this returns, on success and on error alike. Nothing is written if
    /// the scan fails.
    ///
    /// # Returns
    /// The number of tokens written.
    pub fn run(&self) -> Result<usize> {
        let mut out = self.open_output()?;
        let source = self.read_input()?;

        let tokens = self.scan(&source)?;
        write_tokens(&mut out, &tokens, self.format)?;
        out.flush()?;

        info!(tokens = tokens.len(), "wrote tokens");
        Ok(tokens.len())
    }

    /// Scans `source` with this session's scanner options.
    pub fn scan(&self, source: &str) -> Result<Vec<Token>> {
        debug!(config = ?self.lexer, "scanning {} bytes", source.len());
        Ok(Lexer::new(source, self.lexer).tokenize()?)
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path).map_err(|source| DriverError::OpenOutput {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "opened output");
                Ok(Box::new(BufWriter::new(file)))
            },
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }

    fn read_input(&self) -> Result<String> {
        let bytes = read_source(&self.input).map_err(|source| DriverError::OpenInput {
            path: self.input.clone(),
            source,
        })?;
        debug!(path = %self.input.display(), bytes = bytes.len(), "read input");

        // Non-ASCII characters never form tokens, so lossy decoding does
        // not change the token sequence
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn read_source(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == STDIN_LOCATOR {
        let mut bytes = Vec::new();
        io::stdin().lock().read_to_end(&mut bytes)?;
        Ok(bytes)
    } else {
        std::fs::read(path)
    }
}

/// Initialize the logging system.
///
/// Logs go to standard error so they never mix with tokens written to
/// standard output.
pub fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}

/// Load configuration from `path`, or from the default locations.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Entry point used by the `clex` binary.
pub fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    let session = Session::new(&cli, &config);
    debug!(?session, "starting scan");
    session.run()?;
    Ok(())
}
