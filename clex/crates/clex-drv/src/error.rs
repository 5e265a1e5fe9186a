//! Error handling for the clex driver.
//!
//! Every failure the driver can hit ends the run; `main` prints the error
//! and exits with status 1.

use std::io;
use std::path::PathBuf;

use clex_lex::LexError;
use thiserror::Error;

/// Main error type for the clex driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The input source could not be opened or read.
    #[error("cannot open input `{}`: {source}", path.display())]
    OpenInput {
        /// Input locator as given on the command line.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// The output sink could not be opened.
    #[error("cannot open output `{}`: {source}", path.display())]
    OpenOutput {
        /// Output locator as given on the command line.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// Writing the rendered tokens failed.
    #[error("failed to write tokens: {0}")]
    Write(#[from] io::Error),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// The log subscriber could not be installed.
    #[error("failed to initialize logging: {0}")]
    Logging(String),

    /// Scanning stopped on a lexical error.
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
