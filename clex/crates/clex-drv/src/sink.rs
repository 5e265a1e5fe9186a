//! Token sink: renders a finished token sequence.

use std::io::{self, Write};

use clap::ValueEnum;
use clex_lex::Token;
use serde::{Deserialize, Serialize};

/// Rendering used by [`write_tokens`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `` <`lexeme`,code> `` pairs, each followed by one space.
    #[default]
    Pairs,
    /// One `line:column<TAB>kind<TAB>lexeme` record per line.
    Lines,
    /// Pretty-printed JSON array of token objects.
    Json,
}

/// Serialized shape of a token in the JSON output.
#[derive(Serialize)]
struct TokenRecord<'a> {
    text: &'a str,
    kind: &'static str,
    code: u32,
    subcode: i64,
    line: u32,
    column: u32,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            text: token.text(),
            kind: token.kind().name(),
            code: token.kind().code(),
            subcode: token.code().map_or(-1, i64::from),
            line: token.line(),
            column: token.column(),
        }
    }
}

/// Writes `tokens` to `out` in the given format.
///
/// The `pairs` format is byte-compatible with the classic scanner output:
/// no separator beyond the single space after each pair and no trailing
/// newline.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Pairs => {
            for token in tokens {
                write!(out, "{token} ")?;
            }
        },
        OutputFormat::Lines => {
            for token in tokens {
                writeln!(
                    out,
                    "{}:{}\t{}\t{}",
                    token.line(),
                    token.column(),
                    token.kind(),
                    token.text()
                )?;
            }
        },
        OutputFormat::Json => {
            let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
