//! # Hooktheory Chord Notation
//!
//! Compiler for Trends API chord IDs (`"1"`, `"b76"`, `"443/7"`, ...).
//! Pure functions with no I/O and no state.

pub mod codes;
pub mod lexer;
pub mod parser;

use crate::Result;
use crate::model::Chord;

/// Parse a chord symbol into a [`Chord`].
pub fn parse(symbol: &str) -> Result<Chord> {
    let tokens = lexer::tokenize(symbol)?;
    tracing::trace!(symbol, tokens = tokens.len(), "tokenized chord symbol");

    let chord = parser::parse_chord(&tokens)?;
    tracing::debug!(symbol, %chord, mode = %chord.mode, "parsed chord symbol");
    Ok(chord)
}
