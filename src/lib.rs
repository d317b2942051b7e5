//! # chorder: Hooktheory Chord-Symbol Compiler
//!
//! Turns the compact chord IDs served by the Hooktheory Trends API into
//! structured chords and their pitch content.
//!
//! ## Design Principles
//!
//! 1. **Parser owns nothing**: symbol → tokens → [`Chord`] is a pure function
//! 2. **Typed failures**: malformed symbols are [`Error`] values, never panics
//! 3. **Derived notes**: [`Chord::notes`] is computed on demand, not stored
//! 4. **No transport**: HTTP and authentication stay with the caller
//!
//! ## Quick Start
//!
//! ```rust
//! use chorder::{Mode, Numeral};
//!
//! # fn example() -> chorder::Result<()> {
//! let chord = chorder::compile("b76")?;
//! assert_eq!(chord.mode, Mode::Aeolian);
//! assert_eq!(chord.numeral, Numeral::Seven);
//! assert_eq!(chord.notes().as_slice(), &[7, 11, 2]);
//!
//! let progression: chorder::Progression = "1,4,5/5".parse()?;
//! assert_eq!(progression.to_string(), "1,4,5/5");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Pipeline
//!
//! | Stage | Module | Output |
//! |-------|--------|--------|
//! | Lex | [`notation::lexer`] | `Vec<Token>` |
//! | Resolve | [`notation::codes`] | `Mode` / `Numeral` / `Inversion` / `Function` |
//! | Parse | [`notation::parser`] | [`Chord`] |
//! | Voice | [`model::chord`] | [`Notes`] |

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod model;
pub mod notation;
pub mod progression;
pub mod rhythm;
pub mod trends;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{Config, OutputFormat};
pub use model::{Chord, Function, Inversion, Mode, Notes, Numeral};
pub use notation::codes::Vocabulary;
pub use notation::lexer::{Token, TokenKind, tokenize};
pub use progression::Progression;
pub use rhythm::{MeasureRhythm, TimeSignature};
pub use trends::TrendNode;

/// Compile a single chord symbol.
pub fn compile(symbol: &str) -> Result<Chord> {
    notation::parse(symbol)
}

// ============================================================================
// Error Types
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    #[error("Chord symbol produced no tokens")]
    EmptyTokenSequence,

    #[error("Unrecognized {vocabulary} code: '{code}'")]
    UnresolvedCode { vocabulary: Vocabulary, code: String },

    #[error("Unexpected token pattern: {pattern}")]
    UnexpectedTokenPattern { pattern: String },

    #[error("Invalid token count: {0} (expected 1 to 3)")]
    InvalidTokenCount(usize),

    #[error("Invalid progression entry {index} '{symbol}': {source}")]
    InvalidProgressionEntry {
        index: usize,
        symbol: String,
        #[source]
        source: Box<Error>,
    },

    #[error("Chord has no Hooktheory symbol: {0}")]
    UnnotatableChord(String),

    #[error("Invalid time signature: {0}")]
    InvalidTimeSignature(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
