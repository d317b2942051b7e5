//! Chord-symbol lexer: tokenizes a Hooktheory chord ID.

use std::fmt;

use crate::{Error, Result};

/// A token from the lexer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, start: usize, text: String) -> Self {
        let end = start + text.chars().count();
        Self { kind, span: Span { start, end }, text }
    }
}

/// Character span (`start..end`, counted in chars, not bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A single letter (mode code).
    Letter,
    /// A single digit (numeral or function).
    Number,
    /// The digits directly following a `Number` (inversion figure).
    AdditionalNumbers,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Letter => "Letter",
            TokenKind::Number => "Number",
            TokenKind::AdditionalNumbers => "AdditionalNumbers",
        })
    }
}

/// Lexical class of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Letter,
    Digit,
    Slash,
    Other,
}

/// Classify one character. Only ASCII letters and decimal digits are
/// part of the notation.
pub fn classify(ch: char) -> CharClass {
    match ch {
        '/' => CharClass::Slash,
        c if c.is_ascii_alphabetic() => CharClass::Letter,
        c if c.is_ascii_digit() => CharClass::Digit,
        _ => CharClass::Other,
    }
}

/// Tokenize a chord symbol.
///
/// Slashes are consumed without producing a token; the parser recovers
/// the applied-chord shape from the kinds alone.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().enumerate().peekable();

    while let Some((pos, ch)) = chars.next() {
        match classify(ch) {
            CharClass::Letter => tokens.push(Token::new(TokenKind::Letter, pos, ch.to_string())),

            CharClass::Slash => {}

            CharClass::Digit => {
                tokens.push(Token::new(TokenKind::Number, pos, ch.to_string()));

                let mut run = String::new();
                while let Some(&(_, c)) = chars.peek() {
                    if classify(c) != CharClass::Digit {
                        break;
                    }
                    run.push(c);
                    chars.next();
                }
                if !run.is_empty() {
                    tokens.push(Token::new(TokenKind::AdditionalNumbers, pos + 1, run));
                }
            }

            CharClass::Other => {
                return Err(Error::InvalidCharacter { character: ch, position: pos });
            }
        }
    }

    if tokens.is_empty() {
        return Err(Error::EmptyTokenSequence);
    }

    Ok(tokens)
}
