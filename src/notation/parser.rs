//! Chord-symbol parser.
//!
//! The notation is a fixed-depth language of one to three tokens, so the
//! grammar is a single production table keyed on token kinds rather than a
//! recursive descent:
//!
//! | Kinds | Shape |
//! |-------|-------|
//! | `Letter Number AdditionalNumbers` | simple: mode, numeral, inversion |
//! | `Number AdditionalNumbers Number` | applied: function, inversion, numeral |
//! | `Letter Number` | simple: mode, numeral |
//! | `Number AdditionalNumbers` | simple: numeral (default mode), inversion |
//! | `Number Number` | applied: function, numeral |
//! | `Number` | simple: numeral (default mode) |

use super::codes::resolve;
use super::lexer::{Token, TokenKind};
use crate::model::{Chord, Function, Inversion, Mode, Numeral};
use crate::{Error, Result};

/// Parse a token sequence into a chord.
pub fn parse_chord(tokens: &[Token]) -> Result<Chord> {
    use TokenKind::{AdditionalNumbers, Letter, Number};

    match tokens {
        [a, b, c] => match (a.kind, b.kind, c.kind) {
            (Letter, Number, AdditionalNumbers) => {
                let mode: Mode = resolve(&a.text)?;
                let numeral: Numeral = resolve(&b.text)?;
                let inversion: Inversion = resolve(&c.text)?;
                Ok(Chord::simple(mode, numeral, Some(inversion)))
            }
            (Number, AdditionalNumbers, Number) => {
                let function: Function = resolve(&a.text)?;
                let inversion: Inversion = resolve(&b.text)?;
                let numeral: Numeral = resolve(&c.text)?;
                Ok(Chord::applied(function, numeral, Some(inversion)))
            }
            _ => Err(unexpected(tokens)),
        },

        [a, b] => match (a.kind, b.kind) {
            (Letter, Number) => {
                let mode: Mode = resolve(&a.text)?;
                let numeral: Numeral = resolve(&b.text)?;
                Ok(Chord::simple(mode, numeral, None))
            }
            (Number, AdditionalNumbers) => {
                let numeral: Numeral = resolve(&a.text)?;
                let inversion: Inversion = resolve(&b.text)?;
                Ok(Chord::simple(numeral.default_mode(), numeral, Some(inversion)))
            }
            (Number, Number) => {
                let function: Function = resolve(&a.text)?;
                let numeral: Numeral = resolve(&b.text)?;
                Ok(Chord::applied(function, numeral, None))
            }
            _ => Err(unexpected(tokens)),
        },

        [a] => match a.kind {
            Number => {
                let numeral: Numeral = resolve(&a.text)?;
                Ok(Chord::simple(numeral.default_mode(), numeral, None))
            }
            _ => Err(unexpected(tokens)),
        },

        _ => Err(Error::InvalidTokenCount(tokens.len())),
    }
}

fn unexpected(tokens: &[Token]) -> Error {
    let pattern = tokens
        .iter()
        .map(|t| t.kind.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    Error::UnexpectedTokenPattern { pattern }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::codes::Vocabulary;
    use crate::notation::lexer::{Span, tokenize};

    fn token(kind: TokenKind, text: &str) -> Token {
        Token {
            kind,
            span: Span { start: 0, end: text.len() },
            text: text.to_string(),
        }
    }

    fn parse_str(input: &str) -> Result<Chord> {
        parse_chord(&tokenize(input)?)
    }

    #[test]
    fn test_bare_numeral() {
        let chord = parse_str("1").unwrap();
        assert_eq!(chord, Chord::simple(Mode::Ionian, Numeral::One, None));
        assert_eq!(chord.function, None);
        assert_eq!(chord.inversion, None);
    }

    #[test]
    fn test_mode_numeral_inversion() {
        let chord = parse_str("b76").unwrap();
        assert_eq!(chord, Chord::simple(Mode::Aeolian, Numeral::Seven, Some(Inversion::Six)));
    }

    #[test]
    fn test_mode_numeral() {
        assert_eq!(parse_str("D4").unwrap(), Chord::simple(Mode::Dorian, Numeral::Four, None));
    }

    #[test]
    fn test_numeral_inversion_uses_default_mode() {
        assert_eq!(
            parse_str("57").unwrap(),
            Chord::simple(Mode::Mixolydian, Numeral::Five, Some(Inversion::Seven))
        );
    }

    #[test]
    fn test_applied_forms() {
        assert_eq!(parse_str("7/5").unwrap(), Chord::applied(Function::Seven, Numeral::Five, None));
        assert_eq!(
            parse_str("443/7").unwrap(),
            Chord::applied(Function::Four, Numeral::Seven, Some(Inversion::FourThree))
        );
    }

    #[test]
    fn test_token_count_out_of_range() {
        assert!(matches!(parse_chord(&[]), Err(Error::InvalidTokenCount(0))));

        let four = vec![
            token(TokenKind::Letter, "b"),
            token(TokenKind::Number, "7"),
            token(TokenKind::AdditionalNumbers, "6"),
            token(TokenKind::Number, "1"),
        ];
        assert!(matches!(parse_chord(&four), Err(Error::InvalidTokenCount(4))));
    }

    #[test]
    fn test_unexpected_patterns() {
        match parse_str("bm") {
            Err(Error::UnexpectedTokenPattern { pattern }) => assert_eq!(pattern, "Letter Letter"),
            other => panic!("expected UnexpectedTokenPattern, got {other:?}"),
        }
        assert!(matches!(parse_str("b"), Err(Error::UnexpectedTokenPattern { .. })));
        assert!(matches!(parse_str("1b"), Err(Error::UnexpectedTokenPattern { .. })));
        assert!(matches!(parse_str("b7b"), Err(Error::UnexpectedTokenPattern { .. })));
    }

    #[test]
    fn test_unresolved_codes_name_their_vocabulary() {
        let cases = [
            ("x1", Vocabulary::Mode, "x"),
            ("8", Vocabulary::Numeral, "8"),
            ("155", Vocabulary::Inversion, "55"),
            ("6/1", Vocabulary::Function, "6"),
            ("542/9", Vocabulary::Numeral, "9"),
        ];
        for (input, expected_vocabulary, expected_code) in cases {
            match parse_str(input) {
                Err(Error::UnresolvedCode { vocabulary, code }) => {
                    assert_eq!(vocabulary, expected_vocabulary, "{input}");
                    assert_eq!(code, expected_code, "{input}");
                }
                other => panic!("{input}: expected UnresolvedCode, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_applied_resolves_function_first() {
        // Both function and inversion are bad; the function is reported.
        match parse_str("999/1") {
            Err(Error::UnresolvedCode { vocabulary, .. }) => assert_eq!(vocabulary, Vocabulary::Function),
            other => panic!("expected UnresolvedCode, got {other:?}"),
        }
    }
}
