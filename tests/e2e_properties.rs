//! Property tests for the chord-symbol compiler.

use chorder::{Error, Mode, compile, tokenize};
use proptest::prelude::*;

/// Any symbol the Hooktheory grammar accepts.
fn valid_symbol() -> impl Strategy<Value = String> {
    let letter = prop::sample::select(vec!["", "d", "D", "y", "Y", "l", "L", "m", "M", "b", "B", "c", "C"]);
    let numeral = prop::sample::select(vec!["1", "2", "3", "4", "5", "6", "7"]);
    let inversion = prop::sample::select(vec!["", "6", "64", "7", "65", "43", "42"]);
    let function = prop::sample::select(vec!["4", "5", "7"]);

    let simple = (letter, numeral.clone(), inversion.clone())
        .prop_map(|(l, n, i)| format!("{l}{n}{i}"));
    let applied = (function, inversion, numeral)
        .prop_map(|(f, i, n)| format!("{f}{i}/{n}"));

    prop_oneof![simple, applied]
}

proptest! {
    #[test]
    fn tokenize_never_panics(input in "\\PC{0,12}") {
        let _ = tokenize(&input);
        let _ = compile(&input);
    }

    #[test]
    fn foreign_character_is_reported(
        prefix in "[A-Za-z0-9/]{0,4}",
        bad in "[ #,.\\-+*()\\[\\]²½٣Ⅻéß０]",
        suffix in "[A-Za-z0-9/]{0,4}",
    ) {
        let input = format!("{prefix}{bad}{suffix}");
        match tokenize(&input) {
            Err(Error::InvalidCharacter { character, position }) => {
                prop_assert_eq!(character.to_string(), bad);
                prop_assert_eq!(position, prefix.chars().count());
            }
            other => prop_assert!(false, "expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn valid_symbols_compile(symbol in valid_symbol()) {
        let chord = compile(&symbol).unwrap();
        let notes = chord.notes();
        prop_assert!(notes.len() == 3 || notes.len() == 4);
        prop_assert!(notes.iter().all(|&n| n < 12));
        if chord.is_applied() {
            prop_assert_eq!(chord.mode, Mode::Ionian);
        }
    }

    #[test]
    fn rendered_symbols_reparse(symbol in valid_symbol()) {
        let chord = compile(&symbol).unwrap();
        let rendered = chord.to_string();
        let reparsed = compile(&rendered).unwrap();
        prop_assert_eq!(reparsed, chord);
        prop_assert_eq!(reparsed.notes(), chord.notes());
    }

    #[test]
    fn long_token_sequences_are_rejected(symbol in "[1-7]{2}/[1-7]/[1-7]") {
        prop_assert!(matches!(compile(&symbol), Err(Error::InvalidTokenCount(_))));
    }
}
