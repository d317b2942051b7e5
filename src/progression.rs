//! Chord progressions in Trends `cp` form (`"4,1,5/5"`).
//!
//! The Trends API identifies the progression so far by joining chord IDs
//! with commas. A [`Progression`] compiles every entry up front and
//! renders back to the same form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::Chord;
use crate::{Error, Result, compile};

/// Separator between chord IDs in a `cp` value.
pub const SEPARATOR: char = ',';

/// An ordered sequence of compiled chords.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progression {
    chords: Vec<Chord>,
}

impl Progression {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a comma-separated list of chord symbols.
    ///
    /// The empty string is the empty progression. Any empty or malformed
    /// entry fails the whole parse with its zero-based index.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Ok(Self::new());
        }

        let chords = input
            .split(SEPARATOR)
            .enumerate()
            .map(|(index, symbol)| {
                compile(symbol).map_err(|source| Error::InvalidProgressionEntry {
                    index,
                    symbol: symbol.to_string(),
                    source: Box::new(source),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(chords = chords.len(), "parsed progression");
        Ok(Self { chords })
    }

    /// Build a progression from already-compiled chords.
    pub fn from_chords(chords: impl IntoIterator<Item = Chord>) -> Result<Self> {
        let mut progression = Self::new();
        for chord in chords {
            progression.push(chord)?;
        }
        Ok(progression)
    }

    /// Append a chord. Chords whose symbol would parse back to a different
    /// chord are rejected, so the `cp` value always means what was pushed.
    pub fn push(&mut self, chord: Chord) -> Result<()> {
        if !chord.is_notatable() {
            return Err(Error::UnnotatableChord(format!("{chord:?}")));
        }
        self.chords.push(chord);
        Ok(())
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    /// Value for the Trends `cp` query parameter, or `None` when empty
    /// (the first request of a progression carries no `cp`). Every pushed
    /// chord is notatable, so the value parses back to the same chords.
    pub fn to_query_value(&self) -> Option<String> {
        (!self.is_empty()).then(|| self.to_string())
    }
}

impl fmt::Display for Progression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, chord) in self.chords.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{chord}")?;
        }
        Ok(())
    }
}

impl FromStr for Progression {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Progression {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chords.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Function, Mode, Numeral};

    #[test]
    fn test_parse_and_render() {
        let progression = Progression::parse("1,b6,5/5,4").unwrap();
        assert_eq!(progression.len(), 4);
        assert_eq!(progression.chords()[1].mode, Mode::Aeolian);
        assert_eq!(progression.chords()[2].function, Some(Function::Five));
        assert_eq!(progression.to_string(), "1,6,5/5,4");
    }

    #[test]
    fn test_empty() {
        let progression = Progression::parse("").unwrap();
        assert!(progression.is_empty());
        assert_eq!(progression.to_query_value(), None);
    }

    #[test]
    fn test_bad_entry_reports_index() {
        match Progression::parse("1,4,,5") {
            Err(Error::InvalidProgressionEntry { index, symbol, source }) => {
                assert_eq!(index, 2);
                assert_eq!(symbol, "");
                assert!(matches!(*source, Error::EmptyTokenSequence));
            }
            other => panic!("expected InvalidProgressionEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_push_builds_query() {
        let mut progression = Progression::new();
        progression.push(Chord::simple(Mode::Lydian, Numeral::Four, None)).unwrap();
        progression.push(Chord::simple(Mode::Ionian, Numeral::One, None)).unwrap();
        assert_eq!(progression.to_query_value().as_deref(), Some("4,1"));
    }

    #[test]
    fn test_push_rejects_chords_without_a_symbol() {
        let mut progression = Progression::new();
        // Renders as "2", which parses back as Dorian.
        let ionian_two = Chord::simple(Mode::Ionian, Numeral::Two, None);
        assert!(matches!(progression.push(ionian_two), Err(Error::UnnotatableChord(_))));
        assert!(progression.is_empty());

        assert!(matches!(
            Progression::from_chords([Chord::simple(Mode::Ionian, Numeral::One, None), ionian_two]),
            Err(Error::UnnotatableChord(_))
        ));
    }

    #[test]
    fn test_query_value_reparses_to_same_notes() {
        let chords = [
            Chord::simple(Mode::Dorian, Numeral::One, None),
            Chord::simple(Mode::Locrian, Numeral::Seven, None),
            Chord::applied(Function::Seven, Numeral::Two, None),
        ];
        let progression = Progression::from_chords(chords).unwrap();
        let reparsed = Progression::parse(&progression.to_query_value().unwrap()).unwrap();
        for (a, b) in reparsed.iter().zip(progression.iter()) {
            assert_eq!(a.notes(), b.notes());
        }
    }
}
