//! Hooktheory code tables.
//!
//! Each vocabulary maps the raw text of a single token to a model value.
//! Lookups are `Option`-returning; [`resolve`] lifts a miss into
//! [`Error::UnresolvedCode`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Function, Inversion, Mode, Numeral};
use crate::{Error, Result};

/// The four closed vocabularies a token can be resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vocabulary {
    Mode,
    Numeral,
    Inversion,
    Function,
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Vocabulary::Mode => "mode",
            Vocabulary::Numeral => "numeral",
            Vocabulary::Inversion => "inversion",
            Vocabulary::Function => "function",
        })
    }
}

/// A model value with a Hooktheory text code.
pub trait HooktheoryCode: Sized {
    const VOCABULARY: Vocabulary;

    fn from_code(code: &str) -> Option<Self>;
}

/// Resolve `code` against `T`'s vocabulary.
pub fn resolve<T: HooktheoryCode>(code: &str) -> Result<T> {
    T::from_code(code).ok_or_else(|| Error::UnresolvedCode {
        vocabulary: T::VOCABULARY,
        code: code.to_string(),
    })
}

impl HooktheoryCode for Numeral {
    const VOCABULARY: Vocabulary = Vocabulary::Numeral;

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Numeral::One),
            "2" => Some(Numeral::Two),
            "3" => Some(Numeral::Three),
            "4" => Some(Numeral::Four),
            "5" => Some(Numeral::Five),
            "6" => Some(Numeral::Six),
            "7" => Some(Numeral::Seven),
            _ => None,
        }
    }
}

impl HooktheoryCode for Mode {
    const VOCABULARY: Vocabulary = Vocabulary::Mode;

    /// Case-insensitive. Ionian has no code.
    fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "d" => Some(Mode::Dorian),
            "y" => Some(Mode::Phrygian),
            "l" => Some(Mode::Lydian),
            "m" => Some(Mode::Mixolydian),
            "b" => Some(Mode::Aeolian),
            "c" => Some(Mode::Locrian),
            _ => None,
        }
    }
}

impl HooktheoryCode for Inversion {
    const VOCABULARY: Vocabulary = Vocabulary::Inversion;

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "42" => Some(Inversion::FourTwo),
            "43" => Some(Inversion::FourThree),
            "6" => Some(Inversion::Six),
            "64" => Some(Inversion::SixFour),
            "65" => Some(Inversion::SixFive),
            "7" => Some(Inversion::Seven),
            _ => None,
        }
    }
}

impl HooktheoryCode for Function {
    const VOCABULARY: Vocabulary = Vocabulary::Function;

    fn from_code(code: &str) -> Option<Self> {
        match code {
            "4" => Some(Function::Four),
            "5" => Some(Function::Five),
            "7" => Some(Function::Seven),
            _ => None,
        }
    }
}
