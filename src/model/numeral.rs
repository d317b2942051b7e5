//! Scale-degree numerals.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Mode;

/// Scale degree a chord is built on (`1`..`7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numeral {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
}

impl Numeral {
    pub const ALL: [Numeral; 7] = [
        Numeral::One,
        Numeral::Two,
        Numeral::Three,
        Numeral::Four,
        Numeral::Five,
        Numeral::Six,
        Numeral::Seven,
    ];

    /// Zero-based root index into a mode table.
    pub fn root(self) -> usize {
        match self {
            Numeral::One => 0,
            Numeral::Two => 1,
            Numeral::Three => 2,
            Numeral::Four => 3,
            Numeral::Five => 4,
            Numeral::Six => 5,
            Numeral::Seven => 6,
        }
    }

    /// Mode used when a simple chord carries no mode letter.
    pub fn default_mode(self) -> Mode {
        match self {
            Numeral::One => Mode::Ionian,
            Numeral::Two => Mode::Dorian,
            Numeral::Three => Mode::Phrygian,
            Numeral::Four => Mode::Lydian,
            Numeral::Five => Mode::Mixolydian,
            Numeral::Six => Mode::Aeolian,
            Numeral::Seven => Mode::Locrian,
        }
    }

    /// The single digit this numeral is written as.
    pub fn code(self) -> &'static str {
        match self {
            Numeral::One => "1",
            Numeral::Two => "2",
            Numeral::Three => "3",
            Numeral::Four => "4",
            Numeral::Five => "5",
            Numeral::Six => "6",
            Numeral::Seven => "7",
        }
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
